use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle of a forum topic. Stored and serialized as the upper-case name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicStatus {
    #[default]
    NaoRespondido,
    NaoSolucionado,
    Solucionado,
    Fechado,
}

impl TopicStatus {
    pub fn as_db_str(&self) -> &'static str {
        match self {
            TopicStatus::NaoRespondido => "NAO_RESPONDIDO",
            TopicStatus::NaoSolucionado => "NAO_SOLUCIONADO",
            TopicStatus::Solucionado => "SOLUCIONADO",
            TopicStatus::Fechado => "FECHADO",
        }
    }

    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "NAO_RESPONDIDO" => Some(TopicStatus::NaoRespondido),
            "NAO_SOLUCIONADO" => Some(TopicStatus::NaoSolucionado),
            "SOLUCIONADO" => Some(TopicStatus::Solucionado),
            "FECHADO" => Some(TopicStatus::Fechado),
            _ => None,
        }
    }
}
