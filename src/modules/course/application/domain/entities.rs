use serde::{Deserialize, Serialize};

/// A course a topic is filed under. Managed outside this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub category: String,
}
