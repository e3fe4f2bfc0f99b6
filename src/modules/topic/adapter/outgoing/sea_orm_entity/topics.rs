use sea_orm::entity::prelude::*;

use crate::modules::topic::application::domain::TopicStatus;
use crate::modules::topic::application::ports::outgoing::TopicSummary;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub status: String,

    pub course_id: i64,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// Fails only when the stored status is not a known value.
    pub fn to_summary(&self) -> Result<TopicSummary, String> {
        let status = TopicStatus::from_db_str(&self.status)
            .ok_or_else(|| format!("unknown topic status '{}'", self.status))?;

        Ok(TopicSummary {
            id: self.id,
            title: self.title.clone(),
            message: self.message.clone(),
            created_at: self.created_at.into(),
            status,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::course::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CourseId",
        to = "crate::modules::course::adapter::outgoing::sea_orm_entity::Column::Id"
    )]
    Course,

    #[sea_orm(has_many = "super::replies::Entity")]
    Replies,
}

impl Related<crate::modules::course::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::replies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Replies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
