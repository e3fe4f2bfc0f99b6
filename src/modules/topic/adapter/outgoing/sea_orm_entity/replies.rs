use sea_orm::entity::prelude::*;

use crate::modules::topic::application::ports::outgoing::ReplyView;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "replies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub topic_id: i64,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub author_name: String,

    pub is_solution: bool,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_view(&self) -> ReplyView {
        ReplyView {
            id: self.id,
            message: self.message.clone(),
            created_at: self.created_at.into(),
            author_name: self.author_name.clone(),
            is_solution: self.is_solution,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::topics::Entity",
        from = "Column::TopicId",
        to = "super::topics::Column::Id"
    )]
    Topic,
}

impl Related<super::topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
