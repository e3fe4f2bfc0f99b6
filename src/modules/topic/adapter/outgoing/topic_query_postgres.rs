use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Select,
};
use sea_orm::sea_query::JoinType;
use std::sync::Arc;

use crate::modules::course::adapter::outgoing::sea_orm_entity::{
    Column as CourseColumn, Entity as CourseEntity,
};
use crate::modules::topic::application::ports::outgoing::{
    PageRequest, PageResult, SortDirection, TopicDetailView, TopicListFilter, TopicQuery,
    TopicQueryError, TopicSort, TopicSortField, TopicSummary,
};

// SeaORM entities
use super::sea_orm_entity::replies::{Column as ReplyColumn, Entity as ReplyEntity};
use super::sea_orm_entity::topics::{
    Column as TopicColumn, Entity as TopicEntity, Model as TopicModel, Relation as TopicRelation,
};

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn filtered_topics(filter: &TopicListFilter) -> Select<TopicEntity> {
    let select = TopicEntity::find();

    match &filter.course_name {
        Some(name) => select
            .join(JoinType::InnerJoin, TopicRelation::Course.def())
            .filter(CourseColumn::Name.eq(name.as_str())),
        None => select,
    }
}

fn sort_column(field: TopicSortField) -> TopicColumn {
    match field {
        TopicSortField::Id => TopicColumn::Id,
        TopicSortField::Title => TopicColumn::Title,
        TopicSortField::CreatedAt => TopicColumn::CreatedAt,
        TopicSortField::Status => TopicColumn::Status,
    }
}

fn sorted(select: Select<TopicEntity>, sort: TopicSort) -> Select<TopicEntity> {
    let order = match sort.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    let select = select.order_by(sort_column(sort.field), order);

    // Ties on non-unique columns must not reorder rows between pages
    if sort.field == TopicSortField::Id {
        select
    } else {
        select.order_by_asc(TopicColumn::Id)
    }
}

fn to_summaries(models: Vec<TopicModel>) -> Result<Vec<TopicSummary>, TopicQueryError> {
    models
        .iter()
        .map(|m| m.to_summary().map_err(TopicQueryError::InvalidData))
        .collect()
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list(
        &self,
        filter: &TopicListFilter,
        sort: TopicSort,
        page: PageRequest,
    ) -> Result<PageResult<TopicSummary>, TopicQueryError> {
        let total = filtered_topics(filter)
            .count(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        let models: Vec<TopicModel> = sorted(filtered_topics(filter), sort)
            .offset(page.offset())
            .limit(page.size)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        Ok(PageResult::new(to_summaries(models)?, page, total))
    }

    async fn get_detail(&self, topic_id: i64) -> Result<Option<TopicDetailView>, TopicQueryError> {
        let Some(topic) = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?
        else {
            return Ok(None);
        };

        let course = CourseEntity::find_by_id(topic.course_id)
            .one(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?
            .ok_or_else(|| {
                TopicQueryError::InvalidData(format!(
                    "topic {} references missing course {}",
                    topic.id, topic.course_id
                ))
            })?;

        let replies = ReplyEntity::find()
            .filter(ReplyColumn::TopicId.eq(topic.id))
            .order_by_asc(ReplyColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| TopicQueryError::DatabaseError(e.to_string()))?;

        let summary = topic.to_summary().map_err(TopicQueryError::InvalidData)?;

        Ok(Some(TopicDetailView {
            id: summary.id,
            title: summary.title,
            message: summary.message,
            created_at: summary.created_at,
            status: summary.status,
            course_name: course.name,
            replies: replies.iter().map(|r| r.to_view()).collect(),
        }))
    }
}
