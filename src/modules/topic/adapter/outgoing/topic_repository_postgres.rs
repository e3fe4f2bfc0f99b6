use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, Set, SqlErr,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::error;

use crate::modules::topic::application::ports::outgoing::{
    NewTopic, TopicRepository, TopicRepositoryError, TopicSummary, UpdateTopicData,
};

// SeaORM entity imports
use super::sea_orm_entity::topics::{
    ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel,
};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn begin(&self) -> Result<DatabaseTransaction, TopicRepositoryError> {
        self.db
            .begin()
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))
    }
}

async fn commit(txn: DatabaseTransaction) -> Result<(), TopicRepositoryError> {
    txn.commit()
        .await
        .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))
}

/// Rolls the transaction back and hands the original error through.
async fn abort(txn: DatabaseTransaction, err: TopicRepositoryError) -> TopicRepositoryError {
    if let Err(e) = txn.rollback().await {
        error!(error = %e, "Rollback failed");
    }
    err
}

// Only `course_id` carries a foreign key on `topics`.
fn map_insert_error(err: DbErr) -> TopicRepositoryError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => TopicRepositoryError::CourseNotFound,
        _ => TopicRepositoryError::DatabaseError(err.to_string()),
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn create_topic(&self, data: NewTopic) -> Result<TopicSummary, TopicRepositoryError> {
        let txn = self.begin().await?;

        let active = TopicActiveModel {
            title: Set(data.title),
            message: Set(data.message),
            status: Set(data.status.as_db_str().to_string()),
            course_id: Set(data.course_id),
            created_at: Set(data.created_at.into()),
            ..Default::default()
        };

        let inserted: TopicModel = match active.insert(&txn).await {
            Ok(model) => model,
            Err(e) => return Err(abort(txn, map_insert_error(e)).await),
        };

        commit(txn).await?;

        inserted
            .to_summary()
            .map_err(TopicRepositoryError::InvalidData)
    }

    async fn update_topic(
        &self,
        topic_id: i64,
        data: UpdateTopicData,
    ) -> Result<TopicSummary, TopicRepositoryError> {
        let txn = self.begin().await?;

        let existing = match TopicEntity::find_by_id(topic_id).one(&txn).await {
            Ok(Some(model)) => model,
            Ok(None) => return Err(abort(txn, TopicRepositoryError::TopicNotFound).await),
            Err(e) => {
                return Err(abort(txn, TopicRepositoryError::DatabaseError(e.to_string())).await)
            }
        };

        let mut active: TopicActiveModel = existing.into();
        active.title = Set(data.title);
        active.message = Set(data.message);

        let updated: TopicModel = match active.update(&txn).await {
            Ok(model) => model,
            Err(e) => {
                return Err(abort(txn, TopicRepositoryError::DatabaseError(e.to_string())).await)
            }
        };

        commit(txn).await?;

        updated
            .to_summary()
            .map_err(TopicRepositoryError::InvalidData)
    }

    async fn delete_topic(&self, topic_id: i64) -> Result<(), TopicRepositoryError> {
        let txn = self.begin().await?;

        let result = match TopicEntity::delete_by_id(topic_id).exec(&txn).await {
            Ok(result) => result,
            Err(e) => {
                return Err(abort(txn, TopicRepositoryError::DatabaseError(e.to_string())).await)
            }
        };

        if result.rows_affected == 0 {
            return Err(abort(txn, TopicRepositoryError::TopicNotFound).await);
        }

        commit(txn).await
    }
}
