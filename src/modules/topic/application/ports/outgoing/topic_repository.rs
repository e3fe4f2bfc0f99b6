use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::topic::application::domain::TopicStatus;

use super::TopicSummary;

// Input DTO for inserting a topic. The course has already been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTopic {
    pub title: String,
    pub message: String,
    pub course_id: i64,
    pub status: TopicStatus,
    pub created_at: DateTime<Utc>,
}

// Only title and message are mutable; course and id never change.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTopicData {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Topic not found")]
    TopicNotFound,

    /// The referenced course vanished before the insert committed.
    #[error("Course not found")]
    CourseNotFound,

    #[error("Inconsistent data: {0}")]
    InvalidData(String),
}

/// Write side. Every method runs inside its own transaction.
#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn create_topic(&self, data: NewTopic) -> Result<TopicSummary, TopicRepositoryError>;

    async fn update_topic(
        &self,
        topic_id: i64,
        data: UpdateTopicData,
    ) -> Result<TopicSummary, TopicRepositoryError>;

    async fn delete_topic(&self, topic_id: i64) -> Result<(), TopicRepositoryError>;
}
