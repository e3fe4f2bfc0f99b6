use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::course::application::domain::Course;
use crate::modules::topic::application::domain::TopicStatus;
use crate::modules::topic::application::ports::outgoing::{NewTopic, TopicSummary};

use super::topic_form::{validate_message, validate_title, TopicFormError};

//
// ──────────────────────────────────────────────────────────
// Create Topic Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTopicCommand {
    title: String,
    message: String,
    course_id: i64,
}

impl CreateTopicCommand {
    pub fn new(title: &str, message: &str, course_id: i64) -> Result<Self, TopicFormError> {
        let title = validate_title(title)?;
        let message = validate_message(message)?;

        if course_id <= 0 {
            return Err(TopicFormError::InvalidCourseId);
        }

        Ok(Self {
            title,
            message,
            course_id,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn course_id(&self) -> i64 {
        self.course_id
    }

    /// Builds the row to insert once the referenced course is known to exist.
    pub fn into_new_topic(self, course: &Course, now: DateTime<Utc>) -> NewTopic {
        NewTopic {
            title: self.title,
            message: self.message,
            course_id: course.id,
            status: TopicStatus::NaoRespondido,
            created_at: now,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTopicError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateTopicUseCase: Send + Sync {
    async fn execute(&self, command: CreateTopicCommand)
        -> Result<TopicSummary, CreateTopicError>;
}
