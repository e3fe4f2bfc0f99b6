use async_trait::async_trait;

use crate::modules::topic::application::ports::outgoing::{TopicSummary, UpdateTopicData};

use super::topic_form::{validate_message, validate_title, TopicFormError};

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTopicCommand {
    title: String,
    message: String,
}

impl UpdateTopicCommand {
    pub fn new(title: &str, message: &str) -> Result<Self, TopicFormError> {
        Ok(Self {
            title: validate_title(title)?,
            message: validate_message(message)?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<UpdateTopicCommand> for UpdateTopicData {
    fn from(command: UpdateTopicCommand) -> Self {
        UpdateTopicData {
            title: command.title,
            message: command.message,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTopicError {
    #[error("Topic not found")]
    TopicNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateTopicUseCase: Send + Sync {
    async fn execute(
        &self,
        topic_id: i64,
        command: UpdateTopicCommand,
    ) -> Result<TopicSummary, UpdateTopicError>;
}
