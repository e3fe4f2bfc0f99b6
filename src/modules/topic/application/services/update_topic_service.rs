use async_trait::async_trait;
use tracing::info;

use crate::modules::topic::application::ports::{
    incoming::use_cases::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase},
    outgoing::{TopicRepository, TopicRepositoryError, TopicSummary},
};

use super::{evict_topic_list, SharedTopicListCache};

pub struct UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
    cache: SharedTopicListCache,
}

impl<R> UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R, cache: SharedTopicListCache) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R> UpdateTopicUseCase for UpdateTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(
        &self,
        topic_id: i64,
        command: UpdateTopicCommand,
    ) -> Result<TopicSummary, UpdateTopicError> {
        let updated = self
            .repository
            .update_topic(topic_id, command.into())
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => UpdateTopicError::TopicNotFound,
                other => UpdateTopicError::RepositoryError(other.to_string()),
            })?;

        evict_topic_list(self.cache.as_ref()).await;
        info!(topic_id, "Topic updated");

        Ok(updated)
    }
}
