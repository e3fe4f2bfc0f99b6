use async_trait::async_trait;
use tracing::info;

use crate::modules::topic::application::ports::{
    incoming::use_cases::{DeleteTopicError, DeleteTopicUseCase},
    outgoing::{TopicRepository, TopicRepositoryError},
};

use super::{evict_topic_list, SharedTopicListCache};

pub struct DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    repository: R,
    cache: SharedTopicListCache,
}

impl<R> DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    pub fn new(repository: R, cache: SharedTopicListCache) -> Self {
        Self { repository, cache }
    }
}

#[async_trait]
impl<R> DeleteTopicUseCase for DeleteTopicService<R>
where
    R: TopicRepository + Send + Sync,
{
    async fn execute(&self, topic_id: i64) -> Result<(), DeleteTopicError> {
        self.repository
            .delete_topic(topic_id)
            .await
            .map_err(|e| match e {
                TopicRepositoryError::TopicNotFound => DeleteTopicError::TopicNotFound,
                other => DeleteTopicError::RepositoryError(other.to_string()),
            })?;

        evict_topic_list(self.cache.as_ref()).await;
        info!(topic_id, "Topic deleted");

        Ok(())
    }
}
