use async_trait::async_trait;

use crate::modules::topic::application::ports::outgoing::{
    PageResult, TopicCacheError, TopicListCache, TopicListKey, TopicSummary,
};

/// Caching disabled: every lookup misses and nothing is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTopicListCache;

#[async_trait]
impl TopicListCache for NoopTopicListCache {
    async fn generation(&self) -> Result<u64, TopicCacheError> {
        Ok(0)
    }

    async fn get(
        &self,
        _key: &TopicListKey,
    ) -> Result<Option<PageResult<TopicSummary>>, TopicCacheError> {
        Ok(None)
    }

    async fn put(
        &self,
        _key: TopicListKey,
        _page: PageResult<TopicSummary>,
        _generation: u64,
    ) -> Result<bool, TopicCacheError> {
        Ok(true)
    }

    async fn evict_all(&self) -> Result<(), TopicCacheError> {
        Ok(())
    }
}
