use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::topic::application::ports::outgoing::{
    PageResult, TopicCacheError, TopicListCache, TopicListKey, TopicSummary,
};

#[derive(Debug, Default)]
struct CacheState {
    generation: u64,
    entries: HashMap<TopicListKey, PageResult<TopicSummary>>,
}

/// Process-local listing cache. Unbounded; cleared on every write.
#[derive(Debug, Default)]
pub struct InMemoryTopicListCache {
    state: RwLock<CacheState>,
}

impl InMemoryTopicListCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TopicListCache for InMemoryTopicListCache {
    async fn generation(&self) -> Result<u64, TopicCacheError> {
        Ok(self.state.read().await.generation)
    }

    async fn get(
        &self,
        key: &TopicListKey,
    ) -> Result<Option<PageResult<TopicSummary>>, TopicCacheError> {
        Ok(self.state.read().await.entries.get(key).cloned())
    }

    async fn put(
        &self,
        key: TopicListKey,
        page: PageResult<TopicSummary>,
        generation: u64,
    ) -> Result<bool, TopicCacheError> {
        let mut state = self.state.write().await;
        if state.generation != generation {
            return Ok(false);
        }
        state.entries.insert(key, page);
        Ok(true)
    }

    async fn evict_all(&self) -> Result<(), TopicCacheError> {
        let mut state = self.state.write().await;
        state.entries.clear();
        state.generation = state.generation.wrapping_add(1);
        Ok(())
    }
}
