use async_trait::async_trait;
use serde::Serialize;

use super::{PageRequest, PageResult, TopicListFilter, TopicSort, TopicSummary};

pub const TOPIC_LIST_CACHE_NAME: &str = "listaDeTopicos";

/// Cache key: every parameter that shapes a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TopicListKey {
    pub filter: TopicListFilter,
    pub sort: TopicSort,
    pub page: PageRequest,
}

impl TopicListKey {
    pub fn new(filter: TopicListFilter, sort: TopicSort, page: PageRequest) -> Self {
        Self { filter, sort, page }
    }

    /// Stable textual form for external stores.
    pub fn encode(&self) -> Result<String, TopicCacheError> {
        serde_json::to_string(self).map_err(|e| TopicCacheError::Serialization(e.to_string()))
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TopicCacheError {
    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Read-through cache of topic listings, cleared wholesale on writes.
///
/// A listing computed from the store must be stored with the generation
/// observed *before* the store was queried. `put` discards the entry when an
/// `evict_all` happened in between, so a write racing a listing can never
/// leave a stale page behind.
#[async_trait]
pub trait TopicListCache: Send + Sync {
    async fn generation(&self) -> Result<u64, TopicCacheError>;

    async fn get(
        &self,
        key: &TopicListKey,
    ) -> Result<Option<PageResult<TopicSummary>>, TopicCacheError>;

    /// Returns `false` when the entry was discarded as stale.
    async fn put(
        &self,
        key: TopicListKey,
        page: PageResult<TopicSummary>,
        generation: u64,
    ) -> Result<bool, TopicCacheError>;

    async fn evict_all(&self) -> Result<(), TopicCacheError>;
}
