use async_trait::async_trait;
use tracing::{debug, warn};

use crate::modules::topic::application::ports::{
    incoming::use_cases::{ListTopicsError, ListTopicsQuery, ListTopicsUseCase},
    outgoing::{PageResult, TopicListKey, TopicQuery, TopicSummary, TOPIC_LIST_CACHE_NAME},
};

use super::SharedTopicListCache;

pub struct ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
    cache: SharedTopicListCache,
}

impl<Q> ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q, cache: SharedTopicListCache) -> Self {
        Self { query, cache }
    }
}

#[async_trait]
impl<Q> ListTopicsUseCase for ListTopicsService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(
        &self,
        query: ListTopicsQuery,
    ) -> Result<PageResult<TopicSummary>, ListTopicsError> {
        let key = TopicListKey::new(query.filter().clone(), query.sort(), query.page());

        match self.cache.get(&key).await {
            Ok(Some(page)) => {
                debug!(cache = TOPIC_LIST_CACHE_NAME, "Topic listing served from cache");
                return Ok(page);
            }
            Ok(None) => debug!(cache = TOPIC_LIST_CACHE_NAME, "Topic listing cache miss"),
            Err(e) => warn!(cache = TOPIC_LIST_CACHE_NAME, error = %e, "Cache lookup failed"),
        }

        // Must be read before the store so a concurrent eviction voids this fill
        let generation = match self.cache.generation().await {
            Ok(generation) => Some(generation),
            Err(e) => {
                warn!(cache = TOPIC_LIST_CACHE_NAME, error = %e, "Cache generation unavailable");
                None
            }
        };

        let page = self
            .query
            .list(query.filter(), query.sort(), query.page())
            .await
            .map_err(|e| ListTopicsError::QueryFailed(e.to_string()))?;

        if let Some(generation) = generation {
            match self.cache.put(key, page.clone(), generation).await {
                Ok(true) => {}
                Ok(false) => debug!(
                    cache = TOPIC_LIST_CACHE_NAME,
                    "Listing invalidated while loading; not cached"
                ),
                Err(e) => warn!(cache = TOPIC_LIST_CACHE_NAME, error = %e, "Cache store failed"),
            }
        }

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::modules::topic::adapter::outgoing::InMemoryTopicListCache;
    use crate::modules::topic::application::ports::outgoing::{
        PageRequest, TopicDetailView, TopicListCache, TopicListFilter, TopicQueryError, TopicSort,
    };
    use crate::tests::support::stubs::FailingTopicListCache;
    use crate::tests::support::topic_fixtures::summary;

    // ──────────────────────────────────────────────────────────
    // Mock Query
    // ──────────────────────────────────────────────────────────

    struct MockTopicQuery {
        result: Result<PageResult<TopicSummary>, TopicQueryError>,
        calls: Arc<AtomicUsize>,
    }

    impl MockTopicQuery {
        fn returning(result: Result<PageResult<TopicSummary>, TopicQueryError>) -> Self {
            Self {
                result,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl TopicQuery for MockTopicQuery {
        async fn list(
            &self,
            _filter: &TopicListFilter,
            _sort: TopicSort,
            _page: PageRequest,
        ) -> Result<PageResult<TopicSummary>, TopicQueryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn get_detail(
            &self,
            _topic_id: i64,
        ) -> Result<Option<TopicDetailView>, TopicQueryError> {
            unimplemented!("Not used in list tests")
        }
    }

    fn one_topic_page() -> PageResult<TopicSummary> {
        PageResult::new(vec![summary(1, "Duvida Rust")], PageRequest::default(), 1)
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn first_call_queries_store_and_second_hits_cache() {
        let query = MockTopicQuery::returning(Ok(one_topic_page()));
        let calls = Arc::clone(&query.calls);
        let service = ListTopicsService::new(query, Arc::new(InMemoryTopicListCache::new()));

        let first = service.execute(ListTopicsQuery::default()).await.unwrap();
        let second = service.execute(ListTopicsQuery::default()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn different_parameters_use_different_entries() {
        let query = MockTopicQuery::returning(Ok(one_topic_page()));
        let calls = Arc::clone(&query.calls);
        let service = ListTopicsService::new(query, Arc::new(InMemoryTopicListCache::new()));

        service.execute(ListTopicsQuery::default()).await.unwrap();
        service
            .execute(ListTopicsQuery::new(Some("Spring".into()), None, None, None).unwrap())
            .await
            .unwrap();
        service
            .execute(ListTopicsQuery::new(None, Some(1), None, None).unwrap())
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn eviction_forces_recompute() {
        let query = MockTopicQuery::returning(Ok(one_topic_page()));
        let calls = Arc::clone(&query.calls);
        let cache = Arc::new(InMemoryTopicListCache::new());
        let service = ListTopicsService::new(query, cache.clone());

        service.execute(ListTopicsQuery::default()).await.unwrap();
        cache.evict_all().await.unwrap();
        service.execute(ListTopicsQuery::default()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn broken_cache_falls_back_to_store() {
        let query = MockTopicQuery::returning(Ok(one_topic_page()));
        let calls = Arc::clone(&query.calls);
        let service = ListTopicsService::new(query, Arc::new(FailingTopicListCache));

        let page = service.execute(ListTopicsQuery::default()).await.unwrap();
        service.execute(ListTopicsQuery::default()).await.unwrap();

        assert_eq!(page.total_elements, 1);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn store_failure_maps_to_query_failed_and_is_not_cached() {
        let cache = Arc::new(InMemoryTopicListCache::new());
        let service = ListTopicsService::new(
            MockTopicQuery::returning(Err(TopicQueryError::DatabaseError("db down".into()))),
            cache.clone(),
        );

        let result = service.execute(ListTopicsQuery::default()).await;

        assert!(matches!(result, Err(ListTopicsError::QueryFailed(msg)) if msg.contains("db down")));
        assert!(cache.get(&TopicListKey::default()).await.unwrap().is_none());
    }
}
