use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::topic::application::domain::TopicStatus;
use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError, CreateTopicUseCase, DeleteTopicError,
    DeleteTopicUseCase, GetTopicDetailError, GetTopicDetailUseCase, ListTopicsError,
    ListTopicsQuery, ListTopicsUseCase, UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase,
};
use crate::modules::topic::application::ports::outgoing::{
    PageResult, TopicCacheError, TopicDetailView, TopicListCache, TopicListKey, TopicSummary,
};
use crate::tests::support::topic_fixtures::{empty_page, fixed_time};

// ──────────────────────────────────────────────────────────
// Use case stubs
// ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StubListTopicsUseCase {
    result: Result<PageResult<TopicSummary>, ListTopicsError>,
    last_query: Arc<Mutex<Option<ListTopicsQuery>>>,
}

impl StubListTopicsUseCase {
    pub fn success(page: PageResult<TopicSummary>) -> Self {
        Self {
            result: Ok(page),
            last_query: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(ListTopicsError::QueryFailed(msg.into())),
            last_query: Arc::new(Mutex::new(None)),
        }
    }

    /// The query the handler built from the last request.
    pub fn last_query(&self) -> Option<ListTopicsQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl ListTopicsUseCase for StubListTopicsUseCase {
    async fn execute(
        &self,
        query: ListTopicsQuery,
    ) -> Result<PageResult<TopicSummary>, ListTopicsError> {
        *self.last_query.lock().unwrap() = Some(query);
        self.result.clone()
    }
}

/// Echoes the command back as a freshly created topic with id 1.
#[derive(Default, Clone)]
pub struct StubCreateTopicUseCase;

#[async_trait]
impl CreateTopicUseCase for StubCreateTopicUseCase {
    async fn execute(
        &self,
        command: CreateTopicCommand,
    ) -> Result<TopicSummary, CreateTopicError> {
        Ok(TopicSummary {
            id: 1,
            title: command.title().to_string(),
            message: command.message().to_string(),
            created_at: fixed_time(),
            status: TopicStatus::NaoRespondido,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubGetTopicDetailUseCase;

#[async_trait]
impl GetTopicDetailUseCase for StubGetTopicDetailUseCase {
    async fn execute(&self, _topic_id: i64) -> Result<TopicDetailView, GetTopicDetailError> {
        Err(GetTopicDetailError::TopicNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateTopicUseCase;

#[async_trait]
impl UpdateTopicUseCase for StubUpdateTopicUseCase {
    async fn execute(
        &self,
        topic_id: i64,
        command: UpdateTopicCommand,
    ) -> Result<TopicSummary, UpdateTopicError> {
        Ok(TopicSummary {
            id: topic_id,
            title: command.title().to_string(),
            message: command.message().to_string(),
            created_at: fixed_time(),
            status: TopicStatus::NaoRespondido,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteTopicUseCase;

#[async_trait]
impl DeleteTopicUseCase for StubDeleteTopicUseCase {
    async fn execute(&self, _topic_id: i64) -> Result<(), DeleteTopicError> {
        Ok(())
    }
}

pub fn default_list_topics() -> StubListTopicsUseCase {
    StubListTopicsUseCase::success(empty_page())
}

// ──────────────────────────────────────────────────────────
// Cache stubs
// ──────────────────────────────────────────────────────────

/// Every operation fails as if the backend were unreachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingTopicListCache;

#[async_trait]
impl TopicListCache for FailingTopicListCache {
    async fn generation(&self) -> Result<u64, TopicCacheError> {
        Err(TopicCacheError::Backend("connection refused".into()))
    }

    async fn get(
        &self,
        _key: &TopicListKey,
    ) -> Result<Option<PageResult<TopicSummary>>, TopicCacheError> {
        Err(TopicCacheError::Backend("connection refused".into()))
    }

    async fn put(
        &self,
        _key: TopicListKey,
        _page: PageResult<TopicSummary>,
        _generation: u64,
    ) -> Result<bool, TopicCacheError> {
        Err(TopicCacheError::Backend("connection refused".into()))
    }

    async fn evict_all(&self) -> Result<(), TopicCacheError> {
        Err(TopicCacheError::Backend("connection refused".into()))
    }
}

/// Never stores anything; counts `evict_all` calls.
#[derive(Debug, Default)]
pub struct RecordingTopicListCache {
    evictions: AtomicUsize,
}

impl RecordingTopicListCache {
    pub fn evictions(&self) -> usize {
        self.evictions.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TopicListCache for RecordingTopicListCache {
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
        Ok(false)
    }

    async fn evict_all(&self) -> Result<(), TopicCacheError> {
        self.evictions.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
