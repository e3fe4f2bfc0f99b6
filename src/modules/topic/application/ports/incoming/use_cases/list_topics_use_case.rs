use async_trait::async_trait;

use crate::modules::topic::application::ports::outgoing::{
    PageRequest, PageResult, SortDirection, TopicListFilter, TopicSort, TopicSortField,
    TopicSummary,
};

//
// ──────────────────────────────────────────────────────────
// List Topics Query
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListTopicsQuery {
    filter: TopicListFilter,
    sort: TopicSort,
    page: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListTopicsQueryError {
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),

    #[error("Page {0} is out of range")]
    PageOutOfRange(u64),
}

impl ListTopicsQuery {
    /// Missing parameters fall back to page 0, size 10, `id,desc`.
    /// A size of 0 means "default"; sizes above the maximum are clamped.
    /// Pages whose row offset does not fit a signed 64-bit integer are rejected.
    pub fn new(
        course_name: Option<String>,
        page: Option<u64>,
        size: Option<u64>,
        sort: Option<&str>,
    ) -> Result<Self, ListTopicsQueryError> {
        let size = match size {
            None | Some(0) => PageRequest::DEFAULT_SIZE,
            Some(size) => size.min(PageRequest::MAX_SIZE),
        };

        let sort = match sort.map(str::trim).filter(|s| !s.is_empty()) {
            None => TopicSort::default(),
            Some(raw) => parse_sort(raw)?,
        };

        let page = page.unwrap_or(0);
        match page.checked_mul(size) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => return Err(ListTopicsQueryError::PageOutOfRange(page)),
        }

        Ok(Self {
            filter: TopicListFilter { course_name },
            sort,
            page: PageRequest { page, size },
        })
    }

    pub fn filter(&self) -> &TopicListFilter {
        &self.filter
    }

    pub fn sort(&self) -> TopicSort {
        self.sort
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }
}

// `field` or `field,direction`; direction defaults to ascending.
fn parse_sort(raw: &str) -> Result<TopicSort, ListTopicsQueryError> {
    let mut parts = raw.splitn(2, ',').map(str::trim);

    let field_raw = parts.next().unwrap_or_default();
    let field = TopicSortField::parse(field_raw)
        .ok_or_else(|| ListTopicsQueryError::UnknownSortField(field_raw.to_string()))?;

    let direction = match parts.next().filter(|d| !d.is_empty()) {
        None => SortDirection::Asc,
        Some(dir) => SortDirection::parse(dir)
            .ok_or_else(|| ListTopicsQueryError::UnknownSortDirection(dir.to_string()))?,
    };

    Ok(TopicSort { field, direction })
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTopicsError {
    #[error("Failed to list topics: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTopicsUseCase: Send + Sync {
    async fn execute(
        &self,
        query: ListTopicsQuery,
    ) -> Result<PageResult<TopicSummary>, ListTopicsError>;
}
