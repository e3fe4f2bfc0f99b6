mod topic_list_cache;
mod topic_query;
mod topic_repository;

pub use topic_list_cache::{TopicCacheError, TopicListCache, TopicListKey, TOPIC_LIST_CACHE_NAME};
pub use topic_query::{
    PageRequest, PageResult, ReplyView, SortDirection, TopicDetailView, TopicListFilter,
    TopicQuery, TopicQueryError, TopicSort, TopicSortField, TopicSummary,
};
pub use topic_repository::{NewTopic, TopicRepository, TopicRepositoryError, UpdateTopicData};
