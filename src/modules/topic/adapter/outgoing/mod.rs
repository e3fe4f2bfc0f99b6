pub mod sea_orm_entity;
mod topic_list_cache_memory;
mod topic_list_cache_noop;
mod topic_list_cache_redis;
mod topic_query_postgres;
mod topic_repository_postgres;

pub use topic_list_cache_memory::InMemoryTopicListCache;
pub use topic_list_cache_noop::NoopTopicListCache;
pub use topic_list_cache_redis::RedisTopicListCache;
pub use topic_query_postgres::TopicQueryPostgres;
pub use topic_repository_postgres::TopicRepositoryPostgres;
