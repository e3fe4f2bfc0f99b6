mod create_topic_service;
mod delete_topic_service;
mod get_topic_detail_service;
mod list_topics_service;
mod update_topic_service;

pub use create_topic_service::CreateTopicService;
pub use delete_topic_service::DeleteTopicService;
pub use get_topic_detail_service::GetTopicDetailService;
pub use list_topics_service::ListTopicsService;
pub use update_topic_service::UpdateTopicService;

use std::sync::Arc;
use tracing::warn;

use crate::modules::topic::application::ports::outgoing::{TopicListCache, TOPIC_LIST_CACHE_NAME};

pub type SharedTopicListCache = Arc<dyn TopicListCache>;

/// Clears every cached listing after a committed write.
async fn evict_topic_list(cache: &dyn TopicListCache) {
    if let Err(e) = cache.evict_all().await {
        warn!(cache = TOPIC_LIST_CACHE_NAME, error = %e, "Failed to evict topic listings");
    }
}
