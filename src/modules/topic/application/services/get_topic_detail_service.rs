use async_trait::async_trait;

use crate::modules::topic::application::ports::{
    incoming::use_cases::{GetTopicDetailError, GetTopicDetailUseCase},
    outgoing::{TopicDetailView, TopicQuery},
};

#[derive(Debug, Clone)]
pub struct GetTopicDetailService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetTopicDetailService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTopicDetailUseCase for GetTopicDetailService<Q>
where
    Q: TopicQuery + Send + Sync,
{
    async fn execute(&self, topic_id: i64) -> Result<TopicDetailView, GetTopicDetailError> {
        self.query
            .get_detail(topic_id)
            .await
            .map_err(|e| GetTopicDetailError::QueryFailed(e.to_string()))?
            .ok_or(GetTopicDetailError::TopicNotFound)
    }
}
