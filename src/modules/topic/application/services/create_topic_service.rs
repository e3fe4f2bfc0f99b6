use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::modules::course::application::ports::outgoing::CourseQuery;
use crate::modules::topic::application::ports::{
    incoming::use_cases::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase},
    outgoing::{TopicRepository, TopicRepositoryError, TopicSummary},
};

use super::{evict_topic_list, SharedTopicListCache};

pub struct CreateTopicService<R, C>
where
    R: TopicRepository + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    repository: R,
    courses: C,
    cache: SharedTopicListCache,
}

impl<R, C> CreateTopicService<R, C>
where
    R: TopicRepository + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    pub fn new(repository: R, courses: C, cache: SharedTopicListCache) -> Self {
        Self {
            repository,
            courses,
            cache,
        }
    }
}

#[async_trait]
impl<R, C> CreateTopicUseCase for CreateTopicService<R, C>
where
    R: TopicRepository + Send + Sync,
    C: CourseQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateTopicCommand,
    ) -> Result<TopicSummary, CreateTopicError> {
        let course = self
            .courses
            .find_by_id(command.course_id())
            .await
            .map_err(|e| CreateTopicError::RepositoryError(e.to_string()))?
            .ok_or(CreateTopicError::CourseNotFound)?;

        let created = self
            .repository
            .create_topic(command.into_new_topic(&course, Utc::now()))
            .await
            .map_err(|e| match e {
                TopicRepositoryError::CourseNotFound => CreateTopicError::CourseNotFound,
                other => CreateTopicError::RepositoryError(other.to_string()),
            })?;

        evict_topic_list(self.cache.as_ref()).await;
        info!(topic_id = created.id, course_id = course.id, "Topic created");

        Ok(created)
    }
}
