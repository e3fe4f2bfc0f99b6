use std::sync::Arc;

use crate::modules::course::application::ports::outgoing::CourseQuery;
use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicDetailUseCase, ListTopicsUseCase,
    UpdateTopicUseCase,
};
use crate::modules::topic::application::ports::outgoing::{TopicQuery, TopicRepository};
use crate::modules::topic::application::services::{
    CreateTopicService, DeleteTopicService, GetTopicDetailService, ListTopicsService,
    SharedTopicListCache, UpdateTopicService,
};

#[derive(Clone)]
pub struct TopicUseCases {
    pub list: Arc<dyn ListTopicsUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTopicUseCase + Send + Sync>,
    pub get_detail: Arc<dyn GetTopicDetailUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTopicUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTopicUseCase + Send + Sync>,
}

impl TopicUseCases {
    /// Wires every topic service over the given ports; all writes share `cache`.
    pub fn new<Q, R, C>(query: Q, repository: R, courses: C, cache: SharedTopicListCache) -> Self
    where
        Q: TopicQuery + Clone + Send + Sync + 'static,
        R: TopicRepository + Clone + Send + Sync + 'static,
        C: CourseQuery + Send + Sync + 'static,
    {
        Self {
            list: Arc::new(ListTopicsService::new(query.clone(), Arc::clone(&cache))),
            create: Arc::new(CreateTopicService::new(
                repository.clone(),
                courses,
                Arc::clone(&cache),
            )),
            get_detail: Arc::new(GetTopicDetailService::new(query)),
            update: Arc::new(UpdateTopicService::new(repository.clone(), Arc::clone(&cache))),
            delete: Arc::new(DeleteTopicService::new(repository, cache)),
        }
    }
}
