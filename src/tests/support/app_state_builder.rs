use actix_web::web;
use std::sync::Arc;

use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, DeleteTopicUseCase, GetTopicDetailUseCase, ListTopicsUseCase,
    UpdateTopicUseCase,
};
use crate::modules::topic::application::topic_use_cases::TopicUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    topic: TopicUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            topic: TopicUseCases {
                list: Arc::new(default_list_topics()),
                create: Arc::new(StubCreateTopicUseCase),
                get_detail: Arc::new(StubGetTopicDetailUseCase),
                update: Arc::new(StubUpdateTopicUseCase),
                delete: Arc::new(StubDeleteTopicUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_topics(mut self, uc: impl ListTopicsUseCase + Send + Sync + 'static) -> Self {
        self.topic.list = Arc::new(uc);
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_get_topic_detail(
        mut self,
        uc: impl GetTopicDetailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.get_detail = Arc::new(uc);
        self
    }

    pub fn with_update_topic(
        mut self,
        uc: impl UpdateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.update = Arc::new(uc);
        self
    }

    pub fn with_delete_topic(
        mut self,
        uc: impl DeleteTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.delete = Arc::new(uc);
        self
    }

    pub fn with_topic_use_cases(mut self, topic: TopicUseCases) -> Self {
        self.topic = topic;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { topic: self.topic })
    }
}
