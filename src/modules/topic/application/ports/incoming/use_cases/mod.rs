mod create_topic_use_case;
mod delete_topic_use_case;
mod get_topic_detail_use_case;
mod list_topics_use_case;
mod topic_form;
mod update_topic_use_case;

pub use create_topic_use_case::{CreateTopicCommand, CreateTopicError, CreateTopicUseCase};
pub use delete_topic_use_case::{DeleteTopicError, DeleteTopicUseCase};
pub use get_topic_detail_use_case::{GetTopicDetailError, GetTopicDetailUseCase};
pub use list_topics_use_case::{
    ListTopicsError, ListTopicsQuery, ListTopicsQueryError, ListTopicsUseCase,
};
pub use topic_form::TopicFormError;
pub use update_topic_use_case::{UpdateTopicCommand, UpdateTopicError, UpdateTopicUseCase};
