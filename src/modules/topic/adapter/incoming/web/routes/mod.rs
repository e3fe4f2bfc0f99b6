mod create_topic;
mod delete_topic;
mod get_topic_detail;
mod list_topics;
mod update_topic;

pub use create_topic::{__path_create_topic_handler, create_topic_handler, CreateTopicRequest};
pub use delete_topic::{__path_delete_topic_handler, delete_topic_handler};
pub use get_topic_detail::{__path_get_topic_detail_handler, get_topic_detail_handler};
pub use list_topics::{__path_list_topics_handler, list_topics_handler, ListTopicsParams};
pub use update_topic::{__path_update_topic_handler, update_topic_handler, UpdateTopicRequest};

use actix_web::HttpResponse;

use crate::modules::topic::application::ports::incoming::use_cases::TopicFormError;
use crate::shared::api::ApiResponse;

// Shared by create and update; both forms carry the same title/message rules.
fn map_form_error(err: TopicFormError) -> HttpResponse {
    match err {
        TopicFormError::EmptyTitle => {
            ApiResponse::bad_request("EMPTY_TITLE", "Title cannot be empty")
        }
        TopicFormError::TitleTooShort => {
            ApiResponse::bad_request("TITLE_TOO_SHORT", "Title must have at least 5 characters")
        }
        TopicFormError::TitleTooLong => {
            ApiResponse::bad_request("TITLE_TOO_LONG", "Title must not exceed 100 characters")
        }
        TopicFormError::EmptyMessage => {
            ApiResponse::bad_request("EMPTY_MESSAGE", "Message cannot be empty")
        }
        TopicFormError::MessageTooShort => ApiResponse::bad_request(
            "MESSAGE_TOO_SHORT",
            "Message must have at least 10 characters",
        ),
        TopicFormError::InvalidCourseId => {
            ApiResponse::bad_request("INVALID_COURSE_ID", "Course id must be positive")
        }
    }
}
