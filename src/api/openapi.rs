use utoipa::OpenApi;

use crate::modules::topic::adapter::incoming::web::routes::{
    CreateTopicRequest, UpdateTopicRequest,
};
use crate::modules::topic::application::domain::TopicStatus;
use crate::modules::topic::application::ports::outgoing::{
    PageResult, ReplyView, TopicDetailView, TopicSummary,
};
use crate::shared::api::{ErrorDetail, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Forum Topics API",
        version = "1.0.0",
        description = "Topic listing, creation, detail, update and removal for the course forum"
    ),
    paths(
        crate::modules::topic::adapter::incoming::web::routes::list_topics_handler,
        crate::modules::topic::adapter::incoming::web::routes::create_topic_handler,
        crate::modules::topic::adapter::incoming::web::routes::get_topic_detail_handler,
        crate::modules::topic::adapter::incoming::web::routes::update_topic_handler,
        crate::modules::topic::adapter::incoming::web::routes::delete_topic_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            PageResult<TopicSummary>,

            // Topic DTOs
            CreateTopicRequest,
            UpdateTopicRequest,
            TopicSummary,
            TopicDetailView,
            ReplyView,
            TopicStatus
        )
    ),
    tags(
        (name = "topicos", description = "Forum topic endpoints"),
    )
)]
pub struct ApiDoc;
