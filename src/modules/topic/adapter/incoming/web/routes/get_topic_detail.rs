use actix_web::{get, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::topic::application::ports::incoming::use_cases::GetTopicDetailError;
use crate::modules::topic::application::ports::outgoing::TopicDetailView;
use crate::shared::api::{ApiResponse, ErrorResponse};
use crate::AppState;

/// Returns one topic with its course name and replies.
#[utoipa::path(
    get,
    path = "/topicos/{id}",
    tag = "topicos",
    params(("id" = i64, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic detail", body = TopicDetailView),
        (status = 404, description = "Topic not found (empty body)"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/topicos/{id}")]
pub async fn get_topic_detail_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.get_detail.execute(topic_id).await {
        Ok(detail) => HttpResponse::Ok().json(detail),
        Err(err) => map_get_topic_detail_error(err),
    }
}

fn map_get_topic_detail_error(err: GetTopicDetailError) -> HttpResponse {
    match err {
        GetTopicDetailError::TopicNotFound => ApiResponse::not_found_empty(),
        GetTopicDetailError::QueryFailed(reason) => {
            error!(error = %reason, "Loading topic detail failed");
            ApiResponse::internal_error()
        }
    }
}
