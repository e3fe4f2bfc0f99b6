use actix_web::{delete, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::topic::application::ports::incoming::use_cases::DeleteTopicError;
use crate::shared::api::{ApiResponse, ErrorResponse};
use crate::AppState;

#[utoipa::path(
    delete,
    path = "/topicos/{id}",
    tag = "topicos",
    params(("id" = i64, Path, description = "Topic id")),
    responses(
        (status = 200, description = "Topic deleted (empty body)"),
        (status = 404, description = "Topic not found (empty body)"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/topicos/{id}")]
pub async fn delete_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
) -> impl Responder {
    match data.topic.delete.execute(path.into_inner()).await {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => map_delete_topic_error(err),
    }
}

fn map_delete_topic_error(err: DeleteTopicError) -> HttpResponse {
    match err {
        DeleteTopicError::TopicNotFound => ApiResponse::not_found_empty(),
        DeleteTopicError::RepositoryError(reason) => {
            error!(error = %reason, "Deleting topic failed");
            ApiResponse::internal_error()
        }
    }
}
