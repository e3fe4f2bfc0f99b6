use actix_web::{put, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::topic::application::ports::incoming::use_cases::{
    UpdateTopicCommand, UpdateTopicError,
};
use crate::modules::topic::application::ports::outgoing::TopicSummary;
use crate::shared::api::{ApiResponse, ErrorResponse};
use crate::AppState;

use super::map_form_error;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTopicRequest {
    #[schema(example = "Duvida com Spring Cache (resolvida)")]
    pub title: String,
    #[schema(example = "Consegui invalidar o cache com @CacheEvict.")]
    pub message: String,
}

/// Replaces title and message of an existing topic.
#[utoipa::path(
    put,
    path = "/topicos/{id}",
    tag = "topicos",
    params(("id" = i64, Path, description = "Topic id")),
    request_body = UpdateTopicRequest,
    responses(
        (status = 200, description = "Topic updated", body = TopicSummary),
        (status = 400, description = "Invalid form", body = ErrorResponse),
        (status = 404, description = "Topic not found (empty body)"),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/topicos/{id}")]
pub async fn update_topic_handler(
    data: web::Data<AppState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateTopicRequest>,
) -> impl Responder {
    let topic_id = path.into_inner();

    let command = match UpdateTopicCommand::new(&payload.title, &payload.message) {
        Ok(cmd) => cmd,
        Err(err) => return map_form_error(err),
    };

    match data.topic.update.execute(topic_id, command).await {
        Ok(topic) => HttpResponse::Ok().json(topic),
        Err(err) => map_update_topic_error(err),
    }
}

fn map_update_topic_error(err: UpdateTopicError) -> HttpResponse {
    match err {
        UpdateTopicError::TopicNotFound => ApiResponse::not_found_empty(),
        UpdateTopicError::RepositoryError(reason) => {
            error!(error = %reason, "Updating topic failed");
            ApiResponse::internal_error()
        }
    }
}
