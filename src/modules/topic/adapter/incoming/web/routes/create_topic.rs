use actix_web::{http::header, post, web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::topic::application::ports::incoming::use_cases::{
    CreateTopicCommand, CreateTopicError,
};
use crate::modules::topic::application::ports::outgoing::TopicSummary;
use crate::shared::api::{ApiResponse, ErrorResponse};
use crate::AppState;

use super::map_form_error;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    #[schema(example = "Duvida com Spring Cache")]
    pub title: String,
    #[schema(example = "Como invalido o cache depois de um update?")]
    pub message: String,
    #[schema(example = 1)]
    pub course_id: i64,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Creates a topic in an existing course and clears cached listings.
#[utoipa::path(
    post,
    path = "/topicos",
    tag = "topicos",
    request_body = CreateTopicRequest,
    responses(
        (
            status = 201,
            description = "Topic created",
            body = TopicSummary,
            headers(("Location" = String, description = "URI of the new topic"))
        ),
        (
            status = 400,
            description = "Invalid form",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "TITLE_TOO_SHORT", "message": "Title must have at least 5 characters" }
            })
        ),
        (
            status = 404,
            description = "Course does not exist",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "COURSE_NOT_FOUND", "message": "Course not found" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/topicos")]
pub async fn create_topic_handler(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<CreateTopicRequest>,
) -> impl Responder {
    // 1️⃣ Build command (validation happens here)
    let command = match CreateTopicCommand::new(&payload.title, &payload.message, payload.course_id)
    {
        Ok(cmd) => cmd,
        Err(err) => return map_form_error(err),
    };

    // 2️⃣ Execute use case
    match data.topic.create.execute(command).await {
        Ok(topic) => {
            let location = {
                let conn = req.connection_info();
                format!("{}://{}/topicos/{}", conn.scheme(), conn.host(), topic.id)
            };

            HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(topic)
        }
        Err(err) => map_create_topic_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_create_topic_error(err: CreateTopicError) -> HttpResponse {
    match err {
        CreateTopicError::CourseNotFound => {
            ApiResponse::not_found("COURSE_NOT_FOUND", "Course not found")
        }
        CreateTopicError::RepositoryError(reason) => {
            error!(error = %reason, "Creating topic failed");
            ApiResponse::internal_error()
        }
    }
}
