use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::modules::topic::application::ports::incoming::use_cases::{
    ListTopicsError, ListTopicsQuery, ListTopicsQueryError,
};
use crate::modules::topic::application::ports::outgoing::{PageResult, TopicSummary};
use crate::shared::api::{ApiResponse, ErrorResponse};
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query Parameters
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTopicsParams {
    /// Exact course name to filter by; an empty value matches no course
    #[serde(rename = "nomeCurso")]
    #[param(example = "Spring")]
    pub nome_curso: Option<String>,

    /// Zero-based page index (default 0)
    pub page: Option<u64>,

    /// Page size (default 10, max 100)
    pub size: Option<u64>,

    /// `field` or `field,direction`; fields: id, title, created_at, status
    #[param(example = "created_at,desc")]
    pub sort: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Lists topics, optionally filtered by course name, one page at a time.
#[utoipa::path(
    get,
    path = "/topicos",
    tag = "topicos",
    params(ListTopicsParams),
    responses(
        (status = 200, description = "Page of topics", body = PageResult<TopicSummary>),
        (
            status = 400,
            description = "Unknown sort field or direction, or a page past the addressable range",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_SORT", "message": "Unknown sort field: course" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/topicos")]
pub async fn list_topics_handler(
    data: web::Data<AppState>,
    params: web::Query<ListTopicsParams>,
) -> impl Responder {
    let params = params.into_inner();

    let query = match ListTopicsQuery::new(
        params.nome_curso,
        params.page,
        params.size,
        params.sort.as_deref(),
    ) {
        Ok(query) => query,
        Err(err) => return map_query_error(err),
    };

    match data.topic.list.execute(query).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => map_list_topics_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_query_error(err: ListTopicsQueryError) -> HttpResponse {
    match err {
        ListTopicsQueryError::PageOutOfRange(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
        ListTopicsQueryError::UnknownSortField(_)
        | ListTopicsQueryError::UnknownSortDirection(_) => {
            ApiResponse::bad_request("INVALID_SORT", &err.to_string())
        }
    }
}

fn map_list_topics_error(err: ListTopicsError) -> HttpResponse {
    match err {
        ListTopicsError::QueryFailed(reason) => {
            error!(error = %reason, "Listing topics failed");
            ApiResponse::internal_error()
        }
    }
}
