use axum::{extract::Json, http::StatusCode};
use sumrank_core::engine::summarize_text;
use sumrank_core::helpers::dto::{SummarizeRequest, SummarizeResponse};

use crate::error::ServerError;

#[utoipa::path(
    post,
    path = "/summarize",
    request_body = SummarizeRequest,
    description = "Extractive summary of the posted text",
    responses(
        (status = 200, description = "Success", body = SummarizeResponse),
        (status = 500, description = "Internal Server Error"),
    )
)]
#[axum::debug_handler]
pub async fn summarize(
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ServerError> {
    let SummarizeRequest { text, percentage } = request;

    // Sentence scoring is CPU-bound, keep it off the async workers.
    let summary = tokio::task::spawn_blocking(move || summarize_text(&text, percentage))
        .await
        .map_err(|e| ServerError {
            status: StatusCode::INTERNAL_SERVER_ERROR.into(),
            message: e.to_string(),
        })?;

    Ok(Json(SummarizeResponse { summary }))
}
