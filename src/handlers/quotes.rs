use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::QuoteBreakdown;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct QuoteRequest {
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub description: String,
    pub timeline: Option<String>,
}

/// Prices a brief without storing anything.
#[utoipa::path(
    post,
    path = "/quotes",
    request_body = QuoteRequest,
    responses((status = 200, description = "Quote estimate", body = QuoteBreakdown)),
    tag = "Quotes"
)]
pub async fn preview_quote(Json(payload): Json<QuoteRequest>) -> Json<QuoteBreakdown> {
    Json(QuoteBreakdown::calculate(
        &payload.project_type,
        &payload.description,
        payload.timeline.as_deref(),
    ))
}
