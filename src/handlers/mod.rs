pub mod orders;
pub mod quotes;

use crate::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub db: String,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 503, description = "Service is unhealthy", body = HealthStatus)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let (status_code, status, db) = match state.orders.ping().await {
        Ok(()) => (StatusCode::OK, "healthy", "connected"),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not reach the order store");
            (StatusCode::SERVICE_UNAVAILABLE, "unhealthy", "disconnected")
        }
    };

    let health_response = HealthStatus {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        db: db.to_string(),
    };

    (status_code, Json(health_response))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        quotes::preview_quote,
        orders::create_order,
        orders::get_order,
        orders::confirm_payment,
    ),
    components(schemas(
        HealthStatus,
        quotes::QuoteRequest,
        orders::OrderRequest,
        orders::OrderCreated,
        orders::PaymentRequest,
        orders::PaymentConfirmed,
        crate::domain::Order,
        crate::domain::OrderId,
        crate::domain::OrderStatus,
        crate::domain::QuoteBreakdown,
        crate::domain::ComplexityTier,
    )),
    tags(
        (name = "Health", description = "Liveness and store connectivity"),
        (name = "Quotes", description = "Price estimates"),
        (name = "Orders", description = "Order submission and mock payment")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
