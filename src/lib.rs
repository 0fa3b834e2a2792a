pub mod adapters;
pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod ports;
pub mod use_cases;
pub mod utils;
pub mod validation;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::adapters::SqliteOrderRepository;
use crate::ports::OrderRepository;

/// Shared handler state. The order store is injected, never looked up from
/// ambient state.
#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderRepository>,
}

impl AppState {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub fn with_sqlite(options: sqlx::sqlite::SqliteConnectOptions) -> Self {
        Self::new(Arc::new(SqliteOrderRepository::new(options)))
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/quotes", post(handlers::quotes::preview_quote))
        .route("/orders", post(handlers::orders::create_order))
        .route("/orders/:order_id", get(handlers::orders::get_order))
        .route(
            "/orders/:order_id/payment",
            post(handlers::orders::confirm_payment),
        )
        .route("/api-docs/openapi.json", get(handlers::openapi_json))
        .layer(axum::middleware::from_fn(
            middleware::request_logger_middleware,
        ))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
