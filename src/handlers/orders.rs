use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{NewOrder, Order, OrderId, OrderStatus};
use crate::error::AppError;
use crate::use_cases::{ConfirmPayment, PaymentInput, PlaceOrder};
use crate::AppState;

/// Order form fields. Required fields default to empty so that a missing
/// field is reported as a validation error, not a decoding failure.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct OrderRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub description: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
}

impl From<OrderRequest> for NewOrder {
    fn from(req: OrderRequest) -> Self {
        NewOrder {
            project_type: req.project_type,
            client_email: req.email,
            description: req.description,
            budget: req.budget,
            timeline: req.timeline,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderCreated {
    pub order_id: OrderId,
    pub quote: i64,
    pub status: OrderStatus,
    pub message: String,
    pub payment_url: String,
}

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct PaymentRequest {
    pub payment_method: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentConfirmed {
    pub order: Order,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order stored as PENDING", body = OrderCreated),
        (status = 400, description = "A required field is missing"),
        (status = 503, description = "Order could not be saved, retry")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    let placed = PlaceOrder::new(state.orders.clone())
        .execute(payload.into())
        .await?;

    let body = OrderCreated {
        message: format!(
            "Order Brief Submitted! Your quote is ${}. Proceeding to payment confirmation.",
            placed.quote
        ),
        payment_url: format!("/orders/{}/payment", placed.order_id),
        order_id: placed.order_id,
        quote: placed.quote,
        status: placed.status,
    };

    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(("order_id" = String, Path, description = "Confirmation ID")),
    responses(
        (status = 200, description = "Order summary", body = Order),
        (status = 404, description = "Unknown order id")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let order = state.orders.get(&OrderId::from(order_id)).await?;
    Ok(Json(order))
}

#[utoipa::path(
    post,
    path = "/orders/{order_id}/payment",
    params(("order_id" = String, Path, description = "Confirmation ID")),
    request_body = PaymentRequest,
    responses(
        (status = 200, description = "Order marked as paid", body = PaymentConfirmed),
        (status = 400, description = "Body is present but not a valid payment request"),
        (status = 404, description = "Unknown order id"),
        (status = 409, description = "Order was already paid")
    ),
    tag = "Orders"
)]
pub async fn confirm_payment(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Bytes,
) -> Result<Json<PaymentConfirmed>, AppError> {
    let payload = parse_payment_request(&body)?;

    let order = ConfirmPayment::new(state.orders.clone())
        .execute(PaymentInput {
            order_id: OrderId::from(order_id),
            payment_method: payload.payment_method,
        })
        .await?;

    let message = format!(
        "Order ID {} confirmed! Payment via {} is processing (DEMO). Thank you!",
        order.order_id,
        capitalize(order.payment_method.as_deref().unwrap_or_default())
    );

    Ok(Json(PaymentConfirmed { order, message }))
}

/// An empty body means "no method chosen". Any other body must be a valid
/// JSON payment request.
fn parse_payment_request(body: &[u8]) -> Result<PaymentRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(PaymentRequest::default());
    }

    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid payment request: {}", e)))
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_matches_payment_message_style() {
        assert_eq!(capitalize("card"), "Card");
        assert_eq!(capitalize("BANK transfer"), "Bank transfer");
        assert_eq!(capitalize("N/A"), "N/a");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn empty_payment_body_means_no_method() {
        assert!(parse_payment_request(b"").unwrap().payment_method.is_none());
        assert!(parse_payment_request(b"  \n").unwrap().payment_method.is_none());
    }

    #[test]
    fn payment_body_with_method_is_parsed() {
        let req = parse_payment_request(br#"{"payment_method": "card"}"#).unwrap();
        assert_eq!(req.payment_method.as_deref(), Some("card"));
    }

    #[test]
    fn malformed_payment_body_is_rejected() {
        assert!(matches!(
            parse_payment_request(br#"{"payment_method": 5}"#),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_payment_request(b"payment_method=card"),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn order_request_tolerates_missing_fields() {
        let req: OrderRequest = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(req.email, "a@b.c");
        assert!(req.project_type.is_empty());
        assert!(req.budget.is_none());
    }
}
