//! Place order use case.
//! Validates a brief, prices it and stores it as a PENDING order.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::domain::{compute_quote, NewOrder, Order, OrderId, OrderStatus};
use crate::error::AppError;
use crate::ports::OrderRepository;
use crate::utils::sanitize::mask_email;
use crate::validation::validate_new_order;

/// Output of the PlaceOrder use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub quote: i64,
    pub status: OrderStatus,
}

/// Use case for submitting a project brief.
pub struct PlaceOrder {
    orders: Arc<dyn OrderRepository>,
}

impl PlaceOrder {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    #[instrument(skip_all, fields(project_type = %input.project_type))]
    pub async fn execute(&self, input: NewOrder) -> Result<PlacedOrder, AppError> {
        validate_new_order(&input)?;

        // priced on the raw key; the stored project type is the display form
        let quote = compute_quote(
            &input.project_type,
            &input.description,
            input.timeline.as_deref(),
        );

        let order = Order::new(input, quote);
        self.orders.create(&order).await?;

        info!(
            order_id = %order.order_id,
            client_email = %mask_email(&order.client_email),
            quote,
            "Order placed"
        );

        Ok(PlacedOrder {
            order_id: order.order_id,
            quote: order.quote,
            status: order.status,
        })
    }
}
