//! Confirm payment use case.
//! Mock payment confirmation: moves a PENDING order to PAID.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::domain::{Order, OrderId};
use crate::error::AppError;
use crate::ports::OrderRepository;

/// Payment method recorded when the client did not pick one.
pub const DEFAULT_PAYMENT_METHOD: &str = "N/A";

#[derive(Debug, Clone)]
pub struct PaymentInput {
    pub order_id: OrderId,
    pub payment_method: Option<String>,
}

pub struct ConfirmPayment {
    orders: Arc<dyn OrderRepository>,
}

impl ConfirmPayment {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    /// A second confirmation for the same order is rejected with a conflict;
    /// the first payment method stays recorded.
    #[instrument(skip_all, fields(order_id = %input.order_id))]
    pub async fn execute(&self, input: PaymentInput) -> Result<Order, AppError> {
        let payment_method = input
            .payment_method
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string());

        let order = self.orders.mark_paid(&input.order_id, &payment_method).await?;

        info!(payment_method = %payment_method, quote = order.quote, "Order paid");
        Ok(order)
    }
}
