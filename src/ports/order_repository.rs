use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Order, OrderId};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("order {0} not found")]
    NotFound(String),

    #[error("order {0} is already paid")]
    AlreadyPaid(String),

    #[error("order id {0} already exists")]
    Duplicate(String),

    #[error("storage failure: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence contract for orders. There is no listing, search or delete.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists a new PENDING order.
    async fn create(&self, order: &Order) -> RepositoryResult<()>;

    /// Exact-match lookup.
    async fn get(&self, order_id: &OrderId) -> RepositoryResult<Order>;

    /// Moves a PENDING order to PAID and records the payment method. Never
    /// creates a row.
    async fn mark_paid(&self, order_id: &OrderId, payment_method: &str) -> RepositoryResult<Order>;

    /// Cheap connectivity probe used by the health endpoint.
    async fn ping(&self) -> RepositoryResult<()>;
}
