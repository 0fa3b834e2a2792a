//! Ports consumed by the use cases. Adapters implement these.

pub mod order_repository;

pub use order_repository::{OrderRepository, RepositoryError, RepositoryResult};
