pub mod sqlite_order_repository;

pub use sqlite_order_repository::SqliteOrderRepository;
