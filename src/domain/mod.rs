pub mod order;
pub mod quote;

pub use order::{display_project_type, NewOrder, Order, OrderId, OrderStatus};
pub use quote::{compute_quote, ComplexityTier, ProjectType, QuoteBreakdown};
