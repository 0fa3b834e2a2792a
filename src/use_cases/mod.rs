//! Application use cases. Each takes its repository as an injected port.

pub mod confirm_payment;
pub mod place_order;

pub use confirm_payment::{ConfirmPayment, PaymentInput};
pub use place_order::{PlaceOrder, PlacedOrder};
