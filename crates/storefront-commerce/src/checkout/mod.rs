//! Checkout module.
//!
//! Contains shipping methods and the order summary for a cart.

mod shipping;
mod summary;

pub use shipping::ShippingMethod;
pub use summary::{CheckoutRates, OrderSummary};
