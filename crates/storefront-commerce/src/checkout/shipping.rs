//! Shipping method types.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shipping method option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingMethod {
    /// Display name.
    pub name: String,
    /// Flat shipping price.
    pub price: Money,
    /// Minimum delivery days.
    pub min_delivery_days: Option<i32>,
    /// Maximum delivery days.
    pub max_delivery_days: Option<i32>,
}

impl ShippingMethod {
    /// Create a new shipping method.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
            min_delivery_days: None,
            max_delivery_days: None,
        }
    }

    /// Set the delivery window in business days.
    pub fn with_delivery_days(mut self, min: i32, max: i32) -> Self {
        self.min_delivery_days = Some(min);
        self.max_delivery_days = Some(max);
        self
    }

    /// Standard shipping, $5.99, 3-5 business days.
    pub fn standard() -> Self {
        Self::new("Standard Shipping", Money::usd(599)).with_delivery_days(3, 5)
    }

    /// Express shipping, $14.99, 1-2 business days.
    pub fn express() -> Self {
        Self::new("Express Shipping", Money::usd(1499)).with_delivery_days(1, 2)
    }

    /// Get delivery estimate string.
    pub fn delivery_estimate(&self) -> Option<String> {
        match (self.min_delivery_days, self.max_delivery_days) {
            (Some(1), Some(1)) => Some("1 business day".to_string()),
            (Some(min), Some(max)) if min == max => Some(format!("{} business days", min)),
            (Some(min), Some(max)) => Some(format!("{}-{} business days", min, max)),
            (Some(min), None) => Some(format!("{}+ business days", min)),
            (None, Some(max)) => Some(format!("Up to {} business days", max)),
            (None, None) => None,
        }
    }

    /// Check if this is free shipping.
    pub fn is_free(&self) -> bool {
        self.price.is_zero()
    }
}

impl Default for ShippingMethod {
    fn default() -> Self {
        Self::standard()
    }
}
