//! Order summary shown at checkout.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::checkout::ShippingMethod;
use crate::error::CommerceError;
use crate::money::Money;

/// Shipping and tax applied to a cart at checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutRates {
    pub shipping: ShippingMethod,
    /// Sales tax as a fraction of the subtotal (0.07 = 7%).
    pub tax_rate: f64,
}

impl CheckoutRates {
    pub fn new(shipping: ShippingMethod, tax_rate: f64) -> Self {
        Self { shipping, tax_rate }
    }
}

impl Default for CheckoutRates {
    fn default() -> Self {
        Self::new(ShippingMethod::standard(), 0.07)
    }
}

/// Subtotal, shipping, tax and total for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Flat shipping charge.
    pub shipping: Money,
    /// Tax on the subtotal, rounded to the cent.
    pub tax: Money,
    pub total: Money,
    /// Number of units.
    pub item_count: i64,
}

impl OrderSummary {
    /// Price a cart.
    ///
    /// Returns error if arithmetic overflow occurs or the shipping rate is
    /// in a different currency than the cart.
    pub fn for_cart(cart: &Cart, rates: &CheckoutRates) -> Result<Self, CommerceError> {
        let subtotal = cart.subtotal()?;
        let shipping = rates.shipping.price;
        if shipping.currency != subtotal.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: subtotal.currency.code().to_string(),
                got: shipping.currency.code().to_string(),
            });
        }

        let tax = subtotal.percentage(rates.tax_rate * 100.0);
        let total = subtotal
            .try_add(&shipping)
            .and_then(|m| m.try_add(&tax))
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            subtotal,
            shipping,
            tax,
            total,
            item_count: cart.item_count(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    #[test]
    fn test_default_rates() {
        let mut cart = Cart::new();
        let speaker = Product::new(8, "Portable Speaker", Money::usd(7999)).with_stock(5);
        cart.add_item(&speaker, 2, None).unwrap();

        let summary = OrderSummary::for_cart(&cart, &CheckoutRates::default()).unwrap();
        assert_eq!(summary.subtotal, Money::usd(15998));
        assert_eq!(summary.shipping, Money::usd(599));
        // 7% of 159.98 = 11.1986
        assert_eq!(summary.tax, Money::usd(1120));
        assert_eq!(summary.total, Money::usd(15998 + 599 + 1120));
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn test_express_without_tax() {
        let mut cart = Cart::new();
        let lamp = Product::new(1, "Lamp", Money::usd(1000));
        cart.add_item(&lamp, 1, None).unwrap();

        let rates = CheckoutRates::new(ShippingMethod::express(), 0.0);
        let summary = OrderSummary::for_cart(&cart, &rates).unwrap();
        assert_eq!(summary.tax, Money::usd(0));
        assert_eq!(summary.total, Money::usd(2499));
    }
}
