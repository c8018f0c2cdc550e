//! Cart and line item types.

use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductVariant};
use crate::error::CommerceError;
use crate::ids::{ProductId, VariantId};
use crate::money::{Currency, Money};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// Identity of a cart line: a product plus the selected variant, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartKey {
    pub product_id: ProductId,
    pub variant_id: Option<VariantId>,
}

impl CartKey {
    pub fn new(product_id: ProductId, variant_id: Option<VariantId>) -> Self {
        Self {
            product_id,
            variant_id,
        }
    }
}

/// A line in the cart.
///
/// Holds a snapshot of the product and variant taken when the line was
/// first added; later catalog changes do not reach existing lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product: Product,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ProductVariant>,
    pub quantity: i64,
}

impl LineItem {
    /// The key identifying this line.
    pub fn key(&self) -> CartKey {
        CartKey::new(self.product.id, self.variant.as_ref().map(|v| v.id))
    }

    /// Price of one unit: the variant's if one was selected.
    pub fn unit_price(&self) -> Money {
        self.variant.as_ref().map_or(self.product.price, |v| v.price)
    }

    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price()
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }

    /// Display name including the variant (e.g., "Smartphone (Black / 256GB)").
    pub fn display_name(&self) -> String {
        match &self.variant {
            Some(v) => format!("{} ({})", self.product.name, v.name),
            None => self.product.name.clone(),
        }
    }
}

/// A shopping cart. Lines keep insertion order.
///
/// Serializes as a plain array of line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item to the cart.
    ///
    /// Adding a key that is already present increases its quantity.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The variant does not belong to the product
    /// - The line would exceed MAX_QUANTITY_PER_ITEM
    pub fn add_item(
        &mut self,
        product: &Product,
        quantity: i64,
        variant_id: Option<VariantId>,
    ) -> Result<CartKey, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        let variant = match variant_id {
            Some(id) => Some(product.find_variant(id).cloned().ok_or(
                CommerceError::VariantNotFound {
                    product_id: product.id,
                    variant_id: id,
                },
            )?),
            None => None,
        };
        let key = CartKey::new(product.id, variant_id);

        if let Some(existing) = self.items.iter_mut().find(|i| i.key() == key) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }

            existing.quantity = new_quantity;
            return Ok(key);
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(LineItem {
            product: product.clone(),
            variant,
            quantity,
        });
        Ok(key)
    }

    /// Set a line's quantity.
    ///
    /// If quantity is <= 0, removes the line. Returns whether the line
    /// existed.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        variant_id: Option<VariantId>,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove_item(product_id, variant_id));
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let key = CartKey::new(product_id, variant_id);
        match self.items.iter_mut().find(|i| i.key() == key) {
            Some(item) => {
                item.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove a line from the cart.
    pub fn remove_item(&mut self, product_id: ProductId, variant_id: Option<VariantId>) -> bool {
        let key = CartKey::new(product_id, variant_id);
        let len_before = self.items.len();
        self.items.retain(|i| i.key() != key);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// All lines, in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get a line by key.
    pub fn get(&self, key: CartKey) -> Option<&LineItem> {
        self.items.iter().find(|i| i.key() == key)
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |total, i| total.saturating_add(i.quantity))
    }

    /// Whether every line holds a quantity in `1..=MAX_QUANTITY_PER_ITEM`
    /// and no key repeats. Always true for carts built through this API.
    pub fn is_well_formed(&self) -> bool {
        self.items.iter().enumerate().all(|(n, item)| {
            (1..=MAX_QUANTITY_PER_ITEM).contains(&item.quantity)
                && self.items[..n].iter().all(|prev| prev.key() != item.key())
        })
    }

    /// Get number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Currency of the cart, taken from its first line.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map_or_else(Currency::default, |i| i.unit_price().currency)
    }

    /// Sum of unit price times quantity over all lines.
    ///
    /// Returns error if arithmetic overflow occurs or lines disagree on
    /// currency.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        let currency = self.currency();
        let mut total = Money::zero(currency);
        for item in &self.items {
            let line = item.line_total()?;
            if line.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: line.currency.code().to_string(),
                });
            }
            total = total.try_add(&line).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }
}
