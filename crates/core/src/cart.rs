//! Per-customer shopping cart. One line per product name; prices are
//! captured at add time and survive serde round-trips losslessly.

use serde::{Deserialize, Serialize};

use crate::types::ProductSnapshot;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: ProductSnapshot,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product. An existing line for the same product
    /// name has its quantity increased instead of a duplicate being
    /// appended. `quantity` of zero is a no-op.
    pub fn add(&mut self, product: ProductSnapshot, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.name == product.name) {
            line.quantity += quantity;
            return;
        }
        self.lines.push(CartLine { product, quantity });
    }

    /// Remove every line matching `product_name` case-insensitively.
    /// Removing an absent product is a silent no-op.
    pub fn remove(&mut self, product_name: &str) {
        self.lines
            .retain(|l| !l.product.name.eq_ignore_ascii_case(product_name));
    }

    /// Remove every line whose product name starts with `prefix`
    /// (case-insensitive). Used to strip injected delivery-fee lines.
    pub fn remove_prefix(&mut self, prefix: &str) {
        let prefix = prefix.to_lowercase();
        self.lines
            .retain(|l| !l.product.name.to_lowercase().starts_with(&prefix));
    }

    /// Decrement a line's quantity by `quantity`. Reaching zero (or asking
    /// for at least the current quantity) drops the line. Returns `false`
    /// when no line matches or `quantity` is zero, in which case the caller
    /// should re-prompt.
    pub fn remove_quantity(&mut self, product_name: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return false;
        }
        let Some(idx) = self
            .lines
            .iter()
            .position(|l| l.product.name.eq_ignore_ascii_case(product_name))
        else {
            return false;
        };
        if quantity >= self.lines[idx].quantity {
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity -= quantity;
        }
        true
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity over all lines, delivery lines included.
    /// Always recomputed, never cached.
    pub fn total(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn find(&self, product_name: &str) -> Option<&CartLine> {
        self.lines
            .iter()
            .find(|l| l.product.name.eq_ignore_ascii_case(product_name))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}
