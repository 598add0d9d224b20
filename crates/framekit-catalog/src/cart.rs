//! Cart and cart line types.
//!
//! The cart is ephemeral per-session state: no persistence, no backend.
//! Lines are keyed by kit id; adding an id already present merges into
//! the existing line instead of creating a second one.

use crate::ids::KitId;
use crate::kit::Kit;
use serde::{Deserialize, Serialize};

/// A line in the cart.
///
/// Invariant: `qty >= 1`. A line whose quantity would drop below one is
/// removed from the cart, never kept at zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Kit identifier.
    pub id: KitId,
    /// Kit name (denormalized for display).
    pub name: String,
    /// Unit price in whole currency units.
    pub price: f64,
    /// Quantity, always at least one.
    pub qty: u32,
}

impl CartLine {
    /// Line total (unit price times quantity).
    pub fn total(&self) -> f64 {
        self.price * self.qty as f64
    }
}

/// An ephemeral shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a kit to the cart.
    ///
    /// If a line with the same kit id already exists, its quantity is
    /// incremented; otherwise a new line with `qty = 1` is appended.
    pub fn add(&mut self, kit: &Kit) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == kit.id) {
            line.qty += 1;
            return;
        }
        self.lines.push(CartLine {
            id: kit.id.clone(),
            name: kit.name.clone(),
            price: kit.price,
            qty: 1,
        });
    }

    /// Adjust a line's quantity by a signed delta.
    ///
    /// A delta that would take the quantity below one removes the line
    /// entirely. Unknown ids are ignored. Returns whether the line still
    /// exists afterwards.
    pub fn update_qty(&mut self, id: &KitId, delta: i32) -> bool {
        let Some(idx) = self.lines.iter().position(|l| &l.id == id) else {
            return false;
        };
        let new_qty = self.lines[idx].qty as i64 + delta as i64;
        if new_qty < 1 {
            self.lines.remove(idx);
            false
        } else {
            self.lines[idx].qty = new_qty as u32;
            true
        }
    }

    /// Remove a line from the cart. Returns whether a line was removed.
    pub fn remove(&mut self, id: &KitId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        self.lines.len() < len_before
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Cart subtotal across all lines.
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.qty).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The cart lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by kit id.
    pub fn get(&self, id: &KitId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }
}
