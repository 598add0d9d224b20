//! Owned catalog and cart state.
//!
//! The store is independent of any rendering framework: all mutation
//! goes through the entry points below, so the whole lifecycle is
//! unit-testable without a UI harness.

use crate::cart::{Cart, CartLine};
use crate::defaults::default_kits;
use crate::error::CatalogError;
use crate::ids::KitId;
use crate::kit::Kit;

/// Owned catalog + cart state with defined mutation entry points.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    kits: Vec<Kit>,
    cart: Cart,
    live: bool,
}

impl CatalogStore {
    /// Create a store seeded with the bundled default catalog.
    pub fn new() -> Self {
        Self {
            kits: default_kits(),
            cart: Cart::new(),
            live: true,
        }
    }

    /// Replace the active catalog wholesale.
    ///
    /// Used by the upload path, which applies no validity gate: any
    /// successfully parsed list is installed as-is.
    pub fn replace_catalog(&mut self, kits: Vec<Kit>) {
        self.kits = kits;
    }

    /// Apply an asynchronously resolved catalog.
    ///
    /// Dropped without effect if the store has been shut down before the
    /// resolution arrived, or if the list is empty. Returns whether the
    /// catalog was applied.
    pub fn apply_resolution(&mut self, kits: Vec<Kit>) -> bool {
        if !self.live || kits.is_empty() {
            return false;
        }
        self.kits = kits;
        true
    }

    /// Mark the store as torn down; late resolutions are discarded.
    pub fn shutdown(&mut self) {
        self.live = false;
    }

    /// Add one unit of a kit to the cart by id.
    ///
    /// Fails if the id is not in the active catalog.
    pub fn add_line(&mut self, id: &KitId) -> Result<(), CatalogError> {
        let kit = self
            .kits
            .iter()
            .find(|k| &k.id == id)
            .cloned()
            .ok_or_else(|| CatalogError::KitNotFound(id.to_string()))?;
        self.cart.add(&kit);
        Ok(())
    }

    /// Adjust a cart line's quantity; drops the line below quantity one.
    pub fn update_qty(&mut self, id: &KitId, delta: i32) -> bool {
        self.cart.update_qty(id, delta)
    }

    /// Remove a cart line.
    pub fn remove_line(&mut self, id: &KitId) -> bool {
        self.cart.remove(id)
    }

    /// The active catalog, in display order.
    pub fn kits(&self) -> &[Kit] {
        &self.kits
    }

    /// The cart lines.
    pub fn cart(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Cart subtotal.
    pub fn subtotal(&self) -> f64 {
        self.cart.subtotal()
    }

    /// Total cart item count.
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
