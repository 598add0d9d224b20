//! Catalog and cart domain types for FrameKit.
//!
//! This crate provides the data core of a building-kit storefront:
//!
//! - **Kit**: the canonical catalog record with pricing and spec-sheet fields
//! - **Cart**: ephemeral in-memory cart with merge-on-add line items
//! - **Store**: owned catalog+cart state with defined mutation entry points
//! - **Display**: derived display strings handed to the presentation layer
//!
//! # Example
//!
//! ```rust,ignore
//! use framekit_catalog::prelude::*;
//!
//! let mut store = CatalogStore::new();
//! let kit = store.kits()[0].clone();
//! store.add_line(&kit);
//! assert_eq!(store.item_count(), 1);
//! println!("Subtotal: {}", format_usd(store.subtotal()));
//! ```

pub mod cart;
pub mod defaults;
pub mod display;
pub mod error;
pub mod ids;
pub mod kit;
pub mod store;

pub use cart::{Cart, CartLine};
pub use error::CatalogError;
pub use ids::KitId;
pub use kit::{catalog_diagnostics, validate_catalog, Diagnostic, Kit};
pub use store::CatalogStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, CartLine};
    pub use crate::defaults::default_kits;
    pub use crate::display::{comparison_rows, format_usd, ComparisonRow};
    pub use crate::error::CatalogError;
    pub use crate::ids::KitId;
    pub use crate::kit::{catalog_diagnostics, validate_catalog, Diagnostic, Kit};
    pub use crate::store::CatalogStore;
}
