//! Catalog error types.

use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Kit not found in the active catalog.
    #[error("Kit not found: {0}")]
    KitNotFound(String),
}
