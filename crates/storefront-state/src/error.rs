//! Catalog session error types.

use storefront_catalog::ProductId;
use storefront_data::FetchError;
use thiserror::Error;

/// Errors surfaced to callers of the catalog session.
///
/// Listing and search failures are recovered inside the session; only the
/// product detail view reports errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The requested product does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The primary fetch failed for another reason.
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

impl CatalogError {
    /// Classify a failed detail fetch.
    pub fn from_detail_fetch(id: ProductId, err: FetchError) -> Self {
        if err.is_not_found() {
            Self::ProductNotFound(id)
        } else {
            Self::Fetch(err)
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
