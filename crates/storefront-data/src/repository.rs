//! The product repository seam.

use std::sync::Arc;

use async_trait::async_trait;
use storefront_catalog::{Product, ProductId};

use crate::error::FetchError;
use crate::response::{ProductList, ProductPage};

/// Read access to the remote catalog.
///
/// Implementations only build requests and validate response shapes; paging,
/// search resolution and fallbacks live with the callers.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch `limit` products starting at offset `skip`.
    async fn list_page(&self, limit: u32, skip: u64) -> Result<ProductPage, FetchError>;

    /// Full-text search. The query is passed through as given.
    async fn search(&self, query: &str) -> Result<ProductList, FetchError>;

    /// Every product in a category, in remote order.
    async fn category(&self, category: &str) -> Result<ProductList, FetchError>;

    /// A single product including its reviews.
    async fn product(&self, id: ProductId) -> Result<Product, FetchError>;
}

#[async_trait]
impl<R: ProductRepository + ?Sized> ProductRepository for Arc<R> {
    async fn list_page(&self, limit: u32, skip: u64) -> Result<ProductPage, FetchError> {
        (**self).list_page(limit, skip).await
    }

    async fn search(&self, query: &str) -> Result<ProductList, FetchError> {
        (**self).search(query).await
    }

    async fn category(&self, category: &str) -> Result<ProductList, FetchError> {
        (**self).category(category).await
    }

    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        (**self).product(id).await
    }
}
