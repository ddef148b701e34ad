//! Catalog browsing session.

use std::sync::Arc;

use storefront_catalog::{cards, ProductCard, ProductId};
use storefront_data::ProductRepository;

use crate::detail::{load_detail, ProductDetailView};
use crate::error::Result;
use crate::pagination::PaginationController;
use crate::search::SearchResolver;
use crate::state::CatalogState;
use crate::store::{CatalogStore, Outcome};

/// One browsing session over a catalog repository.
///
/// Pagination and search share a single store, so whichever operation was
/// issued last decides the listing.
#[derive(Debug, Clone)]
pub struct CatalogSession<R> {
    repository: R,
    store: Arc<CatalogStore>,
    pagination: PaginationController<R>,
    search: SearchResolver<R>,
}

impl<R> CatalogSession<R>
where
    R: ProductRepository + Clone,
{
    /// Start an empty session. Nothing is fetched until [`Self::load_initial`].
    pub fn new(repository: R) -> Self {
        let store = Arc::new(CatalogStore::new());
        Self {
            pagination: PaginationController::new(repository.clone(), Arc::clone(&store)),
            search: SearchResolver::new(repository.clone(), Arc::clone(&store)),
            repository,
            store,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn load_initial(&self) -> Outcome {
        self.pagination.load_initial().await
    }

    pub async fn load_more(&self) -> Outcome {
        self.pagination.load_more().await
    }

    pub async fn search(&self, query: &str) -> Outcome {
        self.search.search(query).await
    }

    pub async fn reset(&self) -> Outcome {
        self.search.reset(&self.pagination).await
    }

    /// Load the product page for `id`. Does not touch the listing.
    pub async fn product(&self, id: ProductId) -> Result<ProductDetailView> {
        load_detail(&self.repository, id).await
    }

    pub fn snapshot(&self) -> CatalogState {
        self.store.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Listing cards for the current items.
    pub fn cards(&self, placeholder: &str) -> Vec<ProductCard> {
        cards(self.store.snapshot().items(), placeholder)
    }
}
