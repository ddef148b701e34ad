//! Incremental listing loads.

use std::sync::Arc;

use storefront_data::ProductRepository;
use tracing::{debug, warn};

use crate::state::{CatalogEvent, INITIAL_PAGE_SIZE, PAGE_SIZE};
use crate::store::{CatalogStore, Outcome};

/// Loads the browsing listing page by page.
#[derive(Debug, Clone)]
pub struct PaginationController<R> {
    repository: R,
    store: Arc<CatalogStore>,
}

impl<R: ProductRepository> PaginationController<R> {
    pub fn new(repository: R, store: Arc<CatalogStore>) -> Self {
        Self { repository, store }
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Load the first page and replace the listing.
    ///
    /// On failure the listing is left as it was.
    pub async fn load_initial(&self) -> Outcome {
        let ticket = self.store.begin();
        let _pending = self.store.pending(ticket);
        debug!(
            generation = ticket.generation(),
            limit = INITIAL_PAGE_SIZE,
            "loading initial page"
        );

        match self.repository.list_page(INITIAL_PAGE_SIZE, 0).await {
            Ok(page) => {
                let returned = page.len();
                let event = CatalogEvent::InitialPageLoaded {
                    products: page.products,
                    total: page.total,
                };
                if self.store.commit(ticket, event) {
                    debug!(returned, total = page.total, "initial page applied");
                    Outcome::Applied
                } else {
                    Outcome::Stale
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to load initial page");
                if self.store.finish(ticket) {
                    Outcome::Failed
                } else {
                    Outcome::Stale
                }
            }
        }
    }

    /// Append the next page at the cursor.
    ///
    /// Skipped unless browsing with more items expected and nothing else is
    /// loading.
    pub async fn load_more(&self) -> Outcome {
        let Some((ticket, state)) = self
            .store
            .begin_if(|state, loading| state.can_load_more() && !loading)
        else {
            return Outcome::Skipped;
        };
        let _pending = self.store.pending(ticket);
        let offset = state.cursor();
        debug!(
            generation = ticket.generation(),
            offset,
            limit = PAGE_SIZE,
            "loading next page"
        );

        match self.repository.list_page(PAGE_SIZE, offset).await {
            Ok(page) => {
                let event = CatalogEvent::PageAppended {
                    products: page.products,
                    total: page.total,
                };
                if self.store.commit(ticket, event) {
                    Outcome::Applied
                } else {
                    Outcome::Stale
                }
            }
            Err(e) => {
                warn!(error = %e, offset, "failed to load next page");
                if self.store.commit(ticket, CatalogEvent::LoadMoreFailed) {
                    Outcome::Failed
                } else {
                    Outcome::Stale
                }
            }
        }
    }
}
