//! Search resolution.
//!
//! A query is resolved to a single category through the first search match,
//! and the listing is replaced by that category's complete product set.

use std::sync::Arc;

use storefront_catalog::Product;
use storefront_data::{FetchError, ProductRepository};
use tracing::{debug, info, warn};

use crate::pagination::PaginationController;
use crate::state::{CatalogEvent, MIN_QUERY_LEN};
use crate::store::{CatalogStore, Outcome, Ticket};

/// Whether a query is long enough to search for.
pub fn is_searchable(query: &str) -> bool {
    query.trim().chars().count() >= MIN_QUERY_LEN
}

/// Result of resolving a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Nothing matched.
    NoMatch,
    /// The first match's category and that category's products.
    Category {
        category: String,
        products: Vec<Product>,
    },
}

impl Resolution {
    fn into_event(self) -> CatalogEvent {
        match self {
            Resolution::NoMatch => CatalogEvent::SearchResolved {
                category: None,
                products: Vec::new(),
            },
            Resolution::Category { category, products } => CatalogEvent::SearchResolved {
                category: Some(category),
                products,
            },
        }
    }
}

/// Replaces the listing with search results.
#[derive(Debug, Clone)]
pub struct SearchResolver<R> {
    repository: R,
    store: Arc<CatalogStore>,
}

impl<R: ProductRepository> SearchResolver<R> {
    pub fn new(repository: R, store: Arc<CatalogStore>) -> Self {
        Self { repository, store }
    }

    /// Search for `query`. Queries shorter than two characters after trimming
    /// are ignored. A failed search leaves an empty search listing.
    pub async fn search(&self, query: &str) -> Outcome {
        if !is_searchable(query) {
            return Outcome::Skipped;
        }

        let ticket = self.store.begin();
        let _pending = self.store.pending(ticket);
        debug!(generation = ticket.generation(), query, "searching");

        let (event, outcome) = match self.resolve(query, ticket).await {
            Ok(Some(resolution)) => {
                if let Resolution::Category { category, products } = &resolution {
                    info!(query, category = %category, count = products.len(), "search resolved");
                }
                (resolution.into_event(), Outcome::Applied)
            }
            Ok(None) => return Outcome::Stale,
            Err(e) => {
                warn!(error = %e, query, "search failed");
                (Resolution::NoMatch.into_event(), Outcome::Failed)
            }
        };

        if self.store.commit(ticket, event) {
            outcome
        } else {
            Outcome::Stale
        }
    }

    /// Resolve a query without touching the store. `Ok(None)` means the
    /// ticket went stale before the category fetch.
    async fn resolve(&self, query: &str, ticket: Ticket) -> Result<Option<Resolution>, FetchError> {
        let found = self.repository.search(query).await?;

        let category = match found.products.first() {
            Some(first) if !first.category.is_empty() => first.category.clone(),
            _ => return Ok(Some(Resolution::NoMatch)),
        };

        if !self.store.is_current(ticket) {
            return Ok(None);
        }

        let listing = self.repository.category(&category).await?;
        Ok(Some(Resolution::Category {
            category,
            products: listing.products,
        }))
    }

    /// Leave search mode and reload the first browsing page.
    ///
    /// Anything in flight is superseded before the reload starts.
    pub async fn reset(&self, pagination: &PaginationController<R>) -> Outcome {
        self.store.replace(CatalogEvent::Reset);
        debug!("catalog reset");
        pagination.load_initial().await
    }
}
