//! Catalog listing state and its reducer.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use storefront_catalog::{category_display_name, Product, ProductId};

/// Products requested by the first page of a browsing session.
pub const INITIAL_PAGE_SIZE: u32 = 16;

/// Products requested by each incremental page.
pub const PAGE_SIZE: u32 = 8;

/// Minimum trimmed query length (in characters) that triggers a search.
pub const MIN_QUERY_LEN: usize = 2;

/// What the listing currently shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogMode {
    /// Offset-paged listing; results accumulate.
    #[default]
    Browsing,
    /// Complete category snapshot resolved from a search.
    Searching,
}

impl CatalogMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogMode::Browsing => "browsing",
            CatalogMode::Searching => "searching",
        }
    }
}

/// State changes applied to a [`CatalogState`].
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    /// The first page of a browsing session arrived.
    InitialPageLoaded { products: Vec<Product>, total: u64 },
    /// An incremental page arrived (possibly empty).
    PageAppended { products: Vec<Product>, total: u64 },
    /// An incremental page failed.
    LoadMoreFailed,
    /// A search finished. `category` is `None` when nothing matched or the
    /// search failed.
    SearchResolved {
        category: Option<String>,
        products: Vec<Product>,
    },
    /// Leave search and start a new browsing session.
    Reset,
}

/// The product listing of one session.
///
/// Fields are read-only from outside; every change goes through
/// [`CatalogState::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogState {
    items: Vec<Product>,
    cursor: u64,
    mode: CatalogMode,
    has_more: bool,
    search_category: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            mode: CatalogMode::Browsing,
            has_more: true,
            search_category: None,
        }
    }
}

impl CatalogState {
    /// Create an empty browsing state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Next offset to request from the listing endpoint.
    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    pub fn mode(&self) -> CatalogMode {
        self.mode
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn search_category(&self) -> Option<&str> {
        self.search_category.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.mode == CatalogMode::Searching
    }

    /// Whether an incremental load would do anything.
    pub fn can_load_more(&self) -> bool {
        self.mode == CatalogMode::Browsing && self.has_more
    }

    /// Human-readable label of the resolved search category.
    pub fn breadcrumb(&self) -> Option<String> {
        self.search_category.as_deref().map(category_display_name)
    }

    /// Apply an event.
    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::InitialPageLoaded { products, total } => {
                let returned = products.len() as u64;
                self.items.clear();
                append_unique(&mut self.items, products);
                self.cursor = u64::from(INITIAL_PAGE_SIZE);
                self.mode = CatalogMode::Browsing;
                self.search_category = None;
                self.has_more = returned == u64::from(INITIAL_PAGE_SIZE)
                    && total > u64::from(INITIAL_PAGE_SIZE);
            }
            CatalogEvent::PageAppended { products, total } => {
                if self.mode != CatalogMode::Browsing {
                    return;
                }
                if products.is_empty() {
                    self.has_more = false;
                    return;
                }
                append_unique(&mut self.items, products);
                self.cursor += u64::from(PAGE_SIZE);
                self.has_more = (self.items.len() as u64) < total;
            }
            CatalogEvent::LoadMoreFailed => {
                self.has_more = false;
            }
            CatalogEvent::SearchResolved { category, products } => {
                self.items = products;
                self.search_category = category;
                self.mode = CatalogMode::Searching;
                self.has_more = false;
            }
            CatalogEvent::Reset => {
                *self = Self::default();
            }
        }
    }
}

/// Append products whose id is not already listed, keeping arrival order.
fn append_unique(items: &mut Vec<Product>, products: Vec<Product>) {
    let mut seen: HashSet<ProductId> = items.iter().map(|p| p.id).collect();
    items.extend(products.into_iter().filter(|p| seen.insert(p.id)));
}
