//! Catalog session state for the storefront.
//!
//! - **State**: the listing reducer (`CatalogState`, `CatalogEvent`)
//! - **Store**: shared state with request generations; stale responses are dropped
//! - **Pagination**: initial and incremental listing loads
//! - **Search**: query to category resolution
//! - **Carousel**: scroll affordances for the related-items strip
//! - **Detail**: product page assembly with concurrent enrichment
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_data::InMemoryCatalog;
//! use storefront_state::prelude::*;
//!
//! let session = CatalogSession::new(InMemoryCatalog::new(products));
//! session.load_initial().await;
//! session.load_more().await;
//! session.search("mascara").await;
//! println!("{:?}", session.snapshot().breadcrumb());
//! ```

pub mod carousel;
pub mod detail;
pub mod error;
pub mod pagination;
pub mod search;
pub mod session;
pub mod state;
pub mod store;

pub use carousel::{
    CarouselFlags, CarouselLayout, CarouselNavigator, CarouselObserver, CarouselState,
    ScrollDirection, SubscriptionId,
};
pub use detail::{load_detail, load_detail_on, ProductDetailView};
pub use error::CatalogError;
pub use pagination::PaginationController;
pub use search::{is_searchable, Resolution, SearchResolver};
pub use session::CatalogSession;
pub use state::{CatalogEvent, CatalogMode, CatalogState, INITIAL_PAGE_SIZE, MIN_QUERY_LEN, PAGE_SIZE};
pub use store::{CatalogStore, Outcome, Pending, Ticket};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::carousel::{CarouselLayout, CarouselNavigator, ScrollDirection};
    pub use crate::detail::ProductDetailView;
    pub use crate::error::CatalogError;
    pub use crate::session::CatalogSession;
    pub use crate::state::{CatalogMode, CatalogState};
    pub use crate::store::Outcome;
}
