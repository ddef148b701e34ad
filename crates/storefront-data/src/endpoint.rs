//! Catalog endpoint tagging.

use std::fmt;

/// The remote catalog operations consumed by the storefront.
///
/// Tags are attached to request log events and key failure injection and
/// gating in the in-memory catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Offset-paged product listing.
    List,
    /// Free-text product search.
    Search,
    /// Full product list for one category.
    Category,
    /// Single product with reviews.
    Detail,
}

impl Endpoint {
    /// Get the name of this endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Search => "search",
            Self::Category => "category",
            Self::Detail => "detail",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
