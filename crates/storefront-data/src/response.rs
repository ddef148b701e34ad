//! Response shapes of the catalog API.

use serde::{Deserialize, Serialize};
use storefront_catalog::{null_as_default, Product};

/// One page of the product listing.
///
/// A missing or null `products` array reads as empty, a missing or null
/// `total` as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
}

impl ProductPage {
    pub fn new(products: Vec<Product>, total: u64) -> Self {
        Self { products, total }
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// A product list without paging metadata (search and category responses).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

impl ProductList {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
