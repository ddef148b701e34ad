//! In-memory catalog (for development/testing).
//!
//! Serves a fixed product set with the same shapes as the remote API. Failures
//! can be injected per endpoint, and gates hold requests until released so
//! tests can control response arrival order.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use storefront_catalog::{Product, ProductId};
use tokio::sync::Semaphore;

use crate::endpoint::Endpoint;
use crate::error::FetchError;
use crate::repository::ProductRepository;
use crate::response::{ProductList, ProductPage};

/// A request observed by the in-memory catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedRequest {
    List { limit: u32, skip: u64 },
    Search { query: String },
    Category { category: String },
    Detail { id: ProductId },
}

impl RecordedRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::List { .. } => Endpoint::List,
            Self::Search { .. } => Endpoint::Search,
            Self::Category { .. } => Endpoint::Category,
            Self::Detail { .. } => Endpoint::Detail,
        }
    }
}

/// Holds requests to one endpoint until released.
#[derive(Debug, Clone)]
pub struct Gate {
    permits: Arc<Semaphore>,
}

impl Gate {
    fn new() -> Self {
        Self {
            permits: Arc::new(Semaphore::new(0)),
        }
    }

    /// Let one held (or future) request through.
    pub fn release(&self) {
        self.permits.add_permits(1);
    }

    async fn pass(&self) {
        if let Ok(permit) = self.permits.acquire().await {
            permit.forget();
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    reported_total: Option<u64>,
    failing: HashSet<Endpoint>,
    gates: HashMap<Endpoint, Gate>,
    requests: Vec<RecordedRequest>,
}

/// Catalog repository over an in-memory product set.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryCatalog {
    /// Create a catalog serving the given products in order.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                products,
                ..Default::default()
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock only means a test panicked mid-request; the data is still usable.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Report this total on list pages instead of the product count.
    pub fn with_reported_total(self, total: u64) -> Self {
        self.lock().reported_total = Some(total);
        self
    }

    /// Make every request to an endpoint fail with a connection error.
    pub fn fail(&self, endpoint: Endpoint) {
        self.lock().failing.insert(endpoint);
    }

    /// Stop failing an endpoint.
    pub fn recover(&self, endpoint: Endpoint) {
        self.lock().failing.remove(&endpoint);
    }

    /// Hold requests to an endpoint until the returned gate releases them.
    pub fn gate(&self, endpoint: Endpoint) -> Gate {
        self.lock().gates.entry(endpoint).or_insert_with(Gate::new).clone()
    }

    /// Remove the gate on an endpoint. Requests already held stay held.
    pub fn ungate(&self, endpoint: Endpoint) {
        self.lock().gates.remove(&endpoint);
    }

    /// Requests seen so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    /// Number of requests seen for an endpoint.
    pub fn request_count(&self, endpoint: Endpoint) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.endpoint() == endpoint)
            .count()
    }

    async fn enter(&self, request: RecordedRequest) -> Result<(), FetchError> {
        let endpoint = request.endpoint();
        let gate = {
            let mut inner = self.lock();
            inner.requests.push(request);
            inner.gates.get(&endpoint).cloned()
        };
        if let Some(gate) = gate {
            gate.pass().await;
        }
        if self.lock().failing.contains(&endpoint) {
            return Err(FetchError::Connection(format!(
                "injected failure on {} endpoint",
                endpoint
            )));
        }
        Ok(())
    }
}

fn matches_query(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn list_page(&self, limit: u32, skip: u64) -> Result<ProductPage, FetchError> {
        self.enter(RecordedRequest::List { limit, skip }).await?;
        let inner = self.lock();
        let products = inner
            .products
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        let total = inner.reported_total.unwrap_or(inner.products.len() as u64);
        Ok(ProductPage::new(products, total))
    }

    async fn search(&self, query: &str) -> Result<ProductList, FetchError> {
        self.enter(RecordedRequest::Search {
            query: query.to_string(),
        })
        .await?;
        let needle = query.trim().to_lowercase();
        let inner = self.lock();
        let products = inner
            .products
            .iter()
            .filter(|p| matches_query(p, &needle))
            .cloned()
            .collect();
        Ok(ProductList::new(products))
    }

    async fn category(&self, category: &str) -> Result<ProductList, FetchError> {
        self.enter(RecordedRequest::Category {
            category: category.to_string(),
        })
        .await?;
        let inner = self.lock();
        let products = inner
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect();
        Ok(ProductList::new(products))
    }

    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        self.enter(RecordedRequest::Detail { id }).await?;
        self.lock()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| FetchError::Http {
                status: 404,
                url: format!("memory://products/{}", id),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            Product::new(1, "Red Lipstick", 10.0).with_category("beauty"),
            Product::new(2, "Blue Shirt", 20.0).with_category("mens-shirts"),
            Product::new(3, "Lip Balm", 5.0).with_category("beauty"),
        ])
    }

    #[tokio::test]
    async fn test_list_page_slices() {
        let catalog = catalog();
        let page = catalog.list_page(2, 1).await.unwrap();
        let ids: Vec<u64> = page.products.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn test_reported_total_override() {
        let catalog = catalog().with_reported_total(0);
        assert_eq!(catalog.list_page(8, 0).await.unwrap().total, 0);
    }

    #[tokio::test]
    async fn test_search_and_category() {
        let catalog = catalog();
        let found = catalog.search("LIP").await.unwrap();
        assert_eq!(found.products.len(), 2);

        let beauty = catalog.category("beauty").await.unwrap();
        assert_eq!(beauty.products.len(), 2);
        assert!(catalog.category("unknown").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_product_is_404() {
        let err = catalog().product(ProductId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_injected_failure_and_recording() {
        let catalog = catalog();
        catalog.fail(Endpoint::Search);
        assert!(catalog.search("lip").await.is_err());
        catalog.recover(Endpoint::Search);
        assert!(catalog.search("lip").await.is_ok());

        assert_eq!(catalog.request_count(Endpoint::Search), 2);
        assert_eq!(
            catalog.requests()[0],
            RecordedRequest::Search {
                query: "lip".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_gate_holds_until_released() {
        let catalog = catalog();
        let gate = catalog.gate(Endpoint::Detail);

        let (result, _) = futures::join!(catalog.product(ProductId::new(1)), async {
            tokio::task::yield_now().await;
            gate.release();
        });
        assert_eq!(result.unwrap().title, "Red Lipstick");
    }
}
