//! HTTP catalog client.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storefront_catalog::{Product, ProductId};
use tracing::debug;

use crate::endpoint::Endpoint;
use crate::error::FetchError;
use crate::repository::ProductRepository;
use crate::response::{ProductList, ProductPage};

/// Default catalog API.
pub const DEFAULT_API_BASE: &str = "https://dummyjson.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Catalog API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogApiConfig {
    /// API base URL (e.g., "https://dummyjson.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for CatalogApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl CatalogApiConfig {
    /// Create a config for a base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Catalog repository backed by the remote JSON API.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogClient {
    /// Create a new client from configuration.
    pub fn new(config: &CatalogApiConfig) -> Result<Self, FetchError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|_| FetchError::InvalidBaseUrl(config.base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(FetchError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for an endpoint. `segment` is the category or product id.
    pub fn endpoint_url(&self, endpoint: Endpoint, segment: Option<&str>) -> String {
        let segment = segment.unwrap_or_default();
        match endpoint {
            Endpoint::List => format!("{}/products", self.base_url),
            Endpoint::Search => format!("{}/products/search", self.base_url),
            Endpoint::Category => format!(
                "{}/products/category/{}",
                self.base_url,
                urlencoding::encode(segment)
            ),
            Endpoint::Detail => format!(
                "{}/products/{}",
                self.base_url,
                urlencoding::encode(segment)
            ),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let started = Instant::now();

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| FetchError::from_transport(e, url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::from_transport(e, url))?;
        let result: T = serde_json::from_slice(&bytes)?;

        debug!(
            endpoint = %endpoint,
            url,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog request complete"
        );

        Ok(result)
    }
}

#[async_trait]
impl ProductRepository for HttpCatalogClient {
    async fn list_page(&self, limit: u32, skip: u64) -> Result<ProductPage, FetchError> {
        let url = self.endpoint_url(Endpoint::List, None);
        let query = [("limit", limit.to_string()), ("skip", skip.to_string())];
        self.get_json(Endpoint::List, &url, &query).await
    }

    async fn search(&self, query: &str) -> Result<ProductList, FetchError> {
        let url = self.endpoint_url(Endpoint::Search, None);
        let params = [("q", query.to_string())];
        self.get_json(Endpoint::Search, &url, &params).await
    }

    async fn category(&self, category: &str) -> Result<ProductList, FetchError> {
        let url = self.endpoint_url(Endpoint::Category, Some(category));
        self.get_json(Endpoint::Category, &url, &[]).await
    }

    async fn product(&self, id: ProductId) -> Result<Product, FetchError> {
        let url = self.endpoint_url(Endpoint::Detail, Some(&id.to_string()));
        self.get_json(Endpoint::Detail, &url, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> HttpCatalogClient {
        HttpCatalogClient::new(&CatalogApiConfig::new("https://dummyjson.com/")).unwrap()
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        assert_eq!(client().base_url(), "https://dummyjson.com");
    }

    #[test]
    fn test_rejects_non_http_base() {
        let err = HttpCatalogClient::new(&CatalogApiConfig::new("ftp://catalog")).unwrap_err();
        assert!(matches!(err, FetchError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_rejects_malformed_base() {
        for base in ["http://", "https://exa mple.com", "http://[::1", "dummyjson.com"] {
            let err = HttpCatalogClient::new(&CatalogApiConfig::new(base)).unwrap_err();
            assert!(matches!(err, FetchError::InvalidBaseUrl(_)), "{}", base);
        }
    }

    #[test]
    fn test_accepts_host_with_port() {
        let c = HttpCatalogClient::new(&CatalogApiConfig::new("http://127.0.0.1:8080/")).unwrap();
        assert_eq!(c.base_url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_endpoint_urls() {
        let c = client();
        assert_eq!(c.endpoint_url(Endpoint::List, None), "https://dummyjson.com/products");
        assert_eq!(
            c.endpoint_url(Endpoint::Search, None),
            "https://dummyjson.com/products/search"
        );
        assert_eq!(
            c.endpoint_url(Endpoint::Category, Some("home decoration")),
            "https://dummyjson.com/products/category/home%20decoration"
        );
        assert_eq!(
            c.endpoint_url(Endpoint::Detail, Some("12")),
            "https://dummyjson.com/products/12"
        );
    }

    #[test]
    fn test_config_defaults_from_partial_toml_shape() {
        let config: CatalogApiConfig = serde_json::from_str(r#"{"timeout_secs": 3}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}
