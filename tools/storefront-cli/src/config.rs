//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::{Currency, DEFAULT_PLACEHOLDER_IMAGE};
use storefront_data::CatalogApiConfig;
use storefront_observability::LoggingConfig;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Config file names, searched in this order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog API connection.
    #[serde(default)]
    pub api: CatalogApiConfig,

    /// Log filter and format.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Listing and product page display.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply an API URL override, typically from [`API_URL_ENV`].
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }
}

/// Display settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Currency used for prices.
    #[serde(default)]
    pub currency: Currency,

    /// Window width used for the carousel layout.
    #[serde(default = "default_window_width")]
    pub window_width: f64,

    /// Image shown for products without one.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_window_width() -> f64 {
    1280.0
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            window_width: default_window_width(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    r#"# Storefront client configuration

[api]
base_url = "https://dummyjson.com"
timeout_secs = 10

[logging]
# RUST_LOG overrides this filter
filter = "warn,storefront=info"
format = "human"

[display]
currency = "RUB"
window_width = 1280.0
placeholder_image = "/img/eat.png"
"#
    .to_string()
}
