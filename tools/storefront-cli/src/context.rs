//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_data::HttpCatalogClient;
use storefront_state::CatalogSession;

use crate::config::{CliConfig, API_URL_ENV, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// File the config was loaded from, if any.
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd, &output) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };
        let config = config.with_api_url(std::env::var(API_URL_ENV).ok());

        Ok(Self {
            config,
            output,
            cwd,
            config_path,
        })
    }

    /// Find config file in directory tree.
    ///
    /// Files that fail to load are reported and skipped. Logging is not yet
    /// initialised here, so the report goes through `output`.
    fn find_config(start: &Path, output: &Output) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match CliConfig::load(config_path.to_str()?) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => output.warn(&format!(
                            "Skipping config file {}: {:#}",
                            config_path.display(),
                            e
                        )),
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Create a catalog client from the API config.
    pub fn client(&self) -> Result<HttpCatalogClient> {
        HttpCatalogClient::new(&self.config.api).context("Invalid catalog API configuration")
    }

    /// Start a browsing session against the configured API.
    pub fn session(&self) -> Result<CatalogSession<HttpCatalogClient>> {
        Ok(CatalogSession::new(self.client()?))
    }
}
