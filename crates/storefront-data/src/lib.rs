//! Catalog API access for the storefront.
//!
//! This crate provides:
//! - `ProductRepository` - The read seam over the remote catalog
//! - `HttpCatalogClient` - JSON-over-HTTPS implementation
//! - `InMemoryCatalog` - In-process implementation for development and tests
//! - `Endpoint` - Endpoint tags for logging and failure classification

mod client;
mod endpoint;
mod error;
mod memory;
mod repository;
mod response;

pub use client::*;
pub use endpoint::*;
pub use error::*;
pub use memory::*;
pub use repository::*;
pub use response::*;
