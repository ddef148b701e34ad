//! CLI command implementations.

pub mod browse;
pub mod config;
pub mod product;
pub mod search;

use clap::{Args, Subcommand};
use serde::Serialize;
use storefront_catalog::{ProductCard, ProductId};
use storefront_data::ProductRepository;
use storefront_state::{CatalogMode, CatalogSession};

use crate::context::Context;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Extra pages to load after the first one.
    #[arg(short, long, default_value = "0")]
    pub pages: usize,

    /// Drive the session from an interactive menu.
    #[arg(short, long)]
    pub interactive: bool,
}

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search text (at least 2 characters).
    pub query: String,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: ProductId,

    /// Scroll the related-items strip right this many times.
    #[arg(long, default_value = "0")]
    pub scroll: usize,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Listing as printed in JSON mode.
#[derive(Serialize)]
struct ListingView<'a> {
    mode: CatalogMode,
    category: Option<&'a str>,
    breadcrumb: Option<String>,
    cursor: u64,
    has_more: bool,
    cards: Vec<ProductCard>,
}

/// Print the session's current listing.
pub(crate) fn print_listing<R>(session: &CatalogSession<R>, ctx: &Context)
where
    R: ProductRepository + Clone,
{
    let state = session.snapshot();
    let cards = session.cards(&ctx.config.display.placeholder_image);

    if ctx.output.is_json() {
        ctx.output.json(&ListingView {
            mode: state.mode(),
            category: state.search_category(),
            breadcrumb: state.breadcrumb(),
            cursor: state.cursor(),
            has_more: state.has_more(),
            cards,
        });
        return;
    }

    match (state.mode(), state.breadcrumb()) {
        (CatalogMode::Browsing, _) => ctx.output.header("Catalog"),
        (CatalogMode::Searching, Some(label)) => {
            ctx.output.header(&format!("Catalog › {}", label))
        }
        (CatalogMode::Searching, None) => ctx.output.header("Search"),
    }

    if cards.is_empty() {
        ctx.output.info("Nothing found");
        return;
    }

    for card in &cards {
        ctx.output.card(card, ctx.config.display.currency);
    }

    ctx.output.line("");
    ctx.output.kv("showing", &cards.len().to_string());
    if state.has_more() {
        ctx.output.kv("more", "available");
    }
}
