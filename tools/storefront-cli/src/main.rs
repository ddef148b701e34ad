//! Storefront CLI - Browse the product catalog from the terminal.
//!
//! Commands:
//! - `storefront browse` - List the catalog, page by page
//! - `storefront search` - Show the category a query resolves to
//! - `storefront product` - Show a product page
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

use commands::{BrowseArgs, ConfigArgs, ProductArgs, SearchArgs};

/// Storefront CLI - Browse, search and inspect the product catalog
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog listing
    Browse(BrowseArgs),

    /// Search the catalog
    Search(SearchArgs),

    /// Show a product page
    Product(ProductArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let mut logging = ctx.config.logging.clone();
    if cli.verbose {
        logging = logging.verbose();
    }
    storefront_observability::init_logging(&logging)?;
    debug!(
        config = ?ctx.config_path,
        api = %ctx.config.api.base_url,
        "configuration loaded"
    );
    ctx.output.debug(&format!("API: {}", ctx.config.api.base_url));

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx).await,
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
