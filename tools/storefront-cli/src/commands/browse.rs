//! Browse command.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use storefront_catalog::ProductId;
use storefront_data::HttpCatalogClient;
use storefront_state::{is_searchable, CatalogSession, Outcome, MIN_QUERY_LEN};

use super::{print_listing, product, BrowseArgs};
use crate::context::Context;

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let session = ctx.session()?;

    let spinner = ctx.output.spinner("Loading products...");
    let outcome = session.load_initial().await;
    for _ in 0..args.pages {
        if session.load_more().await == Outcome::Skipped {
            break;
        }
    }
    spinner.finish_and_clear();

    if outcome == Outcome::Failed {
        ctx.output.warn("Could not load the catalog");
    }

    if args.interactive {
        return interactive(&session, ctx).await;
    }

    print_listing(&session, ctx);
    Ok(())
}

const ACTIONS: [&str; 5] = ["Load more", "Search", "Back to catalog", "Open product", "Quit"];

async fn interactive(session: &CatalogSession<HttpCatalogClient>, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("Interactive mode is not available with --json");
    }

    loop {
        print_listing(session, ctx);

        let action = Select::new()
            .with_prompt("What next?")
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match action {
            0 => {
                if !session.snapshot().can_load_more() {
                    ctx.output.info("No more products to load");
                    continue;
                }
                let spinner = ctx.output.spinner("Loading more...");
                let outcome = session.load_more().await;
                spinner.finish_and_clear();
                if outcome == Outcome::Failed {
                    ctx.output.warn("Could not load more products");
                }
            }
            1 => {
                let query: String = Input::new().with_prompt("Search").interact_text()?;
                if !is_searchable(&query) {
                    ctx.output
                        .warn(&format!("Search needs at least {} characters", MIN_QUERY_LEN));
                    continue;
                }
                let spinner = ctx.output.spinner("Searching...");
                session.search(&query).await;
                spinner.finish_and_clear();
            }
            2 => {
                let spinner = ctx.output.spinner("Loading products...");
                session.reset().await;
                spinner.finish_and_clear();
            }
            3 => {
                let id: ProductId = Input::new().with_prompt("Product ID").interact_text()?;
                if let Err(e) = product::show(session.repository(), id, 0, ctx).await {
                    ctx.output.error(&format!("{:#}", e));
                }
            }
            _ => return Ok(()),
        }
    }
}
