//! Search command.

use anyhow::{bail, Result};
use storefront_state::{is_searchable, Outcome, MIN_QUERY_LEN};

use super::{print_listing, SearchArgs};
use crate::context::Context;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    if !is_searchable(&args.query) {
        bail!("Search needs at least {} characters", MIN_QUERY_LEN);
    }

    let session = ctx.session()?;
    let spinner = ctx.output.spinner(&format!("Searching for \"{}\"...", args.query.trim()));
    let outcome = session.search(&args.query).await;
    spinner.finish_and_clear();

    if outcome == Outcome::Failed {
        ctx.output.warn("Search is unavailable right now");
    }

    print_listing(&session, ctx);
    Ok(())
}
