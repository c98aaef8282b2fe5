//! Item browser command (`lostfound browse`)

use iocraft::prelude::*;

use super::AppContext;
use super::items::check_location_count;
use crate::cli::ListingArgs;
use crate::error::{LostFoundError, Result};
use crate::tui::ItemBrowser;

/// Launch the item browser TUI, optionally pre-seeded with a search or filters
pub async fn cmd_browse(listing: ListingArgs) -> Result<()> {
    check_location_count(&listing)?;
    let ctx = AppContext::load()?;

    element!(ItemBrowser(
        client: Some(ctx.client.clone()),
        payload: listing.payload(),
        sort: ctx.config.default_sort,
        view: ctx.config.default_view,
        grid_columns: ctx.config.grid_columns,
    ))
    .fullscreen()
    .await
    .map_err(|e| LostFoundError::Other(format!("TUI error: {e}")))
}
