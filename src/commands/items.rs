//! Item commands: list/search/filter, detail, registration, deletion.

use jiff::Zoned;
use jiff::civil::Date;
use owo_colors::OwoColorize;
use serde_json::json;

use super::interactive::confirm_destructive;
use super::{AppContext, CommandOutput, print_json};
use crate::cli::{ListingArgs, OutputOptions};
use crate::display::{format_item_detail, format_item_line, format_page_footer, render_items};
use crate::error::{LostFoundError, Result};
use crate::listing::{ListEvent, ListState, SortOption, ViewMode, execute, interpret};
use crate::types::{Category, MAX_LOCATIONS, NewItem};
use crate::utils::validation::validate_new_item;

pub struct ItemsListOptions {
    pub listing: ListingArgs,
    /// 1-based
    pub page: u32,
    pub sort: Option<SortOption>,
    pub view: Option<ViewMode>,
}

pub(super) fn check_location_count(listing: &ListingArgs) -> Result<()> {
    if listing.locations.len() > MAX_LOCATIONS {
        return Err(LostFoundError::validation(
            "location",
            format!(
                "at most {MAX_LOCATIONS} locations, got {}",
                listing.locations.len()
            ),
        ));
    }
    Ok(())
}

/// List, search or filter items, one page at a time
pub async fn cmd_items_list(options: ItemsListOptions, output: OutputOptions) -> Result<()> {
    check_location_count(&options.listing)?;
    let payload = options.listing.payload();
    // Reject a malformed payload outright instead of silently listing everything
    interpret(payload.as_ref())?;

    let ctx = AppContext::load()?;
    let sort = options.sort.unwrap_or(ctx.config.default_sort);
    let view = options.view.unwrap_or(ctx.config.default_view);
    let mut state = ListState::new(sort, view);

    let mut ticket = state.reduce(ListEvent::NavigateIn(payload));
    if options.page > 1 {
        ticket = state.reduce(ListEvent::ChangePage(options.page - 1));
    }
    let Some(ticket) = ticket else {
        return Ok(());
    };

    let response = execute(&ctx.client, &ticket.request).await?;
    state.apply(ticket.seq, Ok(response));

    let page = state.page();
    let presented = state.presented();

    if output.json {
        return print_json(&json!({
            "mode": page.mode.to_string(),
            "page": page.page + 1,
            "total_pages": page.total_pages,
            "total_count": page.total_count,
            "sort": state.sort.to_string(),
            "items": presented,
        }));
    }

    if presented.is_empty() {
        println!("No items found.");
        return Ok(());
    }
    println!(
        "{}",
        render_items(&presented, state.view, ctx.config.grid_columns)
    );
    println!("{}", format_page_footer(page, &state.pagination()));
    Ok(())
}

pub async fn cmd_items_show(id: u64, output: OutputOptions) -> Result<()> {
    let ctx = AppContext::load()?;
    let item = ctx.client.get_item(id).await?;

    CommandOutput::new(serde_json::to_value(&item)?)
        .with_text(format_item_detail(&item))
        .print(output)
}

pub struct RegisterOptions {
    pub name: String,
    pub category: Category,
    pub location: String,
    pub found_date: Option<Date>,
    pub description: String,
    pub brand: Option<String>,
    pub image_url: Option<String>,
}

pub async fn cmd_items_register(options: RegisterOptions, output: OutputOptions) -> Result<()> {
    let today = Zoned::now().date();
    let new_item = NewItem {
        name: options.name.trim().to_string(),
        category: options.category,
        description: options.description.trim().to_string(),
        found_date: options.found_date.unwrap_or(today),
        location: options.location.trim().to_string(),
        brand: options
            .brand
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty()),
        image_url: options.image_url,
    };
    validate_new_item(&new_item, today)?;

    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    let item = ctx.client.create_item(&new_item).await?;

    CommandOutput::new(json!({
        "action": "item_registered",
        "item": item,
    }))
    .with_text(format!("Registered {}", format_item_line(&item)))
    .print(output)
}

pub async fn cmd_items_delete(id: u64, yes: bool) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;

    if !confirm_destructive(&format!("Delete item #{id}"), yes)? {
        println!("Aborted.");
        return Ok(());
    }

    ctx.client.delete_item(id).await?;
    println!("Deleted item {}", format!("#{id}").cyan());
    Ok(())
}

pub async fn cmd_items_mine(output: OutputOptions) -> Result<()> {
    let ctx = AppContext::load()?;
    ctx.require_auth()?;
    let items = ctx.client.my_items().await?;

    let text = if items.is_empty() {
        "You haven't registered any items.".to_string()
    } else {
        items
            .iter()
            .map(format_item_line)
            .collect::<Vec<_>>()
            .join("\n")
    };

    CommandOutput::new(serde_json::to_value(&items)?)
        .with_text(text)
        .print(output)
}
