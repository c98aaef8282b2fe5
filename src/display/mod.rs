//! Terminal rendering for CLI output.
//!
//! Functions here return strings; commands decide where to print them.

use owo_colors::OwoColorize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::listing::{Mode, Page, Pagination, ViewMode};
use crate::types::{Category, Claim, ClaimStatus, Item, ItemStatus, Notification, WatchKeyword};

pub fn format_category_colored(category: Category) -> String {
    let badge = format!("[{category}]");
    match category {
        Category::Wallet | Category::Card => badge.yellow().to_string(),
        Category::Phone | Category::Electronics => badge.cyan().to_string(),
        Category::Bag | Category::Clothing => badge.magenta().to_string(),
        Category::Key | Category::Jewelry => badge.green().to_string(),
        Category::Document => badge.blue().to_string(),
        Category::Other => badge.dimmed().to_string(),
    }
}

pub fn format_item_status_colored(status: &ItemStatus) -> String {
    let label = status.to_string();
    match status {
        ItemStatus::Registered => label.green().to_string(),
        ItemStatus::ClaimPending => label.yellow().to_string(),
        ItemStatus::Returned => label.dimmed().to_string(),
        ItemStatus::Unknown(_) => label,
    }
}

pub fn format_claim_status_colored(status: ClaimStatus) -> String {
    let label = status.to_string();
    match status {
        ClaimStatus::Pending => label.yellow().to_string(),
        ClaimStatus::Approved => label.green().to_string(),
        ClaimStatus::Rejected => label.red().to_string(),
    }
}

/// Single-line item summary with colors
pub fn format_item_line(item: &Item) -> String {
    format!(
        "{} {} {} - {} ({})",
        format!("#{:<6}", item.id).cyan(),
        format_category_colored(item.category),
        item.name.bold(),
        item.location,
        item.found_date.to_string().dimmed()
    )
}

/// Full item detail block
pub fn format_item_detail(item: &Item) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {}\n\n",
        format!("#{}", item.id).cyan(),
        item.name.bold()
    ));
    out.push_str(&format!("{:<10} {}\n", "Category:".dimmed(), item.category));
    out.push_str(&format!("{:<10} {}\n", "Found:".dimmed(), item.found_date));
    out.push_str(&format!("{:<10} {}\n", "Location:".dimmed(), item.location));
    if let Some(brand) = &item.brand {
        out.push_str(&format!("{:<10} {}\n", "Brand:".dimmed(), brand));
    }
    if let Some(status) = &item.status {
        out.push_str(&format!(
            "{:<10} {}\n",
            "Status:".dimmed(),
            format_item_status_colored(status)
        ));
    }
    if let Some(image) = &item.image_url {
        out.push_str(&format!("{:<10} {}\n", "Image:".dimmed(), image));
    }
    if !item.description.is_empty() {
        out.push_str(&format!("\n{}\n", item.description));
    }
    out
}

#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Found")]
    found: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.to_string(),
            location: item.location.clone(),
            found: item.found_date.to_string(),
            status: item
                .status
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// One card of the grid view
fn item_card(item: &Item) -> String {
    format!(
        "#{} {}\n{}\n{}\n{}",
        item.id, item.name, item.category, item.location, item.found_date
    )
}

/// Render presented items in the chosen layout
pub fn render_items(items: &[&Item], view: ViewMode, columns: usize) -> String {
    match view {
        ViewMode::List => {
            let rows: Vec<ItemRow> = items.iter().map(|item| ItemRow::from(*item)).collect();
            let mut table = Table::new(rows);
            table.with(Style::modern());
            table.to_string()
        }
        ViewMode::Grid => {
            let mut builder = Builder::default();
            for row in crate::listing::presenter::grid_rows(items, columns) {
                let mut cells: Vec<String> = row.iter().map(|item| item_card(item)).collect();
                cells.resize(columns.max(1), String::new());
                builder.push_record(cells);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            table.to_string()
        }
    }
}

/// Footer below a listing page: mode, counts and pagination bar
pub fn format_page_footer(page: &Page, pagination: &Pagination) -> String {
    let mode = match page.mode {
        Mode::Listing => "all items",
        Mode::Searching => "search results",
        Mode::Filtering => "filtered",
    };
    format!(
        "{}  {}",
        pagination.render(),
        format!(
            "page {} of {} - {} {}",
            page.page + 1,
            page.total_pages.max(1),
            page.total_count,
            mode
        )
        .dimmed()
    )
}

#[derive(Tabled)]
struct ClaimRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Item")]
    item: String,
    #[tabled(rename = "Claimant")]
    claimant: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Message")]
    message: String,
}

pub fn render_claims(claims: &[Claim]) -> String {
    let rows: Vec<ClaimRow> = claims
        .iter()
        .map(|c| ClaimRow {
            id: c.id,
            item: match &c.item_name {
                Some(name) => format!("#{} {}", c.item_id, name),
                None => format!("#{}", c.item_id),
            },
            claimant: c.claimant_name.clone().unwrap_or_else(|| "-".to_string()),
            status: c.status.to_string(),
            message: truncate(&c.message, 40),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::modern());
    table.to_string()
}

pub fn format_keyword_line(keyword: &WatchKeyword) -> String {
    let id = format!("{:<6}", keyword.id);
    if keyword.active {
        format!("{} {}", id.cyan(), keyword.keyword)
    } else {
        format!(
            "{} {} {}",
            id.dimmed(),
            keyword.keyword.dimmed(),
            "(inactive)".dimmed()
        )
    }
}

pub fn format_notification_line(notification: &Notification) -> String {
    let marker = if notification.read { " " } else { "●" };
    let title = if notification.read {
        notification.title.dimmed().to_string()
    } else {
        notification.title.bold().to_string()
    };
    let mut line = format!(
        "{} {} {}",
        marker.yellow(),
        format!("{:<6}", notification.id).cyan(),
        title
    );
    if notification.archived {
        line.push_str(&format!(" {}", "(archived)".dimmed()));
    }
    if !notification.body.is_empty() {
        line.push_str(&format!("\n         {}", truncate(&notification.body, 70).dimmed()));
    }
    line
}

/// Cut `text` to at most `max` characters, marking the cut with `...`
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
