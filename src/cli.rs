use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use jiff::civil::Date;
use std::io;

use crate::listing::{RadiusBand, SortOption, ViewMode};
use crate::types::Category;

#[derive(Parser)]
#[command(name = "lostfound")]
#[command(about = "Browse, register and claim found items")]
#[command(version)]
pub struct Cli {
    /// Log verbosely to stderr (overridden by LOSTFOUND_LOG)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every read command
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Search and filter flags, equivalent to the listing page's navigation state
#[derive(Args, Debug, Clone, Default)]
pub struct ListingArgs {
    /// Keyword search (server ranks the results)
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category: wallet, phone, bag, key, card, electronics, clothing, jewelry, document, other
    #[arg(short, long, value_parser = parse_category)]
    pub category: Option<Category>,

    /// Location to search around (repeat up to 3 times)
    #[arg(short, long = "location")]
    pub locations: Vec<String>,

    /// Walking distance from the location(s) in minutes: 10, 20 or 30
    #[arg(short, long, value_parser = parse_distance)]
    pub distance: Option<RadiusBand>,

    /// Brand name
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Only items found on or after this date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub found_after: Option<Date>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse and manage found items
    #[command(visible_alias = "i")]
    Items {
        #[command(subcommand)]
        action: ItemsAction,
    },

    /// Interactive item browser
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        listing: ListingArgs,
    },

    /// Request, approve and review claims
    Claims {
        #[command(subcommand)]
        action: ClaimsAction,
    },

    /// Manage watch keywords
    #[command(visible_alias = "kw")]
    Keywords {
        #[command(subcommand)]
        action: KeywordsAction,
    },

    /// Read and manage notifications
    #[command(visible_alias = "n")]
    Notifications {
        #[command(subcommand)]
        action: NotificationsAction,
    },

    /// Sign in, sign up and manage the session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },

    /// Summary of my items, claims, keywords and unread notifications
    Dashboard {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ItemsAction {
    /// List, search or filter found items
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        listing: ListingArgs,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1", value_parser = parse_page)]
        page: u32,

        /// Ordering outside search: newest or similarity (default from config)
        #[arg(long, value_parser = parse_sort)]
        sort: Option<SortOption>,

        /// Layout: grid or list (default from config)
        #[arg(long, value_parser = parse_view)]
        view: Option<ViewMode>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Show one item
    Show {
        /// Item ID
        id: u64,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Register a found item
    Register {
        /// What was found
        #[arg(long)]
        name: String,

        /// Category of the item
        #[arg(short, long, value_parser = parse_category)]
        category: Category,

        /// Where it was found
        #[arg(short, long)]
        location: String,

        /// When it was found (YYYY-MM-DD, default: today)
        #[arg(long, value_parser = parse_date)]
        found_date: Option<Date>,

        /// Free-form description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Brand name
        #[arg(short, long)]
        brand: Option<String>,

        /// Link to a photo of the item
        #[arg(long)]
        image_url: Option<String>,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Delete an item I registered
    #[command(visible_alias = "rm")]
    Delete {
        /// Item ID
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Items I registered
    Mine {
        #[command(flatten)]
        output: OutputOptions,
    },
}

#[derive(Subcommand)]
pub enum ClaimsAction {
    /// Ask for an item to be returned to me
    Request {
        /// Item ID
        item_id: u64,

        /// Why the item is mine (identifying details)
        #[arg(short, long)]
        message: String,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Approve a claim on one of my items
    Approve {
        /// Claim ID
        id: u64,
    },

    /// Reject a claim on one of my items
    Reject {
        /// Claim ID
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Claims made on an item
    Item {
        /// Item ID
        item_id: u64,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Claims others made on my items
    Received {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Claims I made
    Sent {
        #[command(flatten)]
        output: OutputOptions,
    },
}

#[derive(Subcommand)]
pub enum KeywordsAction {
    /// Watch a new keyword
    Add {
        /// Keyword (2-20 characters)
        keyword: String,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// List watched keywords
    #[command(visible_alias = "ls")]
    List {
        /// Include deactivated keywords
        #[arg(short, long)]
        all: bool,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Stop watching a keyword
    #[command(visible_alias = "rm")]
    Delete {
        /// Keyword ID
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Start watching a deactivated keyword again
    Reactivate {
        /// Keyword ID
        id: u64,
    },
}

#[derive(Subcommand)]
pub enum NotificationsAction {
    /// List notifications
    #[command(visible_alias = "ls")]
    List {
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,

        #[command(flatten)]
        output: OutputOptions,
    },

    /// Mark a notification as read
    Read {
        /// Notification ID
        id: u64,
    },

    /// Archive a notification
    Archive {
        /// Notification ID
        id: u64,
    },

    /// Delete a notification
    #[command(visible_alias = "rm")]
    Delete {
        /// Notification ID
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Mark every notification as read
    ReadAll,
}

#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in (password is read from LOSTFOUND_PASSWORD or stdin)
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,
    },

    /// Create an account (password is read from LOSTFOUND_PASSWORD or stdin)
    Signup {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami {
        #[command(flatten)]
        output: OutputOptions,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        #[command(flatten)]
        output: OutputOptions,
    },

    /// Set a configuration value
    Set {
        /// api_url, request_timeout, default_view, default_sort or grid_columns
        key: String,
        /// Value to set
        value: String,
    },

    /// Print a single configuration value
    Get {
        /// Configuration key
        key: String,
    },
}

fn parse_category(s: &str) -> Result<Category, String> {
    s.parse().map_err(|_| {
        let valid: Vec<String> = Category::ALL
            .iter()
            .map(|c| c.as_str().to_lowercase())
            .collect();
        format!("invalid category '{s}'. Must be one of: {}", valid.join(", "))
    })
}

fn parse_distance(s: &str) -> Result<RadiusBand, String> {
    s.parse().map_err(|e: crate::error::LostFoundError| e.to_string())
}

fn parse_date(s: &str) -> Result<Date, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid date '{s}', expected YYYY-MM-DD"))
}

fn parse_sort(s: &str) -> Result<SortOption, String> {
    s.parse().map_err(|e: crate::error::LostFoundError| e.to_string())
}

fn parse_view(s: &str) -> Result<ViewMode, String> {
    s.parse().map_err(|e: crate::error::LostFoundError| e.to_string())
}

fn parse_page(s: &str) -> Result<u32, String> {
    match s.parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(format!("invalid page '{s}', pages start at 1")),
    }
}

pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "lostfound", &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_category_case_insensitive() {
        assert_eq!(parse_category("wallet").unwrap(), Category::Wallet);
        assert_eq!(parse_category("PHONE").unwrap(), Category::Phone);
    }

    #[test]
    fn test_parse_category_error_lists_valid_values() {
        let err = parse_category("sock").unwrap_err();
        assert!(err.contains("wallet") && err.contains("document"), "got: {err}");
    }

    #[test]
    fn test_parse_distance_accepts_only_bands() {
        assert_eq!(parse_distance("20").unwrap(), RadiusBand::TwentyMinutes);
        assert!(parse_distance("15").is_err());
    }

    #[test]
    fn test_parse_page_starts_at_one() {
        assert_eq!(parse_page("1").unwrap(), 1);
        assert!(parse_page("0").is_err());
        assert!(parse_page("-1").is_err());
    }

    #[test]
    fn test_list_flags_parse() {
        let cli = Cli::try_parse_from([
            "lostfound",
            "items",
            "list",
            "--location",
            "Gangnam Station",
            "--location",
            "Hongik Univ Station",
            "--distance",
            "20",
            "--page",
            "2",
        ])
        .unwrap();
        let Commands::Items {
            action: ItemsAction::List { listing, page, .. },
        } = cli.command
        else {
            panic!("expected items list");
        };
        assert_eq!(listing.locations.len(), 2);
        assert_eq!(listing.distance, Some(RadiusBand::TwentyMinutes));
        assert_eq!(page, 2);
    }
}
