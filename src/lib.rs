pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod listing;
pub mod session;
pub mod tui;
pub mod types;
pub mod utils;

pub use api::{ApiClient, ItemSource};
pub use error::{LostFoundError, Result};
pub use session::{SessionContext, SessionStore, SessionTokens};
pub use types::{Category, Claim, Item, NewItem, PageResponse};
