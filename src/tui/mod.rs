//! Terminal UI for browsing found items

pub mod browser;
pub mod components;
pub mod theme;

pub use browser::{ItemBrowser, ItemBrowserProps};
pub use theme::Theme;
