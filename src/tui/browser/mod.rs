//! Interactive item browser: search box, filter modal, grid/list and paging.

mod filter_modal;
pub mod model;
mod view;

pub use model::{BrowserModel, InputMode};
pub use view::{ItemBrowser, ItemBrowserProps};
