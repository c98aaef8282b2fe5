//! Shared TUI components

pub mod empty_state;
pub mod footer;
pub mod item_card;
pub mod modal;
pub mod shortcuts;
pub mod toast;

pub use empty_state::{EmptyState, EmptyStateKind, EmptyStateProps};
pub use footer::{
    Footer, FooterProps, Shortcut, browse_shortcuts, filter_modal_shortcuts, search_shortcuts,
};
pub use item_card::{ItemCard, ItemCardProps, ItemRow, ItemRowProps};
pub use modal::{
    ModalBorderColor, ModalContainer, ModalContainerProps, ModalOverlay, ModalOverlayProps,
};
pub use toast::{Toast, ToastLevel, render_toast};
