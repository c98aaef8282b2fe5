//! Keyboard shortcuts bar component
//!
//! Displays available keyboard shortcuts at the bottom of the screen.

use iocraft::prelude::*;

use super::shortcuts::ShortcutsBuilder;
use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-a", "Tab")
    pub key: String,
    /// Description of the action
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

/// Shortcuts for the item browser
pub fn browse_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .with_search()
        .add("f", "Filters")
        .add("c", "Clear Filters")
        .with_paging()
        .add("s", "Sort")
        .add("v", "Grid/List")
        .add("r", "Retry")
        .with_quit()
        .build()
}

/// Shortcuts while the search box has focus
pub fn search_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Enter", "Search")
        .add("Esc", "Cancel")
        .build()
}

/// Shortcuts for the filter modal
pub fn filter_modal_shortcuts() -> Vec<Shortcut> {
    ShortcutsBuilder::new()
        .add("Tab/S-Tab", "Field")
        .add("C-a", "Add Location")
        .add("C-d", "Remove Location")
        .add("Enter", "Apply")
        .add("Esc", "Cancel")
        .build()
}
