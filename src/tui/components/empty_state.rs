//! Empty state component
//!
//! Shown in place of the item grid while loading or when a page is empty.

use iocraft::prelude::*;

use crate::tui::theme::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyStateKind {
    /// First fetch in flight
    Loading,
    /// Unfiltered listing is empty
    #[default]
    NoItems,
    /// Search or filters matched nothing
    NoResults,
}

impl EmptyStateKind {
    /// (icon, title, hint)
    fn copy(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            EmptyStateKind::Loading => ("~", "Loading items...", ""),
            EmptyStateKind::NoItems => ("i", "No found items yet", "Check back later."),
            EmptyStateKind::NoResults => (
                "?",
                "Nothing matches",
                "Press 'x' to clear the search or 'c' to clear filters.",
            ),
        }
    }
}

#[derive(Default, Props)]
pub struct EmptyStateProps {
    pub kind: EmptyStateKind,
    pub search_query: Option<String>,
}

#[component]
pub fn EmptyState(props: &EmptyStateProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let (icon, title, hint) = props.kind.copy();
    let query = props
        .search_query
        .clone()
        .filter(|q| !q.is_empty() && props.kind == EmptyStateKind::NoResults);

    element! {
        View(
            width: 100pct,
            height: 100pct,
            flex_direction: FlexDirection::Column,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            padding: 2,
        ) {
            View(
                width: 5,
                height: 3,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border_style: BorderStyle::Round,
                border_color: theme.border,
                margin_bottom: 1,
            ) {
                Text(content: icon, color: theme.text_dimmed, weight: Weight::Bold)
            }

            Text(content: title, color: theme.text, weight: Weight::Bold)

            #(query.map(|query| element! {
                View(margin_top: 1) {
                    Text(content: format!("Search: \"{query}\""), color: theme.search_match)
                }
            }))

            #((!hint.is_empty()).then(|| element! {
                View(margin_top: 2) {
                    Text(content: hint, color: theme.text_dimmed)
                }
            }))
        }
    }
}
