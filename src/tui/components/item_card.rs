//! Item card for the grid view, and a one-line row for the list view.
//!
//! ```text
//! +---------------------+
//! | #42 WALLET          |
//! | Black leather wal...|
//! | Gangnam Station     |
//! | 2024-03-02          |
//! +---------------------+
//! ```

use iocraft::prelude::*;

use crate::display::truncate;
use crate::tui::theme::theme;
use crate::types::Item;

#[derive(Default, Props)]
pub struct ItemCardProps {
    pub item: Option<Item>,
    /// Card width in columns, borders included
    pub width: Option<u32>,
}

#[component]
pub fn ItemCard(props: &ItemCardProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(item) = props.item.as_ref() else {
        return element!(View);
    };

    // Round border and horizontal padding take four columns.
    let text_width = (props.width.unwrap_or(24).saturating_sub(4) as usize).max(8);
    let status = item.status.clone();

    element! {
        View(
            width: 100pct,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_direction: FlexDirection::Row, column_gap: 1) {
                Text(content: format!("#{}", item.id), color: theme.id_color, weight: Weight::Bold)
                Text(content: item.category.to_string(), color: theme.category_color(item.category))
            }
            Text(content: truncate(&item.name, text_width), color: theme.text, weight: Weight::Bold)
            Text(content: truncate(&item.location, text_width), color: theme.text_dimmed)
            View(flex_direction: FlexDirection::Row, column_gap: 1) {
                Text(content: item.found_date.to_string(), color: theme.text_dimmed)
                #(status.map(|status| element! {
                    Text(content: status.to_string(), color: theme.status_color(&status))
                }))
            }
        }
    }
}

#[derive(Default, Props)]
pub struct ItemRowProps {
    pub item: Option<Item>,
}

#[component]
pub fn ItemRow(props: &ItemRowProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(item) = props.item.as_ref() else {
        return element!(View);
    };

    element! {
        View(width: 100pct, flex_direction: FlexDirection::Row, column_gap: 2) {
            View(width: 7) {
                Text(content: format!("#{}", item.id), color: theme.id_color)
            }
            View(width: 12) {
                Text(content: item.category.to_string(), color: theme.category_color(item.category))
            }
            View(width: 11) {
                Text(content: item.found_date.to_string(), color: theme.text_dimmed)
            }
            View(flex_grow: 1.0) {
                Text(content: truncate(&item.name, 40), color: theme.text)
            }
            View(width: 24) {
                Text(content: truncate(&item.location, 24), color: theme.text_dimmed)
            }
        }
    }
}
