//! Filter modal: one row per draft field, focused row highlighted.

use iocraft::prelude::*;

use crate::listing::{DraftField, FilterPanel};
use crate::tui::components::{ModalBorderColor, ModalContainer, ModalOverlay};
use crate::tui::theme::theme;
use crate::types::Category;

#[derive(Default, Props)]
pub struct FilterModalProps {
    pub panel: FilterPanel,
}

/// Input hint shown beside an empty field
fn placeholder(field: DraftField) -> String {
    match field {
        DraftField::Category => Category::ALL
            .iter()
            .map(|c| c.as_str().to_lowercase())
            .collect::<Vec<_>>()
            .join("/"),
        DraftField::Location(_) => "station or place name".to_string(),
        DraftField::Distance => "10, 20 or 30 minutes".to_string(),
        DraftField::Brand => "any".to_string(),
        DraftField::FoundAfter => "YYYY-MM-DD".to_string(),
    }
}

#[component]
pub fn FilterModal(props: &FilterModalProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let panel = &props.panel;
    let Some(draft) = panel.draft() else {
        return element!(View).into_any();
    };

    let focused = panel.focused_field();
    let rows: Vec<(DraftField, String, bool, Option<String>)> = draft
        .fields()
        .into_iter()
        .map(|field| {
            let value = draft.value(field).unwrap_or_default().to_string();
            let error = panel.error_for(field).map(str::to_string);
            (field, value, Some(field) == focused, error)
        })
        .collect();

    let border = if panel.error.is_some() {
        ModalBorderColor::Error
    } else {
        ModalBorderColor::Info
    };

    element! {
        ModalOverlay {
            ModalContainer(
                width: Some(64),
                border_color: Some(border),
                title: Some("Filters".to_string()),
                footer_text: Some("Tab field  C-a/C-d location  Enter apply  Esc cancel".to_string()),
            ) {
                #(rows.into_iter().map(|(field, value, is_focused, error)| {
                    let shown = if value.is_empty() && !is_focused {
                        placeholder(field)
                    } else if is_focused {
                        format!("{value}_")
                    } else {
                        value.clone()
                    };
                    let color = if value.is_empty() && !is_focused {
                        theme.text_dimmed
                    } else {
                        theme.text
                    };
                    let has_error = error.is_some();
                    let label_color = if has_error {
                        theme.error
                    } else if is_focused {
                        theme.highlight_text
                    } else {
                        Color::Cyan
                    };
                    element! {
                        View(flex_direction: FlexDirection::Column) {
                            View(
                                flex_direction: FlexDirection::Row,
                                background_color: if is_focused { Some(theme.highlight) } else { None },
                            ) {
                                View(width: 18) {
                                    Text(
                                        content: field.label(),
                                        color: label_color,
                                        weight: if is_focused || has_error { Weight::Bold } else { Weight::Normal },
                                    )
                                }
                                Text(content: shown, color: color)
                            }
                            #(error.map(|message| element! {
                                View(padding_left: 18) {
                                    Text(content: format!("! {message}"), color: theme.error)
                                }
                            }))
                        }
                    }
                }))
            }
        }
    }
    .into_any()
}
