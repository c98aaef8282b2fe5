//! Item browser component (`lostfound browse`)
//!
//! Renders a [`BrowserModel`] and runs the fetch tickets it produces. Each
//! ticket is executed by one async handler; the result goes back through
//! [`ListState::apply`](crate::listing::ListState::apply), which drops any
//! response that is no longer the latest.

use iocraft::prelude::*;

use super::filter_modal::FilterModal;
use super::model::{BrowserModel, InputMode};
use crate::api::ApiClient;
use crate::listing::presenter::grid_rows;
use crate::listing::{FetchTicket, Mode, NavigationPayload, SortOption, ViewMode, execute};
use crate::tui::components::{
    EmptyState, EmptyStateKind, Footer, ItemCard, ItemRow, browse_shortcuts,
    filter_modal_shortcuts, render_toast, search_shortcuts,
};
use crate::tui::theme::theme;
use crate::types::Item;

#[derive(Default, Props)]
pub struct ItemBrowserProps {
    pub client: Option<ApiClient>,
    /// Search/filter state handed over from another screen or the command line
    pub payload: Option<NavigationPayload>,
    pub sort: SortOption,
    pub view: ViewMode,
    pub grid_columns: usize,
}

#[component]
pub fn ItemBrowser<'a>(props: &ItemBrowserProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let mut model: State<BrowserModel> = hooks.use_state({
        let (sort, view) = (props.sort, props.view);
        move || BrowserModel::new(sort, view)
    });

    let fetch_handler: Handler<FetchTicket> = hooks.use_async_handler({
        let client = props.client.clone();
        let model_setter = model;

        move |ticket: FetchTicket| {
            let client = client.clone();
            let mut model_setter = model_setter;

            async move {
                let Some(client) = client else {
                    return;
                };
                let result = execute(&client, &ticket.request).await;

                let mut next = model_setter.read().clone();
                next.list.apply(ticket.seq, result);
                if client.session().was_invalidated() {
                    next.session_expired = true;
                }
                model_setter.set(next);
            }
        }
    });

    // Navigate in once, on mount
    let mut entered = hooks.use_state(|| false);
    if !entered.get() {
        entered.set(true);
        let mut next = model.read().clone();
        let ticket = next.enter(props.payload.clone());
        model.set(next);
        if let Some(ticket) = ticket {
            fetch_handler.clone()(ticket);
        }
    }

    hooks.use_terminal_events({
        let fetch_handler = fetch_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let mut next = model.read().clone();
                let ticket = next.handle_key(code, modifiers);
                model.set(next);
                if let Some(ticket) = ticket {
                    fetch_handler.clone()(ticket);
                }
            }
            _ => {}
        }
    });

    let current = model.read().clone();
    if current.should_exit {
        system.exit();
    }

    let list = &current.list;
    let presented = list.presented();
    let pagination = list.pagination();
    let page = list.page();
    let mode = list.mode();
    let active_filters = list.query.filters.active_count();
    let input_mode = current.input_mode();

    let shortcuts = match input_mode {
        InputMode::Browse => browse_shortcuts(),
        InputMode::Search => search_shortcuts(),
        InputMode::Filter => filter_modal_shortcuts(),
    };

    let empty_kind = if list.is_loading() {
        EmptyStateKind::Loading
    } else if mode == Mode::Listing {
        EmptyStateKind::NoItems
    } else {
        EmptyStateKind::NoResults
    };

    let columns = if current.list.view == ViewMode::Grid {
        props.grid_columns.max(1)
    } else {
        1
    };
    let column_width = width.saturating_sub(2) / columns as u16;
    let card_width = u32::from(column_width);
    let rows: Vec<Vec<Item>> = grid_rows(&presented, columns)
        .into_iter()
        .map(|row| row.into_iter().cloned().collect())
        .collect();

    let mode_label = match mode {
        Mode::Listing => "all items".to_string(),
        Mode::Searching => format!("search \"{}\"", list.query.search_text),
        Mode::Filtering => "filtered".to_string(),
    };
    let filter_badge = if active_filters > 0 {
        format!("filters: {active_filters}")
    } else {
        String::new()
    };
    let search_line = if current.search.focused {
        format!("/{}_", current.search.text)
    } else if list.query.search_text.is_empty() {
        "Press / to search".to_string()
    } else {
        format!("/{}", list.query.search_text)
    };
    let status_line = format!(
        "{} items  sort: {}  view: {}{}",
        page.total_count,
        list.sort,
        list.view,
        if list.is_loading() { "  loading..." } else { "" }
    );

    let toast = current.toast();
    let panel = list.filter_panel.clone();
    let show_filter = panel.is_open();
    let view_mode = list.view;

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                padding_left: 1,
                padding_right: 1,
                column_gap: 2,
            ) {
                Text(content: "lostfound", color: Color::Cyan, weight: Weight::Bold)
                Text(content: mode_label, color: theme.text)
                Text(content: filter_badge, color: theme.search_match)
                View(flex_grow: 1.0)
                Text(content: status_line, color: theme.text_dimmed)
            }

            // Search bar
            View(
                width: 100pct,
                height: 3,
                padding_left: 1,
                padding_right: 1,
                border_style: BorderStyle::Round,
                border_color: if current.search.focused { theme.border_focused } else { theme.border },
            ) {
                Text(
                    content: search_line,
                    color: if current.search.focused { theme.text } else { theme.text_dimmed },
                )
            }

            // Items
            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
                overflow: Overflow::Hidden,
                padding_left: 1,
                padding_right: 1,
            ) {
                #(if rows.is_empty() {
                    vec![element! {
                        EmptyState(
                            kind: empty_kind,
                            search_query: Some(list.query.search_text.clone()),
                        )
                    }.into_any()]
                } else if view_mode == ViewMode::Grid {
                    rows.into_iter().map(|row| element! {
                        View(width: 100pct, flex_direction: FlexDirection::Row) {
                            #(row.into_iter().map(|item| element! {
                                View(width: column_width) {
                                    ItemCard(item: Some(item), width: Some(card_width))
                                }
                            }))
                        }
                    }.into_any()).collect()
                } else {
                    rows.into_iter().flatten().map(|item| element! {
                        ItemRow(item: Some(item))
                    }.into_any()).collect()
                })
            }

            // Pagination
            View(
                width: 100pct,
                height: 1,
                justify_content: JustifyContent::Center,
            ) {
                Text(content: pagination.render(), color: theme.text)
            }

            #(render_toast(&toast))

            Footer(shortcuts: shortcuts)

            #(show_filter.then(|| element! {
                FilterModal(panel: panel.clone())
            }))
        }
    }
}
