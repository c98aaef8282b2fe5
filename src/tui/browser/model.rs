//! Pure model for the item browser.
//!
//! Key presses are translated into [`ListEvent`]s here, so the whole
//! keyboard surface is testable without a terminal. The component only
//! renders the model and executes the fetch tickets it hands back.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::listing::{
    DraftField, FetchTicket, FilterEdit, ListEvent, ListState, NavigationPayload, SortOption,
    ViewMode,
};
use crate::tui::components::Toast;

/// Which part of the screen receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    Search,
    Filter,
}

/// Search box contents while it has focus
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    pub text: String,
    pub focused: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BrowserModel {
    pub list: ListState,
    pub search: SearchBox,
    pub should_exit: bool,
    /// Set once a fetch came back 401 and cleared the session
    pub session_expired: bool,
}

impl BrowserModel {
    pub fn new(sort: SortOption, view: ViewMode) -> Self {
        Self {
            list: ListState::new(sort, view),
            ..Default::default()
        }
    }

    pub fn input_mode(&self) -> InputMode {
        if self.search.focused {
            InputMode::Search
        } else if self.list.filter_panel.is_open() {
            InputMode::Filter
        } else {
            InputMode::Browse
        }
    }

    /// Screen opened, possibly with state carried from elsewhere
    pub fn enter(&mut self, payload: Option<NavigationPayload>) -> Option<FetchTicket> {
        let ticket = self.list.reduce(ListEvent::NavigateIn(payload));
        self.search.text = self.list.query.search_text.clone();
        ticket
    }

    /// Status bar message, most urgent first
    pub fn toast(&self) -> Option<Toast> {
        if self.session_expired {
            return Some(Toast::error(
                "Session expired. Run `lostfound auth login` and reopen the browser.",
            ));
        }
        if let Some(failure) = self.list.error() {
            let hint = if failure.retryable {
                "r to retry, Esc to dismiss"
            } else {
                "Esc to dismiss"
            };
            return Some(Toast::error(format!("{} ({hint})", failure.message)));
        }
        self.list.notice.as_ref().map(Toast::warning)
    }

    /// Handle one key press; returns the fetch to run, if any.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Option<FetchTicket> {
        let ctrl = modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && code == KeyCode::Char('c') {
            self.should_exit = true;
            return None;
        }

        match self.input_mode() {
            InputMode::Search => self.handle_search_key(code),
            InputMode::Filter => self.handle_filter_key(code, ctrl),
            InputMode::Browse => self.handle_browse_key(code),
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) -> Option<FetchTicket> {
        match code {
            KeyCode::Enter => {
                self.search.focused = false;
                let text = self.search.text.trim().to_string();
                if text.is_empty() {
                    self.list.reduce(ListEvent::ClearSearch)
                } else {
                    self.list.reduce(ListEvent::SubmitSearch(text))
                }
            }
            KeyCode::Esc => {
                self.search.focused = false;
                self.search.text = self.list.query.search_text.clone();
                None
            }
            KeyCode::Backspace => {
                self.search.text.pop();
                None
            }
            KeyCode::Char(c) => {
                self.search.text.push(c);
                None
            }
            _ => None,
        }
    }

    fn handle_filter_key(&mut self, code: KeyCode, ctrl: bool) -> Option<FetchTicket> {
        let edit = match code {
            KeyCode::Enter => return self.list.reduce(ListEvent::ConfirmFilter),
            KeyCode::Esc => return self.list.reduce(ListEvent::CancelFilter),
            KeyCode::Tab | KeyCode::Down => FilterEdit::FocusNext,
            KeyCode::BackTab | KeyCode::Up => FilterEdit::FocusPrev,
            KeyCode::Char('a') if ctrl => FilterEdit::AddLocation,
            KeyCode::Char('d') if ctrl => {
                let DraftField::Location(index) = self.list.filter_panel.focused_field()? else {
                    return None;
                };
                FilterEdit::RemoveLocation(index)
            }
            KeyCode::Backspace => FilterEdit::PopChar,
            KeyCode::Char(c) if !ctrl => FilterEdit::PushChar(c),
            _ => return None,
        };
        self.list.reduce(ListEvent::EditFilter(edit))
    }

    fn handle_browse_key(&mut self, code: KeyCode) -> Option<FetchTicket> {
        match code {
            KeyCode::Char('q') => {
                self.should_exit = true;
                None
            }
            KeyCode::Esc => {
                if self.list.error().is_some() {
                    self.list.dismiss_error();
                } else {
                    self.should_exit = true;
                }
                None
            }
            KeyCode::Char('/') => {
                self.search.text = self.list.query.search_text.clone();
                self.search.focused = true;
                None
            }
            KeyCode::Char('x') => {
                self.search.text.clear();
                self.list.reduce(ListEvent::ClearSearch)
            }
            KeyCode::Char('f') => self.list.reduce(ListEvent::OpenFilter),
            KeyCode::Char('c') => self.list.reduce(ListEvent::ClearFilters),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(']') => {
                self.list.reduce(ListEvent::NextPage)
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('[') => {
                self.list.reduce(ListEvent::PrevPage)
            }
            KeyCode::Char(c @ '1'..='5') => {
                let page = c.to_digit(10).unwrap_or(1) - 1;
                if self.list.pagination().buttons.contains(&page) {
                    self.list.reduce(ListEvent::ChangePage(page))
                } else {
                    None
                }
            }
            KeyCode::Char('s') => {
                let next = self.list.sort.next();
                self.list.reduce(ListEvent::SetSort(next))
            }
            KeyCode::Char('v') => {
                let next = self.list.view.toggle();
                self.list.reduce(ListEvent::SetView(next))
            }
            KeyCode::Char('r') => self.list.reduce(ListEvent::Retry),
            _ => None,
        }
    }
}
