//! Item listing page as an explicit state machine.
//!
//! Every user or navigation event goes through [`ListState::reduce`], which
//! performs the pure state transition and returns at most one
//! [`FetchTicket`]. The caller executes the ticket and hands the result back
//! through [`ListState::apply`]. Nothing here performs I/O, so the whole page
//! is testable without a terminal or a network.

use crate::error::Result;
use crate::types::{Item, PageResponse};

use super::dispatcher::{ApplyOutcome, FetchDispatcher, FetchFailure, FetchTicket, Page};
use super::draft::{DraftField, FilterPanel};
use super::navigation::{NavigationPayload, interpret};
use super::presenter::{Pagination, SortOption, ViewMode, present};
use super::query::{FilterFields, ListQuery, Mode};
use super::request::FetchRequest;

// ============================================================================
// Events
// ============================================================================

/// Edits applied to the open filter draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEdit {
    Set(DraftField, String),
    /// Type into the focused field
    PushChar(char),
    /// Backspace in the focused field
    PopChar,
    AddLocation,
    RemoveLocation(usize),
    FocusNext,
    FocusPrev,
}

/// Named transitions of the listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Page entered, optionally carrying state from another page
    NavigateIn(Option<NavigationPayload>),
    /// Commit the search box text
    SubmitSearch(String),
    ClearSearch,
    OpenFilter,
    EditFilter(FilterEdit),
    ConfirmFilter,
    CancelFilter,
    /// Drop every committed filter
    ClearFilters,
    /// Jump to a 0-based page
    ChangePage(u32),
    NextPage,
    PrevPage,
    Retry,
    SetSort(SortOption),
    SetView(ViewMode),
}

// ============================================================================
// State
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ListState {
    /// Committed search + filters
    pub query: ListQuery,
    pub filter_panel: FilterPanel,
    pub sort: SortOption,
    pub view: ViewMode,
    /// Problem with the last navigation payload, shown inline
    pub notice: Option<String>,
    dispatcher: FetchDispatcher,
    handled_navigation: Option<Option<NavigationPayload>>,
}

impl ListState {
    pub fn new(sort: SortOption, view: ViewMode) -> Self {
        Self {
            sort,
            view,
            ..Default::default()
        }
    }

    /// Apply an event; returns the single fetch it requires, if any.
    pub fn reduce(&mut self, event: ListEvent) -> Option<FetchTicket> {
        match event {
            ListEvent::NavigateIn(payload) => self.navigate_in(payload),

            ListEvent::SubmitSearch(text) => {
                self.query.search_text = text.trim().to_string();
                Some(self.fetch_page(0))
            }
            ListEvent::ClearSearch => {
                if self.query.search_text.is_empty() {
                    return None;
                }
                self.query.search_text.clear();
                Some(self.fetch_page(0))
            }

            ListEvent::OpenFilter => {
                self.filter_panel.open(&self.query.filters);
                None
            }
            ListEvent::EditFilter(edit) => {
                self.edit_filter(edit);
                None
            }
            ListEvent::ConfirmFilter => match self.filter_panel.confirm() {
                Ok(Some(filters)) => {
                    self.query.filters = filters;
                    Some(self.fetch_page(0))
                }
                Ok(None) | Err(_) => None,
            },
            ListEvent::CancelFilter => {
                self.filter_panel.cancel();
                None
            }
            ListEvent::ClearFilters => {
                if self.query.filters == FilterFields::default() {
                    return None;
                }
                self.query.filters = FilterFields::default();
                Some(self.fetch_page(0))
            }

            ListEvent::ChangePage(page) => {
                let total = self.page().total_pages;
                if total > 0 && page >= total {
                    return None;
                }
                Some(self.fetch_page(page))
            }
            ListEvent::NextPage => {
                let pagination = self.pagination();
                if !pagination.next_enabled {
                    return None;
                }
                Some(self.fetch_page(pagination.current + 1))
            }
            ListEvent::PrevPage => {
                let pagination = self.pagination();
                if !pagination.prev_enabled {
                    return None;
                }
                Some(self.fetch_page(pagination.current - 1))
            }

            ListEvent::Retry => self.dispatcher.retry(),

            ListEvent::SetSort(sort) => {
                self.sort = sort;
                None
            }
            ListEvent::SetView(view) => {
                self.view = view;
                None
            }
        }
    }

    /// Hand back the result of an executed ticket.
    pub fn apply(&mut self, seq: u64, result: Result<PageResponse>) -> ApplyOutcome {
        self.dispatcher.apply(seq, result)
    }

    fn navigate_in(&mut self, payload: Option<NavigationPayload>) -> Option<FetchTicket> {
        if self.handled_navigation.as_ref() == Some(&payload) {
            return None;
        }

        self.query = match interpret(payload.as_ref()) {
            Ok(query) => {
                self.notice = None;
                query
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                ListQuery::default()
            }
        };
        self.handled_navigation = Some(payload);
        Some(self.fetch_page(0))
    }

    fn edit_filter(&mut self, edit: FilterEdit) {
        let focused = self.filter_panel.focused_field();
        match edit {
            FilterEdit::Set(field, value) => {
                if let Some(draft) = self.filter_panel.draft_mut() {
                    draft.set_field(field, value);
                }
            }
            FilterEdit::PushChar(c) => {
                if let (Some(field), Some(draft)) = (focused, self.filter_panel.draft_mut()) {
                    draft.push_char(field, c);
                }
            }
            FilterEdit::PopChar => {
                if let (Some(field), Some(draft)) = (focused, self.filter_panel.draft_mut()) {
                    draft.pop_char(field);
                }
            }
            FilterEdit::AddLocation => {
                self.filter_panel.add_location();
            }
            FilterEdit::RemoveLocation(index) => {
                self.filter_panel.remove_location(index);
            }
            FilterEdit::FocusNext => self.filter_panel.focus_next(),
            FilterEdit::FocusPrev => self.filter_panel.focus_prev(),
        }
    }

    fn fetch_page(&mut self, page: u32) -> FetchTicket {
        self.dispatcher
            .issue(FetchRequest::for_query(&self.query, page))
    }

    /// Mode of the committed query (what the next fetch will use)
    pub fn mode(&self) -> Mode {
        self.query.mode()
    }

    pub fn page(&self) -> &Page {
        self.dispatcher.page()
    }

    /// Items of the displayed page in presentation order
    pub fn presented(&self) -> Vec<&Item> {
        let page = self.page();
        present(&page.items, page.mode, self.sort)
    }

    pub fn pagination(&self) -> Pagination {
        let page = self.page();
        Pagination::new(page.page, page.total_pages)
    }

    pub fn is_loading(&self) -> bool {
        self.dispatcher.is_loading()
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        self.dispatcher.error()
    }

    pub fn dismiss_error(&mut self) {
        self.dispatcher.dismiss_error();
    }

    pub fn last_request(&self) -> Option<&FetchRequest> {
        self.dispatcher.last_request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LostFoundError;
    use crate::listing::request::Refinements;
    use crate::types::{Category, PAGE_SIZE};

    fn item(id: u64, day: i8) -> Item {
        Item {
            id,
            name: format!("item {id}"),
            category: Category::Bag,
            description: String::new(),
            found_date: jiff::civil::date(2024, 4, day),
            location: "Seoul".into(),
            image_url: None,
            status: None,
            brand: None,
        }
    }

    fn page_of(ids: &[u64], total: u64) -> PageResponse {
        PageResponse {
            items: ids.iter().map(|&id| item(id, (id % 28 + 1) as i8)).collect(),
            total_count: total,
        }
    }

    #[test]
    fn test_navigate_in_without_payload_lists_page_zero() {
        let mut state = ListState::default();
        let ticket = state.reduce(ListEvent::NavigateIn(None)).unwrap();
        assert_eq!(
            ticket.request,
            FetchRequest::Listing {
                page: 0,
                size: PAGE_SIZE
            }
        );
    }

    #[test]
    fn test_same_payload_is_interpreted_once() {
        let mut state = ListState::default();
        let payload = Some(NavigationPayload::search("umbrella"));
        assert!(state.reduce(ListEvent::NavigateIn(payload.clone())).is_some());
        assert!(state.reduce(ListEvent::NavigateIn(payload)).is_none());
        assert!(
            state
                .reduce(ListEvent::NavigateIn(Some(NavigationPayload::search("keys"))))
                .is_some()
        );
    }

    #[test]
    fn test_search_payload_with_category_uses_search_endpoint() {
        let mut state = ListState::default();
        let payload = NavigationPayload {
            search_query: Some("black wallet subway".into()),
            category: Some(Category::Wallet),
            ..Default::default()
        };
        let ticket = state.reduce(ListEvent::NavigateIn(Some(payload))).unwrap();
        assert_eq!(
            ticket.request,
            FetchRequest::Search {
                query: "black wallet subway".into(),
                page: 0,
                size: PAGE_SIZE,
                refinements: Some(Refinements {
                    category: Some(Category::Wallet),
                    ..Default::default()
                }),
            }
        );
        // committed state mirrors the payload so the panel pre-fills
        assert_eq!(state.query.filters.category, Some(Category::Wallet));
        assert_eq!(state.mode(), Mode::Searching);
    }

    #[test]
    fn test_confirm_two_locations_with_twenty_minutes() {
        let mut state = ListState::default();
        state.reduce(ListEvent::NavigateIn(None));
        state.reduce(ListEvent::OpenFilter);
        state.reduce(ListEvent::EditFilter(FilterEdit::Set(
            DraftField::Location(0),
            "Gangnam Station".into(),
        )));
        state.reduce(ListEvent::EditFilter(FilterEdit::AddLocation));
        state.reduce(ListEvent::EditFilter(FilterEdit::Set(
            DraftField::Location(1),
            "Hongik Univ Station".into(),
        )));
        state.reduce(ListEvent::EditFilter(FilterEdit::Set(
            DraftField::Distance,
            "20".into(),
        )));

        let ticket = state.reduce(ListEvent::ConfirmFilter).unwrap();
        let FetchRequest::Filter { refinements, page, .. } = ticket.request else {
            panic!("expected a filter request");
        };
        assert_eq!(page, 0);
        assert_eq!(refinements.location, None);
        assert_eq!(
            refinements.locations,
            Some(vec![
                "Gangnam Station".to_string(),
                "Hongik Univ Station".to_string()
            ])
        );
        assert_eq!(refinements.radius, Some(15_000));
        assert!(!state.filter_panel.is_open());
    }

    #[test]
    fn test_confirm_all_empty_draft_is_plain_listing() {
        let mut state = ListState::default();
        state.reduce(ListEvent::OpenFilter);
        state.reduce(ListEvent::EditFilter(FilterEdit::Set(
            DraftField::Brand,
            "   ".into(),
        )));
        let ticket = state.reduce(ListEvent::ConfirmFilter).unwrap();
        assert_eq!(
            ticket.request,
            FetchRequest::Listing {
                page: 0,
                size: PAGE_SIZE
            }
        );
    }

    #[test]
    fn test_confirm_with_search_committed_refines_search() {
        let mut state = ListState::default();
        state.reduce(ListEvent::SubmitSearch("airpods".into()));
        state.reduce(ListEvent::OpenFilter);
        state.reduce(ListEvent::EditFilter(FilterEdit::Set(
            DraftField::Brand,
            "Apple".into(),
        )));
        let ticket = state.reduce(ListEvent::ConfirmFilter).unwrap();
        assert!(matches!(
            ticket.request,
            FetchRequest::Search {
                refinements: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_cancel_filter_does_not_fetch_or_commit() {
        let mut state = ListState::default();
        state.reduce(ListEvent::OpenFilter);
        state.reduce(ListEvent::EditFilter(FilterEdit::Set(
            DraftField::Category,
            "PHONE".into(),
        )));
        assert!(state.reduce(ListEvent::CancelFilter).is_none());
        assert_eq!(state.query.filters.category, None);
    }

    #[test]
    fn test_invalid_draft_keeps_panel_open_without_fetch() {
        let mut state = ListState::default();
        state.reduce(ListEvent::OpenFilter);
        state.reduce(ListEvent::EditFilter(FilterEdit::Set(
            DraftField::FoundAfter,
            "yesterday".into(),
        )));
        assert!(state.reduce(ListEvent::ConfirmFilter).is_none());
        assert!(state.filter_panel.is_open());
        assert!(state.filter_panel.error.is_some());
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut state = ListState::default();
        state.reduce(ListEvent::OpenFilter);
        state.reduce(ListEvent::EditFilter(FilterEdit::FocusNext));
        for c in "Seoul".chars() {
            state.reduce(ListEvent::EditFilter(FilterEdit::PushChar(c)));
        }
        state.reduce(ListEvent::EditFilter(FilterEdit::PopChar));
        let draft = state.filter_panel.draft().unwrap();
        assert_eq!(draft.locations, vec!["Seou".to_string()]);
    }

    #[test]
    fn test_next_disabled_on_last_page() {
        let mut state = ListState::default();
        let ticket = state.reduce(ListEvent::ChangePage(2)).unwrap();
        state.apply(ticket.seq, Ok(page_of(&[41, 42, 43, 44, 45], 45)));

        assert_eq!(state.page().total_pages, 3);
        let pagination = state.pagination();
        assert_eq!(pagination.current, 2);
        assert!(!pagination.next_enabled);
        assert!(state.reduce(ListEvent::NextPage).is_none());
        assert!(state.reduce(ListEvent::ChangePage(3)).is_none());

        let prev = state.reduce(ListEvent::PrevPage).unwrap();
        assert_eq!(prev.request.page(), 1);
    }

    #[test]
    fn test_failed_fetch_keeps_items_and_retry_repeats_request() {
        let mut state = ListState::default();
        let first = state.reduce(ListEvent::NavigateIn(None)).unwrap();
        state.apply(first.seq, Ok(page_of(&[1, 2, 3, 4, 5], 5)));

        let search = state.reduce(ListEvent::SubmitSearch("phone".into())).unwrap();
        state.apply(
            search.seq,
            Err(LostFoundError::Api {
                status: 503,
                message: "unavailable".into(),
            }),
        );

        assert_eq!(state.presented().len(), 5);
        assert!(state.error().unwrap().retryable);

        let retry = state.reduce(ListEvent::Retry).unwrap();
        assert_eq!(retry.request, search.request);
    }

    #[test]
    fn test_search_results_ignore_sort_selection() {
        let mut state = ListState::new(SortOption::Newest, ViewMode::List);
        let ticket = state.reduce(ListEvent::SubmitSearch("bag".into())).unwrap();
        state.apply(ticket.seq, Ok(page_of(&[3, 9, 1], 3)));

        let ids: Vec<u64> = state.presented().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 9, 1]);

        state.reduce(ListEvent::SetSort(SortOption::Similarity));
        let ids: Vec<u64> = state.presented().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 9, 1]);
    }

    #[test]
    fn test_listing_results_sorted_newest_first() {
        let mut state = ListState::default();
        let ticket = state.reduce(ListEvent::NavigateIn(None)).unwrap();
        state.apply(ticket.seq, Ok(page_of(&[3, 9, 1], 3)));
        let ids: Vec<u64> = state.presented().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![9, 3, 1]);
    }

    #[test]
    fn test_invalid_navigation_payload_falls_back_to_listing() {
        let mut state = ListState::default();
        let payload = NavigationPayload {
            location: Some("Seoul".into()),
            distance: Some(45),
            ..Default::default()
        };
        let ticket = state.reduce(ListEvent::NavigateIn(Some(payload))).unwrap();
        assert_eq!(ticket.request.mode(), Mode::Listing);
        assert!(state.notice.is_some());
    }
}
