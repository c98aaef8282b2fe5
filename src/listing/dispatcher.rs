//! Fetch dispatcher
//!
//! Issues one listing request at a time and owns the currently displayed
//! [`Page`]. Each issued request gets a sequence number; only the response to
//! the most recently issued request is applied, so a slow earlier response
//! can never overwrite a newer one.

use crate::api::ItemSource;
use crate::error::{LostFoundError, Result};
use crate::types::{Item, PAGE_SIZE, PageResponse};

use super::query::Mode;
use super::request::FetchRequest;

/// The page currently on screen. Replaced wholesale on every successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<Item>,
    pub total_count: u64,
    pub total_pages: u32,
    /// 0-based page index
    pub page: u32,
    /// Mode of the request that produced these items
    pub mode: Mode,
}

impl Page {
    fn from_response(response: PageResponse, request: &FetchRequest) -> Self {
        Self {
            total_pages: total_pages(response.total_count),
            total_count: response.total_count,
            items: response.items,
            page: request.page(),
            mode: request.mode(),
        }
    }
}

/// `ceil(total / PAGE_SIZE)`
pub fn total_pages(total_count: u64) -> u32 {
    total_count.div_ceil(PAGE_SIZE as u64) as u32
}

/// A request handed out by the dispatcher, to be executed and applied back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub request: FetchRequest,
}

/// Error state shown as a banner over the (preserved) previous page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub message: String,
    pub retryable: bool,
    pub unauthorized: bool,
}

impl From<&LostFoundError> for FetchFailure {
    fn from(error: &LostFoundError) -> Self {
        Self {
            message: error.to_string(),
            retryable: error.is_retryable(),
            unauthorized: matches!(error, LostFoundError::Unauthorized),
        }
    }
}

/// What happened to a response handed to [`FetchDispatcher::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    Failed,
    /// A newer request was issued after this one; the response was dropped
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct FetchDispatcher {
    last_seq: u64,
    last_request: Option<FetchRequest>,
    page: Page,
    loading: bool,
    error: Option<FetchFailure>,
}

impl FetchDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request. Any response still in flight becomes stale.
    pub fn issue(&mut self, request: FetchRequest) -> FetchTicket {
        self.last_seq += 1;
        self.last_request = Some(request.clone());
        self.loading = true;
        FetchTicket {
            seq: self.last_seq,
            request,
        }
    }

    /// Re-issue the last request with identical parameters.
    pub fn retry(&mut self) -> Option<FetchTicket> {
        let request = self.last_request.clone()?;
        Some(self.issue(request))
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.last_seq
    }

    /// Apply the outcome of the request with sequence number `seq`.
    ///
    /// On failure the previous items stay visible and the error is recorded.
    pub fn apply(&mut self, seq: u64, result: Result<PageResponse>) -> ApplyOutcome {
        if !self.is_latest(seq) {
            tracing::debug!(seq, latest = self.last_seq, "dropping stale listing response");
            return ApplyOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(response) => {
                let Some(request) = self.last_request.as_ref() else {
                    return ApplyOutcome::Stale;
                };
                self.page = Page::from_response(response, request);
                self.error = None;
                ApplyOutcome::Applied
            }
            Err(e) => {
                tracing::warn!("listing fetch failed: {e}");
                self.error = Some(FetchFailure::from(&e));
                ApplyOutcome::Failed
            }
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&FetchFailure> {
        self.error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn last_request(&self) -> Option<&FetchRequest> {
        self.last_request.as_ref()
    }
}

/// Execute a request against exactly one backend endpoint.
pub async fn execute<S>(source: &S, request: &FetchRequest) -> Result<PageResponse>
where
    S: ItemSource + ?Sized,
{
    match request {
        FetchRequest::Listing { page, size } => source.list_items(*page, *size).await,
        FetchRequest::Search {
            query,
            page,
            size,
            refinements,
        } => {
            source
                .search_items(query, *page, *size, refinements.as_ref())
                .await
        }
        FetchRequest::Filter {
            refinements,
            page,
            size,
        } => source.filter_items(refinements, *page, *size).await,
    }
}
