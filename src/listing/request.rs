//! Request payloads for the three listing endpoints.
//!
//! Exactly one endpoint is chosen per fetch, based on the [`Mode`] of the
//! committed query.

use jiff::civil::Date;
use serde::Serialize;

use crate::types::{Category, PAGE_SIZE};

use super::query::{FilterFields, ListQuery, Mode};

/// Filter parameters as sent on the wire.
///
/// A single location goes out as `location`; two or more go out as
/// `locations` sharing one `radius`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Refinements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_date_after: Option<Date>,
}

impl Refinements {
    /// Wire form of the filter fields, or `None` when no field is present
    pub fn from_filters(filters: &FilterFields) -> Option<Self> {
        if !filters.has_any() {
            return None;
        }

        let (location, locations) = match filters.locations.as_slice() {
            [] => (None, None),
            [single] => (Some(single.clone()), None),
            many => (None, Some(many.to_vec())),
        };
        let radius = if filters.locations.is_empty() {
            None
        } else {
            filters.radius.map(|r| r.distance())
        };

        Some(Self {
            category: filters.category,
            location,
            locations,
            radius,
            brand: filters.brand.clone(),
            found_date_after: filters.found_after,
        })
    }
}

/// One fetch against the item listing backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Listing {
        page: u32,
        size: u32,
    },
    Search {
        query: String,
        page: u32,
        size: u32,
        /// Present only when at least one refinement is set
        refinements: Option<Refinements>,
    },
    Filter {
        refinements: Refinements,
        page: u32,
        size: u32,
    },
}

impl FetchRequest {
    /// Request for `page` of the committed query
    pub fn for_query(query: &ListQuery, page: u32) -> Self {
        match query.mode() {
            Mode::Listing => FetchRequest::Listing {
                page,
                size: PAGE_SIZE,
            },
            Mode::Searching => FetchRequest::Search {
                query: query.search_text.trim().to_string(),
                page,
                size: PAGE_SIZE,
                refinements: Refinements::from_filters(&query.filters),
            },
            Mode::Filtering => match Refinements::from_filters(&query.filters) {
                Some(refinements) => FetchRequest::Filter {
                    refinements,
                    page,
                    size: PAGE_SIZE,
                },
                None => FetchRequest::Listing {
                    page,
                    size: PAGE_SIZE,
                },
            },
        }
    }

    pub fn page(&self) -> u32 {
        match self {
            FetchRequest::Listing { page, .. }
            | FetchRequest::Search { page, .. }
            | FetchRequest::Filter { page, .. } => *page,
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            FetchRequest::Listing { .. } => Mode::Listing,
            FetchRequest::Search { .. } => Mode::Searching,
            FetchRequest::Filter { .. } => Mode::Filtering,
        }
    }
}

/// JSON body of a refined search
#[derive(Debug, Serialize)]
pub struct SearchBody<'a> {
    pub query: &'a str,
    pub page: u32,
    pub size: u32,
    #[serde(flatten)]
    pub refinements: &'a Refinements,
}

/// JSON body of a filter request
#[derive(Debug, Serialize)]
pub struct FilterBody<'a> {
    #[serde(flatten)]
    pub refinements: &'a Refinements,
    pub page: u32,
    pub size: u32,
}
