//! Navigation-state interpreter
//!
//! A page can be entered carrying state from somewhere else ("search for X
//! with filter Y"). The interpreter resolves that payload into the committed
//! [`ListQuery`] for the listing page.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::Category;

use super::query::{FilterFields, ListQuery, RadiusBand};

/// State handed to the listing page on entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationPayload {
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    /// Single-location form
    #[serde(default)]
    pub location: Option<String>,
    /// Multi-location form (up to 3)
    #[serde(default)]
    pub locations: Vec<String>,
    /// Walking minutes: 10, 20 or 30
    #[serde(default)]
    pub distance: Option<u32>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub found_after: Option<Date>,
}

impl NavigationPayload {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..Default::default()
        }
    }
}

/// Resolve an incoming payload into the committed query.
///
/// The fetch mode follows from the result: non-empty search text means
/// searching (filters ride along as refinements), otherwise any filter field
/// means filtering, otherwise plain listing. A distance outside the three
/// bands is rejected.
pub fn interpret(payload: Option<&NavigationPayload>) -> Result<ListQuery> {
    let Some(payload) = payload else {
        return Ok(ListQuery::default());
    };

    let mut locations: Vec<String> = Vec::new();
    if let Some(single) = &payload.location {
        locations.push(single.clone());
    }
    locations.extend(payload.locations.iter().cloned());

    let radius = payload.distance.map(RadiusBand::from_minutes).transpose()?;

    let filters = FilterFields {
        category: payload.category,
        locations,
        radius,
        brand: payload.brand.clone(),
        found_after: payload.found_after,
    }
    .normalized();

    Ok(ListQuery {
        search_text: payload
            .search_query
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        filters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::query::Mode;

    #[test]
    fn test_no_payload_is_listing() {
        let query = interpret(None).unwrap();
        assert_eq!(query, ListQuery::default());
        assert_eq!(query.mode(), Mode::Listing);
    }

    #[test]
    fn test_search_with_category_is_searching() {
        let payload = NavigationPayload {
            search_query: Some("black wallet subway".into()),
            category: Some(Category::Wallet),
            ..Default::default()
        };
        let query = interpret(Some(&payload)).unwrap();
        assert_eq!(query.mode(), Mode::Searching);
        assert_eq!(query.search_text, "black wallet subway");
        assert_eq!(query.filters.category, Some(Category::Wallet));
    }

    #[test]
    fn test_filters_only_is_filtering() {
        let payload = NavigationPayload {
            location: Some("Gangnam Station".into()),
            distance: Some(10),
            ..Default::default()
        };
        let query = interpret(Some(&payload)).unwrap();
        assert_eq!(query.mode(), Mode::Filtering);
        assert_eq!(query.filters.locations, vec!["Gangnam Station"]);
        assert_eq!(query.filters.radius, Some(RadiusBand::TenMinutes));
    }

    #[test]
    fn test_empty_payload_is_listing() {
        let payload = NavigationPayload {
            search_query: Some("   ".into()),
            brand: Some("".into()),
            ..Default::default()
        };
        assert_eq!(interpret(Some(&payload)).unwrap().mode(), Mode::Listing);
    }

    #[test]
    fn test_invalid_distance_is_rejected() {
        let payload = NavigationPayload {
            location: Some("Seoul".into()),
            distance: Some(15),
            ..Default::default()
        };
        assert!(interpret(Some(&payload)).is_err());
    }

    #[test]
    fn test_locations_are_capped_at_three() {
        let payload = NavigationPayload {
            location: Some("A".into()),
            locations: vec!["B".into(), "C".into(), "D".into()],
            ..Default::default()
        };
        let query = interpret(Some(&payload)).unwrap();
        assert_eq!(query.filters.locations, vec!["A", "B", "C"]);
    }
}
