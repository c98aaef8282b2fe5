//! Committed listing state and the fetch mode derived from it.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::LostFoundError;
use crate::types::{Category, MAX_LOCATIONS};

/// Walking-time band around a location, sent to the backend as a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadiusBand {
    TenMinutes,
    TwentyMinutes,
    ThirtyMinutes,
}

impl RadiusBand {
    /// Band for a walking time in minutes. Only 10, 20 and 30 exist.
    pub fn from_minutes(minutes: u32) -> Result<Self, LostFoundError> {
        match minutes {
            10 => Ok(RadiusBand::TenMinutes),
            20 => Ok(RadiusBand::TwentyMinutes),
            30 => Ok(RadiusBand::ThirtyMinutes),
            other => Err(LostFoundError::InvalidRadius(other.to_string())),
        }
    }

    pub fn minutes(&self) -> u32 {
        match self {
            RadiusBand::TenMinutes => 10,
            RadiusBand::TwentyMinutes => 20,
            RadiusBand::ThirtyMinutes => 30,
        }
    }

    /// Distance value the backend expects for this band
    pub fn distance(&self) -> u32 {
        match self {
            RadiusBand::TenMinutes => 10_000,
            RadiusBand::TwentyMinutes => 15_000,
            RadiusBand::ThirtyMinutes => 20_000,
        }
    }
}

impl fmt::Display for RadiusBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes())
    }
}

impl FromStr for RadiusBand {
    type Err = LostFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches("min").trim();
        let minutes: u32 = trimmed
            .parse()
            .map_err(|_| LostFoundError::InvalidRadius(s.to_string()))?;
        RadiusBand::from_minutes(minutes)
    }
}

/// Filter fields of a listing query (everything except the search text)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterFields {
    pub category: Option<Category>,
    pub locations: Vec<String>,
    pub radius: Option<RadiusBand>,
    pub brand: Option<String>,
    pub found_after: Option<Date>,
}

impl FilterFields {
    /// True when at least one field would be sent to the backend.
    ///
    /// A radius with no location is meaningless and does not count.
    pub fn has_any(&self) -> bool {
        self.category.is_some()
            || !self.locations.is_empty()
            || self.brand.is_some()
            || self.found_after.is_some()
    }

    /// Number of active fields, shown as the filter button badge
    pub fn active_count(&self) -> usize {
        let mut count = 0;
        if self.category.is_some() {
            count += 1;
        }
        if !self.locations.is_empty() {
            count += 1;
        }
        if self.radius.is_some() && !self.locations.is_empty() {
            count += 1;
        }
        if self.brand.is_some() {
            count += 1;
        }
        if self.found_after.is_some() {
            count += 1;
        }
        count
    }

    /// Trim strings, drop empties, and cap locations at [`MAX_LOCATIONS`].
    pub fn normalized(mut self) -> Self {
        self.locations = self
            .locations
            .into_iter()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .take(MAX_LOCATIONS)
            .collect();
        self.brand = self
            .brand
            .map(|b| b.trim().to_string())
            .filter(|b| !b.is_empty());
        self
    }
}

/// The committed search + filter state driving the displayed page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search_text: String,
    pub filters: FilterFields,
}

impl ListQuery {
    pub fn mode(&self) -> Mode {
        if !self.search_text.trim().is_empty() {
            Mode::Searching
        } else if self.filters.has_any() {
            Mode::Filtering
        } else {
            Mode::Listing
        }
    }
}

/// Mutually exclusive fetch strategy for the current list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Listing,
    Searching,
    Filtering,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Listing => write!(f, "listing"),
            Mode::Searching => write!(f, "search"),
            Mode::Filtering => write!(f, "filter"),
        }
    }
}
