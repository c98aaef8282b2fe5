//! Filter draft buffer
//!
//! Holds in-progress edits to the filter fields while the filter panel is
//! open. The draft owns plain strings copied out of the committed
//! [`FilterFields`]; nothing written here is visible in the committed state
//! until [`FilterPanel::confirm`] returns the parsed fields.

use jiff::civil::Date;

use crate::error::{LostFoundError, Result};
use crate::types::{Category, MAX_LOCATIONS};

use super::query::{FilterFields, RadiusBand};

/// Addressable field of the draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Category,
    Location(usize),
    Distance,
    Brand,
    FoundAfter,
}

impl DraftField {
    pub fn label(&self) -> String {
        match self {
            DraftField::Category => "Category".to_string(),
            DraftField::Location(i) => format!("Location {}", i + 1),
            DraftField::Distance => "Walking distance".to_string(),
            DraftField::Brand => "Brand".to_string(),
            DraftField::FoundAfter => "Found after".to_string(),
        }
    }
}

/// Raw form values of the filter panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterDraft {
    pub category: String,
    /// Always 1..=3 entries; a lone empty string is the placeholder
    pub locations: Vec<String>,
    /// Walking minutes as typed: "", "10", "20" or "30"
    pub distance: String,
    pub brand: String,
    pub found_after: String,
}

impl Default for FilterDraft {
    fn default() -> Self {
        Self {
            category: String::new(),
            locations: vec![String::new()],
            distance: String::new(),
            brand: String::new(),
            found_after: String::new(),
        }
    }
}

impl FilterDraft {
    /// Fresh copy of the committed fields
    pub fn from_committed(committed: &FilterFields) -> Self {
        let mut locations: Vec<String> = committed
            .locations
            .iter()
            .take(MAX_LOCATIONS)
            .cloned()
            .collect();
        if locations.is_empty() {
            locations.push(String::new());
        }

        Self {
            category: committed
                .category
                .map(|c| c.to_string())
                .unwrap_or_default(),
            locations,
            distance: committed
                .radius
                .map(|r| r.minutes().to_string())
                .unwrap_or_default(),
            brand: committed.brand.clone().unwrap_or_default(),
            found_after: committed
                .found_after
                .map(|d| d.to_string())
                .unwrap_or_default(),
        }
    }

    /// Fields in panel order, one entry per location slot
    pub fn fields(&self) -> Vec<DraftField> {
        let mut fields = vec![DraftField::Category];
        fields.extend((0..self.locations.len()).map(DraftField::Location));
        fields.extend([DraftField::Distance, DraftField::Brand, DraftField::FoundAfter]);
        fields
    }

    pub fn value(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Category => Some(&self.category),
            DraftField::Location(i) => self.locations.get(i).map(String::as_str),
            DraftField::Distance => Some(&self.distance),
            DraftField::Brand => Some(&self.brand),
            DraftField::FoundAfter => Some(&self.found_after),
        }
    }

    fn slot_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Category => Some(&mut self.category),
            DraftField::Location(i) => self.locations.get_mut(i),
            DraftField::Distance => Some(&mut self.distance),
            DraftField::Brand => Some(&mut self.brand),
            DraftField::FoundAfter => Some(&mut self.found_after),
        }
    }

    /// Replace one field. Returns false for a location slot that doesn't exist.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) -> bool {
        match self.slot_mut(field) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// Append a character to a field (keyboard editing)
    pub fn push_char(&mut self, field: DraftField, c: char) {
        if let Some(slot) = self.slot_mut(field) {
            slot.push(c);
        }
    }

    /// Remove the last character of a field (keyboard editing)
    pub fn pop_char(&mut self, field: DraftField) {
        if let Some(slot) = self.slot_mut(field) {
            slot.pop();
        }
    }

    /// Add an empty location slot, up to [`MAX_LOCATIONS`].
    pub fn add_location(&mut self) -> bool {
        if self.locations.len() >= MAX_LOCATIONS {
            return false;
        }
        self.locations.push(String::new());
        true
    }

    /// Remove a location slot. The last remaining slot is cleared, never removed.
    pub fn remove_location(&mut self, index: usize) -> bool {
        if index >= self.locations.len() {
            return false;
        }
        if self.locations.len() == 1 {
            self.locations[0].clear();
        } else {
            self.locations.remove(index);
        }
        true
    }

    /// Parse the form into committed filter fields.
    ///
    /// Strings are trimmed and empty strings mean "unset".
    pub fn parse(&self) -> Result<FilterFields> {
        self.parse_fields().map_err(|(_, e)| e)
    }

    /// Like [`parse`](Self::parse), but a failure names the offending field.
    fn parse_fields(&self) -> std::result::Result<FilterFields, (DraftField, LostFoundError)> {
        let category = match self.category.trim() {
            "" => None,
            raw => Some(
                raw.parse::<Category>()
                    .map_err(|e| (DraftField::Category, e))?,
            ),
        };

        let radius = match self.distance.trim() {
            "" => None,
            raw => Some(
                raw.parse::<RadiusBand>()
                    .map_err(|e| (DraftField::Distance, e))?,
            ),
        };

        let found_after = match self.found_after.trim() {
            "" => None,
            raw => Some(raw.parse::<Date>().map_err(|_| {
                (
                    DraftField::FoundAfter,
                    LostFoundError::InvalidDate(raw.to_string()),
                )
            })?),
        };

        let brand = Some(self.brand.clone());

        Ok(FilterFields {
            category,
            locations: self.locations.clone(),
            radius,
            brand,
            found_after,
        }
        .normalized())
    }
}

/// Validation message attached to one row of the filter panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: DraftField,
    pub message: String,
}

/// Filter modal: the draft plus panel-local UI state
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    draft: Option<FilterDraft>,
    /// Index into [`FilterDraft::fields`]
    pub focused: usize,
    /// Inline validation error, shown on the offending row
    pub error: Option<FieldError>,
}

impl FilterPanel {
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft(&self) -> Option<&FilterDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut FilterDraft> {
        self.draft.as_mut()
    }

    /// Copy the committed fields into a fresh draft and show the panel.
    pub fn open(&mut self, committed: &FilterFields) {
        self.draft = Some(FilterDraft::from_committed(committed));
        self.focused = 0;
        self.error = None;
    }

    pub fn focused_field(&self) -> Option<DraftField> {
        self.draft
            .as_ref()
            .and_then(|d| d.fields().get(self.focused).copied())
    }

    pub fn focus_next(&mut self) {
        if let Some(draft) = &self.draft {
            self.focused = (self.focused + 1) % draft.fields().len();
        }
    }

    pub fn focus_prev(&mut self) {
        if let Some(draft) = &self.draft {
            let len = draft.fields().len();
            self.focused = (self.focused + len - 1) % len;
        }
    }

    pub fn add_location(&mut self) -> bool {
        self.draft.as_mut().is_some_and(FilterDraft::add_location)
    }

    pub fn remove_location(&mut self, index: usize) -> bool {
        let removed = self
            .draft
            .as_mut()
            .is_some_and(|d| d.remove_location(index));
        if let Some(draft) = &self.draft {
            self.focused = self.focused.min(draft.fields().len() - 1);
        }
        removed
    }

    /// Parse the draft and close the panel.
    ///
    /// Returns `Ok(None)` when the panel was not open. On a validation error
    /// the panel stays open with the error recorded against its field.
    pub fn confirm(&mut self) -> Result<Option<FilterFields>> {
        let Some(draft) = &self.draft else {
            return Ok(None);
        };
        match draft.parse_fields() {
            Ok(fields) => {
                self.draft = None;
                self.error = None;
                Ok(Some(fields))
            }
            Err((field, e)) => {
                self.error = Some(FieldError {
                    field,
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Error message for `field`, if that row failed validation
    pub fn error_for(&self, field: DraftField) -> Option<&str> {
        self.error
            .as_ref()
            .filter(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Discard the draft and close the panel.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.error = None;
        self.focused = 0;
    }
}
