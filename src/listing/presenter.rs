//! Result presenter: final ordering pass and pagination controls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LostFoundError;
use crate::types::Item;

use super::query::Mode;

/// Maximum number of page-number buttons rendered
pub const MAX_PAGE_BUTTONS: u32 = 5;

/// User-selected ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    /// Found date, most recent first
    #[default]
    Newest,
    /// Relevance ranking; only the search endpoint produces one
    Similarity,
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::Newest => write!(f, "newest"),
            SortOption::Similarity => write!(f, "similarity"),
        }
    }
}

impl FromStr for SortOption {
    type Err = LostFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(SortOption::Newest),
            "similarity" => Ok(SortOption::Similarity),
            _ => Err(LostFoundError::validation(
                "sort",
                format!("unknown sort '{s}', expected 'newest' or 'similarity'"),
            )),
        }
    }
}

impl SortOption {
    pub fn next(self) -> Self {
        match self {
            SortOption::Newest => SortOption::Similarity,
            SortOption::Similarity => SortOption::Newest,
        }
    }
}

/// Ordering actually applied to the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    /// Server order, untouched
    Server,
    /// Found date descending
    NewestFirst,
}

/// Resolve the ordering for a mode/sort pair.
///
/// Search results keep the server's ranking no matter what is selected.
/// Outside search there is no similarity ranking to show, so "similarity"
/// resolves to newest-first.
pub fn effective_ordering(mode: Mode, sort: SortOption) -> Ordering {
    match (mode, sort) {
        (Mode::Searching, _) => Ordering::Server,
        (_, SortOption::Newest) | (_, SortOption::Similarity) => Ordering::NewestFirst,
    }
}

/// Items in display order
pub fn present<'a>(items: &'a [Item], mode: Mode, sort: SortOption) -> Vec<&'a Item> {
    let mut presented: Vec<&Item> = items.iter().collect();
    if effective_ordering(mode, sort) == Ordering::NewestFirst {
        // Stable: equal dates keep their server order.
        presented.sort_by(|a, b| b.found_date.cmp(&a.found_date));
    }
    presented
}

/// Grid or list layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Grid => write!(f, "grid"),
            ViewMode::List => write!(f, "list"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = LostFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(LostFoundError::validation(
                "view",
                format!("unknown view '{s}', expected 'grid' or 'list'"),
            )),
        }
    }
}

/// Split presented items into grid rows
pub fn grid_rows<'a>(items: &[&'a Item], columns: usize) -> Vec<Vec<&'a Item>> {
    items
        .chunks(columns.max(1))
        .map(|row| row.to_vec())
        .collect()
}

/// Pagination controls for the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// 0-based page indices that get a button
    pub buttons: Vec<u32>,
    pub current: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl Pagination {
    /// At most [`MAX_PAGE_BUTTONS`] buttons, always the first pages.
    /// Pages beyond them are reachable with next/prev only.
    pub fn new(current: u32, total_pages: u32) -> Self {
        Self {
            buttons: (0..total_pages.min(MAX_PAGE_BUTTONS)).collect(),
            current,
            prev_enabled: current > 0,
            next_enabled: current + 1 < total_pages,
        }
    }

    /// One-line rendering, e.g. `‹ [1] 2 3 ›`; disabled arrows are blanked.
    pub fn render(&self) -> String {
        let mut parts = Vec::with_capacity(self.buttons.len() + 2);
        parts.push(if self.prev_enabled { "‹" } else { " " }.to_string());
        for &page in &self.buttons {
            if page == self.current {
                parts.push(format!("[{}]", page + 1));
            } else {
                parts.push((page + 1).to_string());
            }
        }
        parts.push(if self.next_enabled { "›" } else { " " }.to_string());
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use jiff::civil::date;

    fn item(id: u64, found: jiff::civil::Date) -> Item {
        Item {
            id,
            name: format!("item {id}"),
            category: Category::Wallet,
            description: String::new(),
            found_date: found,
            location: "Seoul".into(),
            image_url: None,
            status: None,
            brand: None,
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            item(1, date(2024, 1, 3)),
            item(2, date(2024, 5, 1)),
            item(3, date(2023, 12, 25)),
            item(4, date(2024, 5, 1)),
        ]
    }

    fn ids(items: &[&Item]) -> Vec<u64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_search_mode_keeps_server_order_for_any_sort() {
        let items = sample();
        for sort in [SortOption::Newest, SortOption::Similarity] {
            assert_eq!(ids(&present(&items, Mode::Searching, sort)), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_newest_is_non_increasing_in_found_date() {
        let items = sample();
        for mode in [Mode::Listing, Mode::Filtering] {
            let presented = present(&items, mode, SortOption::Newest);
            assert!(
                presented
                    .windows(2)
                    .all(|w| w[0].found_date >= w[1].found_date)
            );
            // stable for equal dates
            assert_eq!(ids(&presented), vec![2, 4, 1, 3]);
        }
    }

    #[test]
    fn test_similarity_outside_search_falls_back_to_newest() {
        assert_eq!(
            effective_ordering(Mode::Filtering, SortOption::Similarity),
            Ordering::NewestFirst
        );
        let items = sample();
        assert_eq!(
            ids(&present(&items, Mode::Listing, SortOption::Similarity)),
            vec![2, 4, 1, 3]
        );
    }

    #[test]
    fn test_pagination_caps_buttons_at_five() {
        let p = Pagination::new(7, 12);
        assert_eq!(p.buttons, vec![0, 1, 2, 3, 4]);
        assert!(p.prev_enabled);
        assert!(p.next_enabled);
    }

    #[test]
    fn test_pagination_disables_arrows_at_edges() {
        let first = Pagination::new(0, 3);
        assert!(!first.prev_enabled);
        assert!(first.next_enabled);

        let last = Pagination::new(2, 3);
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);

        let empty = Pagination::new(0, 0);
        assert!(empty.buttons.is_empty());
        assert!(!empty.prev_enabled && !empty.next_enabled);
    }

    #[test]
    fn test_pagination_render() {
        insta::assert_snapshot!(Pagination::new(1, 3).render(), @"‹ 1 [2] 3 ›");
    }

    #[test]
    fn test_grid_rows() {
        let items = sample();
        let presented = present(&items, Mode::Searching, SortOption::Newest);
        let rows = grid_rows(&presented, 3);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn test_grid_rows_keep_presented_order() {
        let items = sample();
        let presented = present(&items, Mode::Listing, SortOption::Newest);

        // Single column is the list layout; zero columns is clamped to one
        for columns in [0, 1, 2] {
            let flattened: Vec<u64> = grid_rows(&presented, columns)
                .into_iter()
                .flatten()
                .map(|i| i.id)
                .collect();
            let expected: Vec<u64> = presented.iter().map(|i| i.id).collect();
            assert_eq!(flattened, expected);
        }
        assert!(grid_rows(&presented, 1).iter().all(|row| row.len() == 1));
    }
}
