//! Theme system for TUI colors and styles
//!
//! Category and status colors match the CLI output in `display`.

use iocraft::prelude::Color;

use crate::types::{Category, ItemStatus};

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Category colors
    pub category_personal: Color,
    pub category_device: Color,
    pub category_paper: Color,
    pub category_wearable: Color,
    pub category_other: Color,

    // Item status colors
    pub status_registered: Color,
    pub status_pending: Color,
    pub status_returned: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub id_color: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            category_personal: Color::Yellow,
            category_device: Color::Cyan,
            category_paper: Color::Blue,
            category_wearable: Color::Magenta,
            category_other: GRAY,

            status_registered: Color::Green,
            status_pending: Color::Yellow,
            status_returned: GRAY,

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            id_color: Color::Cyan,
            error: Color::Red,
        }
    }
}

impl Theme {
    /// Color for an item category
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Wallet | Category::Bag | Category::Key => self.category_personal,
            Category::Phone | Category::Electronics => self.category_device,
            Category::Card | Category::Document => self.category_paper,
            Category::Clothing | Category::Jewelry => self.category_wearable,
            Category::Other => self.category_other,
        }
    }

    /// Color for an item status; unknown statuses are dimmed
    pub fn status_color(&self, status: &ItemStatus) -> Color {
        match status {
            ItemStatus::Registered => self.status_registered,
            ItemStatus::ClaimPending => self.status_pending,
            ItemStatus::Returned => self.status_returned,
            ItemStatus::Unknown(_) => self.text_dimmed,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_colors_group_related_items() {
        let theme = theme();
        assert_eq!(
            theme.category_color(Category::Phone),
            theme.category_color(Category::Electronics)
        );
        assert_eq!(theme.category_color(Category::Other), GRAY);
    }

    #[test]
    fn test_unknown_status_is_dimmed() {
        let theme = theme();
        assert_eq!(
            theme.status_color(&ItemStatus::Unknown("LOST".into())),
            theme.text_dimmed
        );
    }
}
