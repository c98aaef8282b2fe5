//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common patterns
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add h/l and 1-5 for paging
    pub fn with_paging(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("h/l", "Prev/Next Page"));
        self.shortcuts.push(Shortcut::new("1-5", "Go to Page"));
        self
    }

    /// Add / for search, x to clear it
    pub fn with_search(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("/", "Search"));
        self.shortcuts.push(Shortcut::new("x", "Clear Search"));
        self
    }

    /// Add q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    /// Add a single custom shortcut
    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    /// Build the shortcuts vector
    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().with_paging().build();

        assert_eq!(shortcuts.len(), 2);
        assert!(shortcuts.iter().any(|s| s.key == "h/l"));
        assert!(shortcuts.iter().any(|s| s.key == "1-5"));
    }

    #[test]
    fn test_builder_keeps_insertion_order() {
        let shortcuts = ShortcutsBuilder::new()
            .with_search()
            .add("f", "Filters")
            .with_quit()
            .build();

        let keys: Vec<_> = shortcuts.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["/", "x", "f", "q"]);
    }

    #[test]
    fn test_empty_shortcuts() {
        let shortcuts = ShortcutsBuilder::new().build();

        assert_eq!(shortcuts.len(), 0);
    }
}
