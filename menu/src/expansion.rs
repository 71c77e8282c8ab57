use std::collections::HashSet;

use crate::items::Category;

/// Which menu sections are open in the listing. Presentational only.
///
/// Tags are plain strings: an unknown tag is tracked as a fresh, independent entry
/// rather than rejected.
#[derive(Debug, Clone)]
pub struct CategoryExpansion {
    expanded: HashSet<String>,
}

impl Default for CategoryExpansion {
    /// The page loads with the kebab section open.
    fn default() -> Self {
        Self {
            expanded: HashSet::from([Category::Kebab.tag().to_string()]),
        }
    }
}

impl CategoryExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, tag: &str) -> bool {
        self.expanded.contains(tag)
    }

    /// Removes `tag` from the set if present, otherwise adds it.
    pub fn toggle(&mut self, tag: &str) {
        if !self.expanded.remove(tag) {
            self.expanded.insert(tag.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_starts_expanded() {
        let expansion = CategoryExpansion::new();

        assert!(expansion.is_expanded("kebab"));
        assert!(!expansion.is_expanded("burger"));
    }

    #[test]
    fn test_toggle_twice_is_an_involution() {
        let mut expansion = CategoryExpansion::new();

        for tag in ["kebab", "burger"] {
            let before = expansion.is_expanded(tag);
            expansion.toggle(tag);
            expansion.toggle(tag);
            assert_eq!(expansion.is_expanded(tag), before);
        }
    }

    #[test]
    fn test_unknown_tag_tracked_independently() {
        let mut expansion = CategoryExpansion::new();

        expansion.toggle("dessert");

        assert!(expansion.is_expanded("dessert"));
        assert!(expansion.is_expanded("kebab"));
    }
}
