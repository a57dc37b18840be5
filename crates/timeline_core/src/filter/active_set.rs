//! Active category set and the legend toggle state machine.
//!
//! # Invariants
//! - Only known category keys can ever become active.
//! - Double-click always lands on either "solo on k" or "all known".

use crate::model::category::CategoryKey;
use std::collections::BTreeSet;

/// Result of a legend double-click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleClickOutcome {
    /// Only the clicked category is active now.
    Solo,
    /// The clicked category was already solo; every known category is active again.
    Restored,
}

/// Set of category keys currently eligible for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveCategorySet {
    known: Vec<CategoryKey>,
    active: BTreeSet<CategoryKey>,
}

impl ActiveCategorySet {
    /// Creates a set with every known key active.
    pub fn all<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<CategoryKey>,
    {
        let mut known = Vec::new();
        for key in keys {
            let key = key.into();
            if !known.contains(&key) {
                known.push(key);
            }
        }
        let active = known.iter().cloned().collect();
        Self { known, active }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.active.contains(key)
    }

    pub fn is_known(&self, key: &str) -> bool {
        self.known.iter().any(|known| known == key)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns whether every known category is active.
    pub fn is_all(&self) -> bool {
        self.active.len() == self.known.len()
    }

    /// Returns whether `key` is the only active category.
    pub fn is_solo(&self, key: &str) -> bool {
        self.active.len() == 1 && self.active.contains(key)
    }

    /// Known keys in payload order.
    pub fn known_keys(&self) -> &[CategoryKey] {
        &self.known
    }

    /// Active keys in payload order.
    pub fn active_keys(&self) -> impl Iterator<Item = &CategoryKey> + '_ {
        self.known.iter().filter(|key| self.active.contains(key.as_str()))
    }

    /// Single click: flips `key` and leaves every other key alone.
    ///
    /// Returns the new state of `key`, or `None` when the key is unknown.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        if !self.is_known(key) {
            return None;
        }

        if self.active.remove(key) {
            Some(false)
        } else {
            self.active.insert(key.to_string());
            Some(true)
        }
    }

    /// Double click: solo `key`, or restore all when `key` is already solo.
    ///
    /// Returns `None` when the key is unknown.
    pub fn solo_or_restore(&mut self, key: &str) -> Option<DoubleClickOutcome> {
        if !self.is_known(key) {
            return None;
        }

        if self.is_solo(key) {
            self.active = self.known.iter().cloned().collect();
            Some(DoubleClickOutcome::Restored)
        } else {
            self.active.clear();
            self.active.insert(key.to_string());
            Some(DoubleClickOutcome::Solo)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ActiveCategorySet, DoubleClickOutcome};

    fn set() -> ActiveCategorySet {
        ActiveCategorySet::all(["war", "culture", "science"])
    }

    #[test]
    fn starts_with_every_known_key() {
        let set = set();
        assert!(set.is_all());
        assert_eq!(set.len(), 3);
        assert!(set.contains("culture"));
    }

    #[test]
    fn duplicate_keys_are_collapsed() {
        let set = ActiveCategorySet::all(["a", "b", "a"]);
        assert_eq!(set.known_keys(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn toggle_flips_only_the_clicked_key() {
        let mut set = set();
        assert_eq!(set.toggle("war"), Some(false));
        assert!(!set.contains("war"));
        assert!(set.contains("culture"));
        assert!(set.contains("science"));

        assert_eq!(set.toggle("war"), Some(true));
        assert!(set.is_all());
    }

    #[test]
    fn toggle_can_empty_the_set() {
        let mut set = ActiveCategorySet::all(["a", "b"]);
        set.toggle("a");
        set.toggle("b");
        assert!(set.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut set = set();
        assert_eq!(set.toggle("ghost"), None);
        assert_eq!(set.solo_or_restore("ghost"), None);
        assert!(set.is_all());
    }

    #[test]
    fn double_click_is_an_involution_from_all() {
        let original = set();
        let mut set = original.clone();

        assert_eq!(set.solo_or_restore("culture"), Some(DoubleClickOutcome::Solo));
        assert!(set.is_solo("culture"));

        assert_eq!(
            set.solo_or_restore("culture"),
            Some(DoubleClickOutcome::Restored)
        );
        assert_eq!(set, original);
    }

    #[test]
    fn double_click_from_partial_set_forces_solo() {
        let mut set = set();
        set.toggle("war");
        set.toggle("science");
        assert!(set.is_solo("culture"));

        // Already solo through single clicks, so double-click restores.
        assert_eq!(
            set.solo_or_restore("culture"),
            Some(DoubleClickOutcome::Restored)
        );

        set.toggle("culture");
        assert_eq!(set.solo_or_restore("war"), Some(DoubleClickOutcome::Solo));
        assert_eq!(set.active_keys().collect::<Vec<_>>(), vec!["war"]);
    }
}
