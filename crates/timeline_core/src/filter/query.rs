//! Search query normalization and matching.

use crate::model::era::Event;

/// Case-insensitive substring query over title, description and year.
///
/// The raw input is trimmed and lower-cased once, at read time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    normalized: String,
}

impl SearchQuery {
    /// Normalizes raw search-box text.
    pub fn from_input(raw: &str) -> Self {
        Self {
            normalized: raw.trim().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Returns whether `event` matches this query.
    ///
    /// Title and description are lower-cased before the substring test. Year
    /// is tested literally against the already lower-cased query.
    pub fn matches(&self, event: &Event) -> bool {
        if self.normalized.is_empty() {
            return true;
        }

        let needle = self.normalized.as_str();
        event.title.to_lowercase().contains(needle)
            || event.description.to_lowercase().contains(needle)
            || event.year.contains(needle)
    }
}
