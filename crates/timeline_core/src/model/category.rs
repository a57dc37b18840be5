//! Category records used for legend grouping and filtering.

use crate::model::payload::display_text;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Lookup key referenced by `Event::category`.
pub type CategoryKey = String;

/// Categories keyed by `CategoryKey`, in payload order.
///
/// Payload order is the legend order, so a plain hash map is not enough here.
pub type CategoryMap = IndexMap<CategoryKey, Category>;

/// Display metadata for one category.
///
/// `color` is only used for visual tagging; no filter or layout logic reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, deserialize_with = "display_text")]
    pub label: String,
    #[serde(default, deserialize_with = "display_text")]
    pub color: String,
}

impl Category {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}
