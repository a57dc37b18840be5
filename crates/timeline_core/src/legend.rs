//! Legend entries mirroring the active category set.

use crate::filter::active_set::ActiveCategorySet;
use crate::model::category::CategoryMap;
use serde::Serialize;

/// Hover hint shown on every legend entry.
pub const LEGEND_HINT: &str = "Click to toggle, Double-click to show only this";

/// One clickable legend entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
    pub color: String,
    /// `true` when the category is not in the active set.
    pub inactive: bool,
}

/// Builds legend entries in category order.
pub fn build_legend(categories: &CategoryMap, active: &ActiveCategorySet) -> Vec<LegendEntry> {
    categories
        .iter()
        .map(|(key, category)| LegendEntry {
            key: key.clone(),
            label: category.label.clone(),
            color: category.color.clone(),
            inactive: !active.contains(key),
        })
        .collect()
}

/// Re-syncs every entry's inactive flag from `active`.
pub fn sync_legend(entries: &mut [LegendEntry], active: &ActiveCategorySet) {
    for entry in entries {
        entry.inactive = !active.contains(&entry.key);
    }
}
