//! Filter and masonry layout engine for a category-filterable era timeline.
//! This crate owns the timeline session state and every filter/layout rule.

pub mod config;
pub mod filter;
pub mod host;
pub mod layout;
pub mod legend;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;
pub mod source;

pub use config::{ConfigError, TimelineConfig};
pub use filter::active_set::{ActiveCategorySet, DoubleClickOutcome};
pub use filter::query::SearchQuery;
pub use filter::visibility::{apply_filter, is_visible, FilterSummary};
pub use host::{MountPoint, TimelineHost};
pub use layout::masonry::{
    layout_section, layout_timeline, place_in_columns, ColumnPlan, ItemPlacement, LayoutParams,
    Measure, SectionHeight, SectionLayout, TimelineLayout, ViewportMode,
};
pub use legend::{build_legend, LegendEntry, LEGEND_HINT};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{Category, CategoryKey, CategoryMap};
pub use model::era::{Era, Event};
pub use model::payload::TimelinePayload;
pub use render::{build_sections, EraSection, TimelineItem};
pub use service::timeline_controller::{
    BootstrapError, BootstrapOutcome, RelayoutSchedule, TimelineController, TimelineEvent,
};
pub use source::loader::{
    load_payload, DataSource, FileSource, LoadError, SourceError, SourceResponse, StaticSource,
};

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
