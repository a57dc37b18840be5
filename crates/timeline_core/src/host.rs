//! Host contract: the UI surface the controller drives.
//!
//! # Responsibility
//! - Describe what the engine needs from a page or native UI: mount points,
//!   rendered sizes, and places to push legend, sections and layout.
//!
//! # Invariants
//! - Sections are rendered once per bootstrap; later passes only update
//!   visibility and placement through `apply_layout`.
//! - The host measures; the engine never guesses sizes itself.

use crate::layout::masonry::{Measure, TimelineLayout};
use crate::legend::LegendEntry;
use crate::render::EraSection;

/// UI mount points required before any behavior is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    SearchInput,
    Legend,
    Timeline,
}

impl MountPoint {
    pub const ALL: [MountPoint; 3] = [Self::SearchInput, Self::Legend, Self::Timeline];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SearchInput => "search_input",
            Self::Legend => "legend",
            Self::Timeline => "timeline",
        }
    }
}

/// UI surface driven by [`crate::service::timeline_controller::TimelineController`].
pub trait TimelineHost: Measure {
    fn has_mount_point(&self, mount: MountPoint) -> bool;
    /// Current viewport width in layout pixels.
    fn viewport_width(&self) -> f64;
    /// Replaces the timeline container content with a static message.
    fn show_fallback(&mut self, message: &str);
    /// Creates legend entries, replacing any previous ones.
    fn render_legend(&mut self, entries: &[LegendEntry]);
    /// Updates the active/inactive state of one existing legend entry.
    fn update_legend_entry(&mut self, entry: &LegendEntry);
    /// Creates one block per section and item, replacing previous content.
    fn render_sections(&mut self, sections: &[EraSection]);
    /// Applies visibility, position and section heights.
    fn apply_layout(&mut self, layout: &TimelineLayout);
}

impl<M: Measure + ?Sized> Measure for &mut M {
    fn header_height(&self, section: usize) -> f64 {
        (**self).header_height(section)
    }

    fn item_height(&self, section: usize, item: usize, width_percent: f64) -> f64 {
        (**self).item_height(section, item, width_percent)
    }
}

impl<H: TimelineHost + ?Sized> TimelineHost for &mut H {
    fn has_mount_point(&self, mount: MountPoint) -> bool {
        (**self).has_mount_point(mount)
    }

    fn viewport_width(&self) -> f64 {
        (**self).viewport_width()
    }

    fn show_fallback(&mut self, message: &str) {
        (**self).show_fallback(message)
    }

    fn render_legend(&mut self, entries: &[LegendEntry]) {
        (**self).render_legend(entries)
    }

    fn update_legend_entry(&mut self, entry: &LegendEntry) {
        (**self).update_legend_entry(entry)
    }

    fn render_sections(&mut self, sections: &[EraSection]) {
        (**self).render_sections(sections)
    }

    fn apply_layout(&mut self, layout: &TimelineLayout) {
        (**self).apply_layout(layout)
    }
}
