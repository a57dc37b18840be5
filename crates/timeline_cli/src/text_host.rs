//! Terminal host: estimates rendered sizes from text length.
//!
//! # Responsibility
//! - Stand in for a page so the engine can run without a browser.
//! - Measure items by wrapping their text at the column width.
//!
//! # Invariants
//! - All mount points are always present.
//! - Heights depend only on text, metrics and the requested width.

use timeline_core::{EraSection, LegendEntry, Measure, MountPoint, TimelineHost, TimelineLayout};

/// Fixed typographic metrics in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    pub char_width: f64,
    pub line_height: f64,
    /// Horizontal padding inside one item box.
    pub item_padding_x: f64,
    /// Vertical space an item takes besides its text lines.
    pub item_chrome: f64,
    pub header_height: f64,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 20.0,
            item_padding_x: 32.0,
            item_chrome: 48.0,
            header_height: 56.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct ItemText {
    title: String,
    description: String,
    more_info: Option<String>,
}

/// Host backed by in-memory state for terminal output.
#[derive(Debug)]
pub struct TextHost {
    viewport_width: f64,
    metrics: TextMetrics,
    texts: Vec<Vec<ItemText>>,
    pub legend: Vec<LegendEntry>,
    pub fallback: Option<String>,
}

impl TextHost {
    pub fn new(viewport_width: f64, metrics: TextMetrics) -> Self {
        Self {
            viewport_width,
            metrics,
            texts: Vec::new(),
            legend: Vec::new(),
            fallback: None,
        }
    }
}

fn wrapped_lines(text: &str, chars_per_line: usize) -> usize {
    text.trim().chars().count().div_ceil(chars_per_line.max(1))
}

impl Measure for TextHost {
    fn header_height(&self, _section: usize) -> f64 {
        self.metrics.header_height
    }

    fn item_height(&self, section: usize, item: usize, width_percent: f64) -> f64 {
        let Some(text) = self.texts.get(section).and_then(|items| items.get(item)) else {
            return 0.0;
        };

        let content_width =
            self.viewport_width * width_percent / 100.0 - self.metrics.item_padding_x;
        let chars_per_line = (content_width / self.metrics.char_width).floor().max(1.0) as usize;

        // The year always takes one line.
        let lines = 1
            + wrapped_lines(&text.title, chars_per_line)
            + wrapped_lines(&text.description, chars_per_line)
            + text
                .more_info
                .as_deref()
                .map_or(0, |info| wrapped_lines(info, chars_per_line));

        self.metrics.item_chrome + lines as f64 * self.metrics.line_height
    }
}

impl TimelineHost for TextHost {
    fn has_mount_point(&self, _mount: MountPoint) -> bool {
        true
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn show_fallback(&mut self, message: &str) {
        self.fallback = Some(message.to_string());
    }

    fn render_legend(&mut self, entries: &[LegendEntry]) {
        self.legend = entries.to_vec();
    }

    fn update_legend_entry(&mut self, entry: &LegendEntry) {
        if let Some(existing) = self.legend.iter_mut().find(|existing| existing.key == entry.key) {
            existing.inactive = entry.inactive;
        }
    }

    fn render_sections(&mut self, sections: &[EraSection]) {
        self.texts = sections
            .iter()
            .map(|section| {
                section
                    .items
                    .iter()
                    .map(|item| ItemText {
                        title: item.event.title.clone(),
                        description: item.event.description.clone(),
                        more_info: item.event.more_info.clone(),
                    })
                    .collect()
            })
            .collect();
    }

    /// Nothing to draw incrementally; the report reads the controller's
    /// `last_layout()`, which is the layout this call just received.
    fn apply_layout(&mut self, _layout: &TimelineLayout) {}
}
