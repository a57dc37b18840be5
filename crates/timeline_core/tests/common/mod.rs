#![allow(dead_code)]

use std::collections::HashMap;
use timeline_core::{
    EraSection, LegendEntry, Measure, MountPoint, TimelineHost, TimelineLayout,
};

/// In-memory host that records everything the controller pushes to it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub mounts: Vec<MountPoint>,
    pub width: f64,
    pub header_height: f64,
    pub default_item_height: f64,
    /// Item heights keyed by event title.
    pub heights_by_title: HashMap<String, f64>,
    pub titles: Vec<Vec<String>>,
    pub fallback: Option<String>,
    pub legend: Vec<LegendEntry>,
    pub legend_updates: usize,
    pub section_renders: usize,
    pub layouts: Vec<TimelineLayout>,
}

impl RecordingHost {
    pub fn wide() -> Self {
        Self {
            mounts: MountPoint::ALL.to_vec(),
            width: 1280.0,
            header_height: 30.0,
            default_item_height: 10.0,
            ..Self::default()
        }
    }

    pub fn narrow() -> Self {
        Self {
            width: 600.0,
            ..Self::wide()
        }
    }

    pub fn with_height(mut self, title: &str, height: f64) -> Self {
        self.heights_by_title.insert(title.to_string(), height);
        self
    }

    pub fn touched(&self) -> bool {
        self.fallback.is_some()
            || !self.legend.is_empty()
            || self.section_renders > 0
            || !self.layouts.is_empty()
    }
}

impl Measure for RecordingHost {
    fn header_height(&self, _section: usize) -> f64 {
        self.header_height
    }

    fn item_height(&self, section: usize, item: usize, _width_percent: f64) -> f64 {
        self.titles
            .get(section)
            .and_then(|titles| titles.get(item))
            .and_then(|title| self.heights_by_title.get(title))
            .copied()
            .unwrap_or(self.default_item_height)
    }
}

impl TimelineHost for RecordingHost {
    fn has_mount_point(&self, mount: MountPoint) -> bool {
        self.mounts.contains(&mount)
    }

    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn show_fallback(&mut self, message: &str) {
        self.fallback = Some(message.to_string());
    }

    fn render_legend(&mut self, entries: &[LegendEntry]) {
        self.legend = entries.to_vec();
    }

    fn update_legend_entry(&mut self, entry: &LegendEntry) {
        self.legend_updates += 1;
        if let Some(existing) = self.legend.iter_mut().find(|existing| existing.key == entry.key) {
            *existing = entry.clone();
        }
    }

    fn render_sections(&mut self, sections: &[EraSection]) {
        self.section_renders += 1;
        self.titles = sections
            .iter()
            .map(|section| {
                section
                    .items
                    .iter()
                    .map(|item| item.event.title.clone())
                    .collect()
            })
            .collect();
    }

    fn apply_layout(&mut self, layout: &TimelineLayout) {
        self.layouts.push(layout.clone());
    }
}

/// Two categories, one era: `Foo` (A, 1900) and `Bar` (B, 1901).
pub const AB_PAYLOAD: &str = r#"{
    "categories": {
        "A": {"label": "Alpha", "color": "red"},
        "B": {"label": "Beta", "color": "blue"}
    },
    "timelineData": [
        {"era": "Turn of the century", "events": [
            {"category": "A", "year": "1900", "title": "Foo", "desc": "first"},
            {"category": "B", "year": "1901", "title": "Bar", "desc": "second"}
        ]}
    ]
}"#;

/// One era with `count` events of category `A`, titled `e0..`.
pub fn single_era_payload(count: usize) -> String {
    let events = (0..count)
        .map(|index| {
            format!(
                r#"{{"category":"A","year":"{}","title":"e{index}","desc":""}}"#,
                1900 + index
            )
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(
        r#"{{"categories":{{"A":{{"label":"Alpha","color":"red"}}}},"timelineData":[{{"era":"Only","events":[{events}]}}]}}"#
    )
}
