//! Printable view of a laid-out timeline.

use crate::text_host::TextHost;
use serde::Serialize;
use std::fmt::Write as _;
use timeline_core::{ItemPlacement, SectionHeight, TimelineController, ViewportMode};

#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub mode: ViewportMode,
    pub viewport_width: f64,
    pub active_categories: Vec<String>,
    pub query: String,
    pub sections: Vec<SectionReport>,
}

#[derive(Debug, Serialize)]
pub struct SectionReport {
    pub title: String,
    pub height: SectionHeight,
    pub items: Vec<ItemReport>,
}

#[derive(Debug, Serialize)]
pub struct ItemReport {
    pub category: String,
    pub year: String,
    pub title: String,
    pub placement: ItemPlacement,
}

impl LayoutReport {
    pub fn new(controller: &TimelineController<TextHost>) -> Self {
        let layout = controller.last_layout();
        let sections = controller
            .sections()
            .iter()
            .zip(layout.sections.iter())
            .map(|(section, section_layout)| SectionReport {
                title: section.title.clone(),
                height: section_layout.height,
                items: section
                    .items
                    .iter()
                    .zip(section_layout.placements.iter())
                    .map(|(item, placement)| ItemReport {
                        category: item.category().to_string(),
                        year: item.event.year.clone(),
                        title: item.event.title.clone(),
                        placement: *placement,
                    })
                    .collect(),
            })
            .collect();

        Self {
            mode: layout.mode,
            viewport_width: layout.viewport_width,
            active_categories: controller.active_categories().active_keys().cloned().collect(),
            query: controller.query().as_str().to_string(),
            sections,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "mode={:?} width={} active=[{}] query={:?}",
            self.mode,
            self.viewport_width,
            self.active_categories.join(","),
            self.query
        );
        for section in &self.sections {
            let height = match section.height {
                SectionHeight::Auto => "auto".to_string(),
                SectionHeight::Fixed(px) => format!("{px}px"),
            };
            let _ = writeln!(out, "== {} (height {height})", section.title);
            for item in &section.items {
                let slot = match item.placement {
                    ItemPlacement::Hidden => "hidden".to_string(),
                    ItemPlacement::Stacked => "stacked".to_string(),
                    ItemPlacement::Column { column, top, .. } => {
                        format!("col {} @ {top}px", column + 1)
                    }
                };
                let _ = writeln!(
                    out,
                    "  [{slot:>16}] {:<8} {} ({})",
                    item.year, item.title, item.category
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::LayoutReport;
    use crate::text_host::{TextHost, TextMetrics};
    use timeline_core::{
        BootstrapOutcome, StaticSource, TimelineConfig, TimelineController, TimelineEvent,
    };

    const PAYLOAD: &str = r#"{
        "categories": {"A": {"label": "Alpha", "color": "red"}, "B": {"label": "Beta", "color": "blue"}},
        "timelineData": [{"era": "Only", "events": [
            {"category": "A", "year": "1900", "title": "Foo", "desc": ""},
            {"category": "B", "year": "1901", "title": "Bar", "desc": ""}
        ]}]
    }"#;

    fn controller(width: f64) -> TimelineController<TextHost> {
        let outcome = TimelineController::bootstrap(
            TextHost::new(width, TextMetrics::default()),
            &StaticSource::json(PAYLOAD),
            TimelineConfig::default(),
        )
        .expect("bootstrap should succeed");
        match outcome {
            BootstrapOutcome::Ready(controller) => controller,
            BootstrapOutcome::Fallback { error, .. } => panic!("unexpected fallback: {error}"),
        }
    }

    #[test]
    fn text_report_lists_placements() {
        let mut controller = controller(1280.0);
        controller.handle(TimelineEvent::LegendClick("B".to_string()));

        let text = LayoutReport::new(&controller).to_text();
        assert!(text.starts_with("mode=Wide width=1280 active=[A]"));
        assert!(text.contains("== Only (height"));
        assert!(text.contains("col 1 @ 76px"));
        assert!(text.contains("hidden"));
    }

    #[test]
    fn narrow_report_has_auto_height() {
        let report = LayoutReport::new(&controller(600.0));
        let text = report.to_text();
        assert!(text.contains("(height auto)"));
        assert!(text.contains("stacked"));
        assert_eq!(report.active_categories, vec!["A", "B"]);
    }
}
