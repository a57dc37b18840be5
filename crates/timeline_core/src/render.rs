//! Rendering model: one section per era, one item per renderable event.
//!
//! # Responsibility
//! - Turn the payload into the sections the host materializes once.
//! - Apply the dangling-category skip policy.
//!
//! # Invariants
//! - Items keep payload order within their era.
//! - Events whose category key is unknown are dropped here and never
//!   reach filtering or layout.

use crate::model::era::Event;
use crate::model::payload::TimelinePayload;
use log::debug;
use serde::Serialize;

/// One rendered timeline entry and its current visibility flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineItem {
    pub event: Event,
    pub visible: bool,
}

impl TimelineItem {
    /// Freshly rendered items start visible.
    pub fn new(event: Event) -> Self {
        Self {
            event,
            visible: true,
        }
    }

    pub fn category(&self) -> &str {
        &self.event.category
    }
}

/// One era block: a header plus its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EraSection {
    pub title: String,
    pub items: Vec<TimelineItem>,
}

impl EraSection {
    /// Visible items with their index inside this section.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &TimelineItem)> + '_ {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.items.iter().filter(|item| item.visible).count()
    }
}

/// Builds the rendering model from a loaded payload.
pub fn build_sections(payload: &TimelinePayload) -> Vec<EraSection> {
    let mut skipped = 0usize;
    let sections = payload
        .timeline_data
        .iter()
        .map(|era| {
            let items = era
                .events
                .iter()
                .filter(|event| {
                    let known = payload.categories.contains_key(&event.category);
                    if !known {
                        skipped += 1;
                    }
                    known
                })
                .cloned()
                .map(TimelineItem::new)
                .collect();
            EraSection {
                title: era.name.clone(),
                items,
            }
        })
        .collect::<Vec<_>>();

    if skipped > 0 {
        debug!(
            "event=render_sections module=render status=skipped dangling_events={}",
            skipped
        );
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::build_sections;
    use crate::model::category::Category;
    use crate::model::era::{Era, Event};
    use crate::model::payload::TimelinePayload;

    fn payload() -> TimelinePayload {
        let mut payload = TimelinePayload::default();
        payload
            .categories
            .insert("A".to_string(), Category::new("Alpha", "red"));
        payload.timeline_data = vec![
            Era::new(
                "First",
                vec![
                    Event::new("A", "1", "one", ""),
                    Event::new("missing", "2", "two", ""),
                    Event::new("A", "3", "three", ""),
                ],
            ),
            Era::new("Empty", Vec::new()),
        ];
        payload
    }

    #[test]
    fn builds_one_section_per_era_in_order() {
        let sections = build_sections(&payload());
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title, "First");
        assert_eq!(sections[1].title, "Empty");
        assert!(sections[1].items.is_empty());
    }

    #[test]
    fn skips_dangling_category_references() {
        let sections = build_sections(&payload());
        let titles = sections[0]
            .items
            .iter()
            .map(|item| item.event.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["one", "three"]);
        assert!(sections[0].items.iter().all(|item| item.visible));
    }
}
