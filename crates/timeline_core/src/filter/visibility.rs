//! Per-event visibility over rendered era sections.

use crate::filter::active_set::ActiveCategorySet;
use crate::filter::query::SearchQuery;
use crate::model::era::Event;
use crate::render::EraSection;

/// Counts produced by one filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub visible: usize,
    pub hidden: usize,
}

/// Returns whether one event is visible under the current filter state.
pub fn is_visible(event: &Event, active: &ActiveCategorySet, query: &SearchQuery) -> bool {
    active.contains(&event.category) && query.matches(event)
}

/// Recomputes visibility flags on every rendered item in place.
pub fn apply_filter(
    sections: &mut [EraSection],
    active: &ActiveCategorySet,
    query: &SearchQuery,
) -> FilterSummary {
    let mut summary = FilterSummary::default();
    for item in sections.iter_mut().flat_map(|section| section.items.iter_mut()) {
        item.visible = is_visible(&item.event, active, query);
        if item.visible {
            summary.visible += 1;
        } else {
            summary.hidden += 1;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::{apply_filter, is_visible, FilterSummary};
    use crate::filter::active_set::ActiveCategorySet;
    use crate::filter::query::SearchQuery;
    use crate::model::era::{Era, Event};
    use crate::render::{EraSection, TimelineItem};

    fn sections() -> Vec<EraSection> {
        let era = Era::new(
            "Republic",
            vec![
                Event::new("A", "1900", "Foo", ""),
                Event::new("B", "1901", "Bar", ""),
            ],
        );
        vec![EraSection {
            title: era.name.clone(),
            items: era.events.into_iter().map(TimelineItem::new).collect(),
        }]
    }

    #[test]
    fn visibility_requires_category_and_query() {
        let active = ActiveCategorySet::all(["A"]);
        let event = Event::new("A", "1900", "Foo", "");
        assert!(is_visible(&event, &active, &SearchQuery::from_input("foo")));
        assert!(!is_visible(&event, &active, &SearchQuery::from_input("bar")));
        assert!(!is_visible(
            &Event::new("B", "1900", "Foo", ""),
            &active,
            &SearchQuery::default()
        ));
    }

    #[test]
    fn apply_filter_updates_flags_in_place() {
        let mut sections = sections();
        let active = ActiveCategorySet::all(["A", "B"]);

        let summary = apply_filter(&mut sections, &active, &SearchQuery::from_input("foo"));
        assert_eq!(
            summary,
            FilterSummary {
                visible: 1,
                hidden: 1
            }
        );
        assert!(sections[0].items[0].visible);
        assert!(!sections[0].items[1].visible);
        assert_eq!(sections[0].items[1].event.title, "Bar");
    }
}
