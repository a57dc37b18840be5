//! Greedy shortest-column masonry layout.
//!
//! Wide viewports place each visible item, in data order, into the column with
//! the smallest accumulated height (leftmost wins ties). Narrow viewports drop
//! column placement entirely and let items stack in flow.

use crate::render::EraSection;
use serde::Serialize;

/// Default narrow/wide breakpoint in layout pixels.
pub const DEFAULT_NARROW_BREAKPOINT: f64 = 768.0;
/// Default column count for wide viewports.
pub const DEFAULT_COLUMNS: usize = 4;
/// Default gap between an era header and the first row of items.
pub const DEFAULT_HEADER_MARGIN: f64 = 20.0;
/// Default space below the tallest column.
pub const DEFAULT_BOTTOM_MARGIN: f64 = 40.0;

/// Viewport classification driving the layout strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportMode {
    /// Single stacked column in natural flow.
    Narrow,
    /// Absolute column placement.
    Wide,
}

impl ViewportMode {
    /// `width <= breakpoint` is narrow.
    pub fn for_width(width: f64, breakpoint: f64) -> Self {
        if width <= breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Tunable layout constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutParams {
    pub narrow_breakpoint: f64,
    pub columns: usize,
    pub header_margin: f64,
    pub bottom_margin: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            columns: DEFAULT_COLUMNS,
            header_margin: DEFAULT_HEADER_MARGIN,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
        }
    }
}

impl LayoutParams {
    /// Column width as a percentage of the section content width.
    pub fn column_width_percent(&self) -> f64 {
        100.0 / self.columns.max(1) as f64
    }
}

/// Rendered dimensions provided by the host.
///
/// `item_height` is asked with the column width already applied, so hosts
/// that wrap text can measure at the final width.
// Why: an item's height depends on its width once text wraps; measuring at
// full width and placing at 25% would undersize every column.
pub trait Measure {
    /// Height of the era header in section `section`.
    fn header_height(&self, section: usize) -> f64;
    /// Height of item `item` in section `section` at `width_percent` of the
    /// section content width.
    fn item_height(&self, section: usize, item: usize, width_percent: f64) -> f64;
}

/// Where and how one item is shown after a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemPlacement {
    /// Removed from flow (`display: none`).
    Hidden,
    /// Natural document flow; any previous position and width are cleared.
    Stacked,
    /// Absolutely positioned inside a column.
    Column {
        column: usize,
        top: f64,
        left_percent: f64,
        width_percent: f64,
    },
}

impl ItemPlacement {
    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::Column { .. })
    }
}

/// Section container height after layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionHeight {
    /// Left to content flow.
    Auto,
    Fixed(f64),
}

/// Layout result for one era section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionLayout {
    /// One placement per item, indexed like `EraSection::items`.
    pub placements: Vec<ItemPlacement>,
    pub height: SectionHeight,
    /// Final column accumulators; empty in narrow mode.
    pub column_heights: Vec<f64>,
}

/// Layout result for the whole timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineLayout {
    pub mode: ViewportMode,
    pub viewport_width: f64,
    pub sections: Vec<SectionLayout>,
}

/// Column assignment for a sequence of item heights.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnPlan {
    /// `(column, top)` per input height, in input order.
    pub slots: Vec<(usize, f64)>,
    pub column_heights: Vec<f64>,
}

/// Places `heights` into `columns` columns that all start at `seed`.
///
/// Each item goes to the first column with the minimum accumulated height;
/// its top is that height, then the column grows by the item height.
pub fn place_in_columns(seed: f64, heights: &[f64], columns: usize) -> ColumnPlan {
    let mut column_heights = vec![seed; columns.max(1)];
    let mut slots = Vec::with_capacity(heights.len());

    for &height in heights {
        let column = shortest_column(&column_heights);
        let top = column_heights[column];
        slots.push((column, top));
        column_heights[column] += sanitize_height(height);
    }

    ColumnPlan {
        slots,
        column_heights,
    }
}

/// Lays out one section.
pub fn layout_section(
    section_index: usize,
    section: &EraSection,
    mode: ViewportMode,
    params: &LayoutParams,
    measure: &dyn Measure,
) -> SectionLayout {
    match mode {
        ViewportMode::Narrow => SectionLayout {
            placements: section
                .items
                .iter()
                .map(|item| {
                    if item.visible {
                        ItemPlacement::Stacked
                    } else {
                        ItemPlacement::Hidden
                    }
                })
                .collect(),
            height: SectionHeight::Auto,
            column_heights: Vec::new(),
        },
        ViewportMode::Wide => layout_wide(section_index, section, params, measure),
    }
}

fn layout_wide(
    section_index: usize,
    section: &EraSection,
    params: &LayoutParams,
    measure: &dyn Measure,
) -> SectionLayout {
    let width_percent = params.column_width_percent();
    let seed = sanitize_height(measure.header_height(section_index)) + params.header_margin;

    let visible = section
        .visible_items()
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    let heights = visible
        .iter()
        .map(|&index| measure.item_height(section_index, index, width_percent))
        .collect::<Vec<_>>();
    let plan = place_in_columns(seed, &heights, params.columns);

    let mut placements = vec![ItemPlacement::Hidden; section.items.len()];
    for (&index, &(column, top)) in visible.iter().zip(plan.slots.iter()) {
        placements[index] = ItemPlacement::Column {
            column,
            top,
            left_percent: column as f64 * width_percent,
            width_percent,
        };
    }

    let tallest = plan
        .column_heights
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    SectionLayout {
        placements,
        height: SectionHeight::Fixed(tallest + params.bottom_margin),
        column_heights: plan.column_heights,
    }
}

/// Lays out every section for the given viewport width.
pub fn layout_timeline(
    sections: &[EraSection],
    viewport_width: f64,
    params: &LayoutParams,
    measure: &dyn Measure,
) -> TimelineLayout {
    let mode = ViewportMode::for_width(viewport_width, params.narrow_breakpoint);
    TimelineLayout {
        mode,
        viewport_width,
        sections: sections
            .iter()
            .enumerate()
            .map(|(index, section)| layout_section(index, section, mode, params, measure))
            .collect(),
    }
}

fn shortest_column(column_heights: &[f64]) -> usize {
    let mut best = 0;
    for (index, &height) in column_heights.iter().enumerate().skip(1) {
        if height < column_heights[best] {
            best = index;
        }
    }
    best
}

// Why: a host may report NaN or a negative size for an element that is not
// laid out yet; one such value would poison every later shortest-column pick.
fn sanitize_height(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}
