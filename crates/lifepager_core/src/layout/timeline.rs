//! Year range, column width and item margin computation.

use crate::grade::grade_label;
use crate::model::color::ThemeColor;
use crate::model::document::{Item, Timeline};
use log::warn;
use std::ops::RangeInclusive;

/// Margin used on both bar ends in strict mode, in layout units.
pub const STRICT_OFFSET: f32 = 8.0;

/// Item bar fill colors, cycled by item position.
pub const BAR_PALETTE: [ThemeColor; 8] = [
    ThemeColor::from_rgb(0xFDC2C9),
    ThemeColor::from_rgb(0xD9C2FE),
    ThemeColor::from_rgb(0xC2C9FE),
    ThemeColor::from_rgb(0xD6EDFE),
    ThemeColor::from_rgb(0xE1FBCE),
    ThemeColor::from_rgb(0xFEF9D6),
    ThemeColor::from_rgb(0xFEE5D6),
    ThemeColor::from_rgb(0xFED1DF),
];

/// Widest axis a timeline can span, in years.
///
/// Wider ranges are truncated at `first + MAX_YEAR_COUNT - 1`.
pub const MAX_YEAR_COUNT: u32 = 1_000;

/// Inclusive, non-empty year interval of at most `MAX_YEAR_COUNT` years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    first: i32,
    last: i32,
}

impl YearRange {
    /// Builds `[first, last]`, clamping to `[first, first]` when reversed and
    /// truncating to `MAX_YEAR_COUNT` years.
    pub fn new(first: i32, last: i32) -> Self {
        let widest = first.saturating_add(MAX_YEAR_COUNT as i32 - 1);
        Self {
            first,
            last: last.max(first).min(widest),
        }
    }

    /// Axis range for `timeline`; ongoing timelines end at `current_year`.
    pub fn for_timeline(timeline: &Timeline, current_year: i32) -> Self {
        let end = timeline.effective_end_year(current_year);
        if end < timeline.start_year {
            warn!(
                "event=timeline_range_clamped module=layout start_year={} end_year={}",
                timeline.start_year, end
            );
        }
        let range = Self::new(timeline.start_year, end);
        if end > range.last {
            warn!(
                "event=timeline_range_truncated module=layout start_year={} end_year={} max_years={}",
                timeline.start_year, end, MAX_YEAR_COUNT
            );
        }
        range
    }

    pub fn first(&self) -> i32 {
        self.first
    }

    pub fn last(&self) -> i32 {
        self.last
    }

    /// Number of years covered, always >= 1.
    pub fn count(&self) -> u32 {
        self.last.abs_diff(self.first).saturating_add(1)
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.first..=self.last
    }

    pub fn contains(&self, year: i32) -> bool {
        self.years().contains(&year)
    }
}

/// Width of one year column for `width` spread across `range`.
///
/// Negative and non-finite widths measure as zero.
pub fn column_width(width: f32, range: YearRange) -> f32 {
    sanitize_width(width) / range.count() as f32
}

/// Start and end margins positioning one item bar inside its row.
pub fn item_margins(
    item: &Item,
    range: YearRange,
    column_width: f32,
    year_strict: bool,
) -> (f32, f32) {
    // i64 keeps differences of arbitrary document years from overflowing.
    let leading_years = (i64::from(item.start_year) - i64::from(range.first())).max(0);
    let effective_end = item.end_year.unwrap_or(range.last()).min(range.last());
    let trailing_years = (i64::from(range.last()) - i64::from(effective_end)).max(0);

    let (start_pad, end_pad) = if year_strict {
        (STRICT_OFFSET, STRICT_OFFSET)
    } else {
        (column_width / 4.0, column_width / 2.0)
    };

    (
        column_width * leading_years as f32 + start_pad,
        column_width * trailing_years as f32 + end_pad,
    )
}

/// Label shown above one year column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabel {
    pub year: i32,
    pub text: String,
}

/// Axis labels for every year in `range`.
pub fn axis_labels(range: YearRange, birth_year: i32, use_converted_year: bool) -> Vec<AxisLabel> {
    range
        .years()
        .map(|year| AxisLabel {
            year,
            text: if use_converted_year {
                grade_label(year, birth_year)
            } else {
                year.to_string()
            },
        })
        .collect()
}

/// Positioned bar for one timeline item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpan {
    /// Position of the item inside `Timeline::items`.
    pub item_index: usize,
    pub start_margin: f32,
    pub end_margin: f32,
    pub color: ThemeColor,
}

impl ItemSpan {
    /// Bar length left over inside a row of `row_width`, never negative.
    pub fn bar_width(&self, row_width: f32) -> f32 {
        (sanitize_width(row_width) - self.start_margin - self.end_margin).max(0.0)
    }
}

/// Complete layout of one timeline at one width.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayout {
    pub year_range: YearRange,
    pub width: f32,
    pub column_width: f32,
    pub axis_labels: Vec<AxisLabel>,
    pub spans: Vec<ItemSpan>,
}

/// Lays out `timeline` across `width` layout units.
pub fn layout_timeline(
    timeline: &Timeline,
    width: f32,
    current_year: i32,
    birth_year: i32,
) -> TimelineLayout {
    let year_range = YearRange::for_timeline(timeline, current_year);
    let axis = axis_labels(year_range, birth_year, timeline.use_converted_year);
    layout_with_range(timeline, year_range, axis, width)
}

pub(crate) fn layout_with_range(
    timeline: &Timeline,
    year_range: YearRange,
    axis_labels: Vec<AxisLabel>,
    width: f32,
) -> TimelineLayout {
    let width = sanitize_width(width);
    let column_width = column_width(width, year_range);
    let spans = item_spans(timeline, year_range, column_width);
    TimelineLayout {
        year_range,
        width,
        column_width,
        axis_labels,
        spans,
    }
}

pub(crate) fn item_spans(
    timeline: &Timeline,
    year_range: YearRange,
    column_width: f32,
) -> Vec<ItemSpan> {
    timeline
        .items
        .iter()
        .enumerate()
        .map(|(item_index, item)| {
            let (start_margin, end_margin) =
                item_margins(item, year_range, column_width, timeline.year_strict);
            ItemSpan {
                item_index,
                start_margin,
                end_margin,
                color: BAR_PALETTE[item_index % BAR_PALETTE.len()],
            }
        })
        .collect()
}

fn sanitize_width(width: f32) -> f32 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::{
        column_width, item_margins, ItemSpan, YearRange, BAR_PALETTE, MAX_YEAR_COUNT, STRICT_OFFSET,
    };
    use crate::model::document::Item;

    fn item(start_year: i32, end_year: Option<i32>) -> Item {
        Item {
            name: "item".to_string(),
            texts: Vec::new(),
            start_year,
            end_year,
        }
    }

    #[test]
    fn reversed_range_clamps_to_single_year() {
        let range = YearRange::new(2010, 2005);
        assert_eq!(range.first(), 2010);
        assert_eq!(range.last(), 2010);
        assert_eq!(range.count(), 1);
    }

    #[test]
    fn oversized_range_is_truncated() {
        let range = YearRange::new(-2_000_000_000, 2_000_000_000);
        assert_eq!(range.count(), MAX_YEAR_COUNT);
        assert_eq!(range.last(), -2_000_000_000 + MAX_YEAR_COUNT as i32 - 1);

        let near_max = YearRange::new(i32::MAX - 1, i32::MAX);
        assert_eq!(near_max.count(), 2);
    }

    #[test]
    fn column_width_ignores_invalid_widths() {
        let range = YearRange::new(2000, 2003);
        assert_eq!(column_width(400.0, range), 100.0);
        assert_eq!(column_width(-10.0, range), 0.0);
        assert_eq!(column_width(f32::NAN, range), 0.0);
    }

    #[test]
    fn strict_mode_uses_fixed_offset() {
        let range = YearRange::new(2000, 2004);
        let (start, end) = item_margins(&item(2001, Some(2002)), range, 100.0, true);
        assert_eq!(start, 100.0 + STRICT_OFFSET);
        assert_eq!(end, 200.0 + STRICT_OFFSET);
    }

    #[test]
    fn items_outside_range_are_floored_and_clamped() {
        let range = YearRange::new(2000, 2004);
        let (start, end) = item_margins(&item(1995, Some(2010)), range, 100.0, false);
        assert_eq!(start, 25.0);
        assert_eq!(end, 50.0);
    }

    #[test]
    fn bar_width_never_negative() {
        let span = ItemSpan {
            item_index: 0,
            start_margin: 80.0,
            end_margin: 40.0,
            color: BAR_PALETTE[0],
        };
        assert_eq!(span.bar_width(200.0), 80.0);
        assert_eq!(span.bar_width(100.0), 0.0);
    }
}
