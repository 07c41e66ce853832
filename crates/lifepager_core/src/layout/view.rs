//! Width-reactive timeline layout holder.

use crate::layout::timeline::{
    axis_labels, layout_with_range, AxisLabel, TimelineLayout, YearRange,
};
use crate::model::document::Timeline;
use log::trace;

/// Keeps one timeline's layout in sync with the available width.
///
/// The year range and axis labels are fixed at construction; column width and
/// item margins are recomputed by `resize`.
#[derive(Debug, Clone)]
pub struct TimelineView<'a> {
    timeline: &'a Timeline,
    layout: TimelineLayout,
}

impl<'a> TimelineView<'a> {
    /// Creates a zero-width view. Call `resize` once the width is known.
    pub fn new(timeline: &'a Timeline, current_year: i32, birth_year: i32) -> Self {
        let year_range = YearRange::for_timeline(timeline, current_year);
        let labels: Vec<AxisLabel> =
            axis_labels(year_range, birth_year, timeline.use_converted_year);
        Self {
            timeline,
            layout: layout_with_range(timeline, year_range, labels, 0.0),
        }
    }

    /// Applies a new available width.
    ///
    /// Returns `true` when the layout changed.
    pub fn resize(&mut self, width: f32) -> bool {
        let next = layout_with_range(
            self.timeline,
            self.layout.year_range,
            std::mem::take(&mut self.layout.axis_labels),
            width,
        );
        let changed = next.width != self.layout.width;
        if changed {
            trace!(
                "event=timeline_resize module=layout width={} column_width={}",
                next.width,
                next.column_width
            );
        }
        self.layout = next;
        changed
    }

    pub fn timeline(&self) -> &'a Timeline {
        self.timeline
    }

    pub fn layout(&self) -> &TimelineLayout {
        &self.layout
    }

    pub fn into_layout(self) -> TimelineLayout {
        self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::TimelineView;
    use crate::model::document::{Item, Timeline};

    fn timeline() -> Timeline {
        Timeline {
            title: "Work".to_string(),
            items: vec![Item {
                name: "Job".to_string(),
                texts: Vec::new(),
                start_year: 2001,
                end_year: Some(2002),
            }],
            memo: String::new(),
            start_year: 2000,
            end_year: Some(2004),
            use_converted_year: false,
            year_strict: false,
        }
    }

    #[test]
    fn resize_recomputes_column_width_and_margins() {
        let timeline = timeline();
        let mut view = TimelineView::new(&timeline, 2026, 1990);
        assert_eq!(view.layout().column_width, 0.0);

        assert!(view.resize(500.0));
        assert_eq!(view.layout().column_width, 100.0);
        assert_eq!(view.layout().spans[0].start_margin, 125.0);

        assert!(view.resize(250.0));
        assert_eq!(view.layout().column_width, 50.0);
        assert_eq!(view.layout().spans[0].start_margin, 62.5);
        assert_eq!(view.layout().axis_labels.len(), 5);
    }

    #[test]
    fn resize_to_same_width_reports_no_change() {
        let timeline = timeline();
        let mut view = TimelineView::new(&timeline, 2026, 1990);
        assert!(view.resize(300.0));
        assert!(!view.resize(300.0));
        assert_eq!(view.layout().axis_labels[0].text, "2000");
    }
}
