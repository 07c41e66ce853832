//! Core logic for LifePager, a swipeable biography presentation.
//! This crate is the single source of truth for page, grade and layout rules.

pub mod clock;
pub mod grade;
pub mod layout;
pub mod loader;
pub mod logging;
pub mod model;
pub mod page;
pub mod shell;

pub use clock::current_year;
pub use grade::{grade_label, GradeStage};
pub use layout::timeline::{
    axis_labels, column_width, item_margins, layout_timeline, AxisLabel, ItemSpan,
    TimelineLayout, YearRange, BAR_PALETTE, MAX_YEAR_COUNT, STRICT_OFFSET,
};
pub use layout::view::TimelineView;
pub use loader::{
    load_document, parse_document, try_load_document, AssetSource, DirAssetSource,
    DocumentLoad, LoadError, LoadResult, MemoryAssetSource, DOCUMENT_ASSET,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::color::{ColorParseError, ColorSpec, ThemeColor};
pub use model::document::{Document, Item, Profile, Timeline};
pub use page::{resolve, Page, PageKind};
pub use shell::{
    DetailTarget, DetailView, Intent, Presenter, ResetPrompt, Screen, ShellState, END_PAGE_LABEL,
};

/// Minimal health-check API for embedders.
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
