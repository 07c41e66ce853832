//! Document, profile, timeline and item records.
//!
//! # Responsibility
//! - Mirror the `profile.json` schema with serde derive.
//! - Provide bounds-checked accessors used by page resolution and detail
//!   lookups.
//!
//! # Invariants
//! - `page_count()` never includes the title and end pages.
//! - Accessors return `None` instead of panicking on out-of-range indices.

use crate::model::color::{ColorSpec, ThemeColor};
use serde::{Deserialize, Serialize};

/// Theme color applied when the document does not declare one.
pub const DEFAULT_THEME_COLOR: &str = "#FFFFFF";
/// Birth year applied when the document does not declare one.
pub const DEFAULT_BIRTH_YEAR: i32 = 1700;

/// Root biography document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Document {
    /// Text shown on the title page.
    pub title: String,
    /// Color spec, e.g. `#FFFFFF` or `#80112233`, parsed at load.
    pub theme_color: ColorSpec,
    /// Icon URI shown on title and end pages. May be empty.
    pub icon_url: String,
    /// Reference year for grade labels.
    pub birth_year: i32,
    /// Profile pages in display order.
    pub profiles: Vec<Profile>,
    /// Timeline pages in display order, after all profiles.
    pub timelines: Vec<Timeline>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            title: String::new(),
            theme_color: ColorSpec::new(DEFAULT_THEME_COLOR),
            icon_url: String::new(),
            birth_year: DEFAULT_BIRTH_YEAR,
            profiles: Vec::new(),
            timelines: Vec::new(),
        }
    }
}

impl Document {
    /// Number of content pages (profiles + timelines).
    pub fn page_count(&self) -> usize {
        self.profiles.len() + self.timelines.len()
    }

    /// Number of navigable pages, title and end included.
    pub fn total_pages(&self) -> usize {
        self.page_count() + 2
    }

    /// Index of the end page.
    pub fn last_page_index(&self) -> usize {
        self.page_count() + 1
    }

    /// Parsed theme color, opaque white when `theme_color` is not a valid spec.
    pub fn color(&self) -> ThemeColor {
        self.theme_color.color()
    }

    pub fn profile(&self, index: usize) -> Option<&Profile> {
        self.profiles.get(index)
    }

    pub fn timeline(&self, index: usize) -> Option<&Timeline> {
        self.timelines.get(index)
    }

    /// Looks up one timeline item by `(timeline, item)` position.
    pub fn item(&self, timeline_index: usize, item_index: usize) -> Option<&Item> {
        self.timeline(timeline_index)?.item(item_index)
    }
}

/// Named list page, e.g. "Hobbies" with one line per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub items: Vec<String>,
}

/// Life timeline page spanning an inclusive year range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub title: String,
    pub items: Vec<Item>,
    /// Footnote shown under the timeline.
    #[serde(default)]
    pub memo: String,
    pub start_year: i32,
    /// `None` means ongoing: the axis runs to the current calendar year.
    #[serde(default)]
    pub end_year: Option<i32>,
    /// Axis shows grade labels instead of raw years.
    #[serde(default)]
    pub use_converted_year: bool,
    /// Item bars use a fixed offset instead of proportional column padding.
    #[serde(default)]
    pub year_strict: bool,
}

impl Timeline {
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Declared end year, or `current_year` for ongoing timelines.
    pub fn effective_end_year(&self, current_year: i32) -> i32 {
        self.end_year.unwrap_or(current_year)
    }
}

/// One bar on a timeline, with detail paragraphs for the overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub texts: Vec<String>,
    pub start_year: i32,
    /// `None` means ongoing: the bar runs to the last displayed year.
    #[serde(default)]
    pub end_year: Option<i32>,
}
