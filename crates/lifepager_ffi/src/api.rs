//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose page, layout and grade functions to Dart via FRB.
//! - Hold the session document loaded from the bundled asset directory.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - A missing or malformed document degrades to the empty default document.

use lifepager_core::{
    core_version as core_version_inner, grade_label as grade_label_inner,
    init_logging as init_logging_inner, layout_timeline, load_document, ping as ping_inner,
    resolve, DirAssetSource, Document, Page, END_PAGE_LABEL,
};
use log::info;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock, RwLock};

const ASSETS_DIR_ENV: &str = "LIFEPAGER_ASSETS_DIR";
static ASSETS_DIR: OnceLock<PathBuf> = OnceLock::new();
static DOCUMENT: RwLock<Option<Arc<Document>>> = RwLock::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One resolved page, flattened for Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Requested page index.
    pub index: u32,
    /// `title|profile|timeline|end`.
    pub kind: String,
    /// Document title, profile name, timeline title, or the end label.
    pub heading: String,
    /// Profile entries or timeline item names; empty for title/end.
    pub lines: Vec<String>,
    /// Timeline footnote; empty elsewhere.
    pub memo: String,
    pub icon_url: String,
    /// Packed ARGB theme color.
    pub color_argb: u32,
    /// Position inside `timelines` for timeline pages.
    pub timeline_index: Option<u32>,
    /// Navigable page count, title and end included.
    pub total_pages: u32,
}

/// One positioned item bar.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineBarView {
    pub item_index: u32,
    pub name: String,
    pub start_margin: f32,
    pub end_margin: f32,
    pub color_argb: u32,
}

/// Timeline layout envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineLayoutView {
    /// Whether the requested timeline exists.
    pub ok: bool,
    pub message: String,
    pub first_year: i32,
    pub last_year: i32,
    pub column_width: f32,
    /// One label per year column.
    pub axis_labels: Vec<String>,
    pub bars: Vec<TimelineBarView>,
}

impl TimelineLayoutView {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            first_year: 0,
            last_year: 0,
            column_width: 0.0,
            axis_labels: Vec::new(),
            bars: Vec::new(),
        }
    }
}

/// Detail overlay content for one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDetailView {
    pub name: String,
    pub texts: Vec<String>,
}

/// Number of content pages (profiles + timelines).
#[flutter_rust_bridge::frb(sync)]
pub fn page_count() -> u32 {
    to_u32(session_document().page_count())
}

/// Resolves a page index; indices past the end resolve to the end page.
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_page(index: u32) -> PageView {
    page_view(&session_document(), index)
}

/// Grade label for `year` relative to `birth_year`.
#[flutter_rust_bridge::frb(sync)]
pub fn grade_label(year: i32, birth_year: i32) -> String {
    grade_label_inner(year, birth_year)
}

/// Lays out one timeline at `width` logical pixels.
///
/// `current_year = None` uses the device clock for ongoing timelines.
/// Call again on every width change.
#[flutter_rust_bridge::frb(sync)]
pub fn timeline_layout(
    timeline_index: u32,
    width: f32,
    current_year: Option<i32>,
) -> TimelineLayoutView {
    timeline_layout_view(
        &session_document(),
        timeline_index,
        width,
        current_year.unwrap_or_else(lifepager_core::current_year),
    )
}

/// Detail overlay content, `None` when the item does not exist.
#[flutter_rust_bridge::frb(sync)]
pub fn item_detail(timeline_index: u32, item_index: u32) -> Option<ItemDetailView> {
    let doc = session_document();
    doc.item(timeline_index as usize, item_index as usize)
        .map(|item| ItemDetailView {
            name: item.name.clone(),
            texts: item.texts.clone(),
        })
}

/// Reloads the session document from the asset directory.
///
/// # FFI contract
/// - Never fails; a missing or malformed asset installs the empty document.
/// - Returns a human-readable summary.
#[flutter_rust_bridge::frb(sync)]
pub fn reload_document() -> String {
    let doc = Arc::new(load_document(&DirAssetSource::new(resolve_assets_dir())));
    let message = format!("Loaded {} content page(s).", doc.page_count());
    let mut slot = DOCUMENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = Some(doc);
    message
}

fn session_document() -> Arc<Document> {
    if let Some(doc) = DOCUMENT
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .as_ref()
    {
        return Arc::clone(doc);
    }

    let mut slot = DOCUMENT.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    let doc = slot.get_or_insert_with(|| {
        let dir = resolve_assets_dir();
        info!(
            "event=session_document module=ffi status=loading assets_dir={}",
            dir.display()
        );
        Arc::new(load_document(&DirAssetSource::new(dir)))
    });
    Arc::clone(doc)
}

fn resolve_assets_dir() -> PathBuf {
    ASSETS_DIR
        .get_or_init(|| {
            if let Ok(raw) = std::env::var(ASSETS_DIR_ENV) {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::current_dir().unwrap_or_default()
        })
        .clone()
}

fn page_view(doc: &Document, index: u32) -> PageView {
    let page = resolve(index as usize, doc);
    let mut view = PageView {
        index,
        kind: page.kind().as_str().to_string(),
        heading: String::new(),
        lines: Vec::new(),
        memo: String::new(),
        icon_url: String::new(),
        color_argb: doc.color().argb(),
        timeline_index: None,
        total_pages: to_u32(doc.total_pages()),
    };

    match page {
        Page::Title {
            title, icon_url, ..
        } => {
            view.heading = title.to_string();
            view.icon_url = icon_url.to_string();
        }
        Page::Profile { profile, .. } => {
            view.heading = profile.name.clone();
            view.lines = profile.items.clone();
        }
        Page::Timeline { index, timeline } => {
            view.heading = timeline.title.clone();
            view.lines = timeline.items.iter().map(|item| item.name.clone()).collect();
            view.memo = timeline.memo.clone();
            view.timeline_index = Some(to_u32(index));
        }
        Page::End { icon_url, .. } => {
            view.heading = END_PAGE_LABEL.to_string();
            view.icon_url = icon_url.to_string();
        }
    }
    view
}

fn timeline_layout_view(
    doc: &Document,
    timeline_index: u32,
    width: f32,
    current_year: i32,
) -> TimelineLayoutView {
    let Some(timeline) = doc.timeline(timeline_index as usize) else {
        return TimelineLayoutView::failure(format!("timeline not found: {timeline_index}"));
    };

    let layout = layout_timeline(timeline, width, current_year, doc.birth_year);
    let bars = layout
        .spans
        .iter()
        .map(|span| TimelineBarView {
            item_index: to_u32(span.item_index),
            name: timeline
                .item(span.item_index)
                .map(|item| item.name.clone())
                .unwrap_or_default(),
            start_margin: span.start_margin,
            end_margin: span.end_margin,
            color_argb: span.color.argb(),
        })
        .collect();

    TimelineLayoutView {
        ok: true,
        message: String::new(),
        first_year: layout.year_range.first(),
        last_year: layout.year_range.last(),
        column_width: layout.column_width,
        axis_labels: layout.axis_labels.into_iter().map(|label| label.text).collect(),
        bars,
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
