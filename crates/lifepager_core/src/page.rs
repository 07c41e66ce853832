//! Page resolution.
//!
//! # Responsibility
//! - Map a flat, zero-based page index onto the title, profile, timeline or
//!   end page of a document.
//!
//! # Invariants
//! - Index 0 is always the title page.
//! - Every index past the last timeline resolves to the end page; resolution
//!   is total and never fails.

use crate::model::color::ThemeColor;
use crate::model::document::{Document, Profile, Timeline};

/// One navigable page, borrowing its record from the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page<'a> {
    Title {
        title: &'a str,
        icon_url: &'a str,
        color: ThemeColor,
    },
    Profile {
        /// Position inside `Document::profiles`.
        index: usize,
        profile: &'a Profile,
    },
    Timeline {
        /// Position inside `Document::timelines`.
        index: usize,
        timeline: &'a Timeline,
    },
    End {
        icon_url: &'a str,
        color: ThemeColor,
    },
}

/// Stable page kind tag, useful where the borrowed payload is not needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Title,
    Profile,
    Timeline,
    End,
}

impl PageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Profile => "profile",
            Self::Timeline => "timeline",
            Self::End => "end",
        }
    }
}

impl Page<'_> {
    pub fn kind(&self) -> PageKind {
        match self {
            Self::Title { .. } => PageKind::Title,
            Self::Profile { .. } => PageKind::Profile,
            Self::Timeline { .. } => PageKind::Timeline,
            Self::End { .. } => PageKind::End,
        }
    }
}

/// Resolves `index` against `doc`.
pub fn resolve(index: usize, doc: &Document) -> Page<'_> {
    if index == 0 {
        return Page::Title {
            title: doc.title.as_str(),
            icon_url: doc.icon_url.as_str(),
            color: doc.color(),
        };
    }

    let profile_offset = index - 1;
    if let Some(profile) = doc.profile(profile_offset) {
        return Page::Profile {
            index: profile_offset,
            profile,
        };
    }

    // Profiles are exhausted here, so the subtraction cannot underflow.
    let timeline_offset = profile_offset - doc.profiles.len();
    if let Some(timeline) = doc.timeline(timeline_offset) {
        return Page::Timeline {
            index: timeline_offset,
            timeline,
        };
    }

    Page::End {
        icon_url: doc.icon_url.as_str(),
        color: doc.color(),
    }
}
