//! Timeline layout math.
//!
//! # Responsibility
//! - Derive the inclusive year range for a timeline.
//! - Compute per-year column width and per-item start/end margins for a given
//!   rendered width.
//! - Produce axis labels (raw year or grade label).
//!
//! # Invariants
//! - Year ranges are never empty; reversed ranges clamp to the start year.
//! - Layout output is a pure function of its inputs.
//! - `TimelineView` recomputes margins on every width change.

pub mod timeline;
pub mod view;
