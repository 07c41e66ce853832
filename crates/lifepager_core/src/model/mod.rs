//! Biography document model.
//!
//! # Responsibility
//! - Define the deserialized document shape consumed by page and layout logic.
//! - Keep JSON field naming and defaults in one place.
//!
//! # Invariants
//! - Documents are immutable after load; every derived value is recomputed
//!   from the document instead of cached on it.
//! - Missing optional fields take the documented defaults, unknown fields are
//!   ignored.

pub mod color;
pub mod document;
