//! Presentation state container.
//!
//! # Responsibility
//! - Hold the navigation state the UI shell needs (page index, detail overlay
//!   target, reset prompt visibility).
//! - Apply discrete user intents as synchronous state transitions.
//! - Project state + document into a render-ready `Screen`.
//!
//! # Invariants
//! - `page_index` stays within `[0, last_page_index]` of the held document.
//! - A detail target always points at an existing item of the current
//!   timeline page.
//! - The reset prompt is only visible on the end page.

mod render;
mod state;

pub use render::{DetailView, ResetPrompt, Screen, END_PAGE_LABEL};
pub use state::{DetailTarget, Intent, Presenter, ShellState};
