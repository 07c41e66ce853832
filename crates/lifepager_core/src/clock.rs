//! Wall-clock year for ongoing timelines.

use chrono::{Datelike, Local};

/// Current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}
