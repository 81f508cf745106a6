pub mod storage;
pub mod style;

use chrono::{Datelike, Local};

/// Year for the footer copyright line.
pub fn current_year() -> i32 {
    Local::now().year()
}
