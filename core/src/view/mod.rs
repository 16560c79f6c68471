//! View models for the file pages.
//!
//! Each page holds only its own UI state (sort choice, form fields, target
//! id) and reads entity data from `FileState`; all writes go through the
//! store. Routing and rendering chrome belong to the host application — the
//! view models expose display strings, visibility flags, and navigation
//! targets for it to consume.

pub mod delete;
pub mod detail;
pub mod form;
pub mod list;

use chrono::NaiveDate;

/// Fixed display pattern for calendar dates, independent of the `YYYY-MM-DD`
/// wire form.
pub const LOCAL_DATE_FORMAT: &str = "%d/%m/%Y";

pub(crate) fn format_local_date(date: NaiveDate) -> String {
    date.format(LOCAL_DATE_FORMAT).to_string()
}
