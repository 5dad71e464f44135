//! Time related utils.

use chrono::Utc;

/// DateTime used across qcloud, always in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format DateTime into calendar date: `2019-02-25`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y-%m-%d").to_string()
}

/// Build a DateTime from unix seconds, returns `None` if out of range.
pub fn from_timestamp(secs: i64) -> Option<DateTime> {
    DateTime::from_timestamp(secs, 0)
}
