//! Text formatting for worklog entries.
//!
//! Durations are rendered in Jira's own short form (`7h`, `6h 35m`), clock
//! times as `HH:MM` and the worklog start as the millisecond timestamp with a
//! numeric offset that the worklog endpoint expects.
//!
//! ## Examples
//!
//! ```rust
//! use jira_worklog::libs::formatter::format_minutes;
//!
//! assert_eq!(format_minutes(420), "7h");
//! assert_eq!(format_minutes(395), "6h 35m");
//! ```

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Formats a minute count as `Xh Ym`, or `Xh` when the remainder is zero.
pub fn format_minutes(minutes: i64) -> String {
    let hours = minutes.div_euclid(60);
    let rest = minutes.rem_euclid(60);
    if rest == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, rest)
    }
}

/// `YYYY-MM-DDTHH:MM:SS.mmm±HHMM`
pub fn format_started<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%Y-%m-%dT%H:%M:%S%.3f%z").to_string()
}

/// `HH:MM–HH:MM`
pub fn format_time_range<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("{}–{}", start.format("%H:%M"), end.format("%H:%M"))
}

/// `Www, DD Mmm YYYY`
pub fn format_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%a, %d %b %Y").to_string()
}
