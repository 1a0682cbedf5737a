//! Today's work window in the configured timezone.

use super::config::Schedule;
use super::error::WorklogError;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

/// Start/end of the entry plus its length in whole minutes.
///
/// Always satisfies `end > start`.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub minutes: i64,
}

impl TimeWindow {
    /// Builds the window on the local date of `now` in `timezone`.
    pub fn compute(timezone: Tz, schedule: &Schedule, now: DateTime<Utc>) -> Result<Self, WorklogError> {
        let today = now.with_timezone(&timezone).date_naive();
        let start = local_time(timezone, today, schedule.start_hour, schedule.start_min)?;
        let end = local_time(timezone, today, schedule.end_hour, schedule.end_min)?;

        if end <= start {
            return Err(WorklogError::InvalidWindow("END must be after START".to_string()));
        }

        let minutes = (end - start).num_seconds().div_euclid(60);
        tracing::debug!(%start, %end, minutes, "computed work window");
        Ok(Self { start, end, minutes })
    }
}

fn local_time(timezone: Tz, date: NaiveDate, hour: u32, minute: u32) -> Result<DateTime<Tz>, WorklogError> {
    let naive = date
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| WorklogError::InvalidWindow(format!("{:02}:{:02} is not a valid time of day", hour, minute)))?;

    // Ambiguous times (DST fall-back) take the first occurrence.
    timezone.from_local_datetime(&naive).earliest().ok_or_else(|| {
        WorklogError::InvalidWindow(format!(
            "{} does not exist in {} on {}",
            naive.format("%H:%M"),
            timezone.name(),
            date
        ))
    })
}
