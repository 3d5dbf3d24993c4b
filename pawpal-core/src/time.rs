//! Clock helpers: day anchoring, `HH:MM` rendering and "today" in a timezone.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::error::ValidationError;

/// Hour of day at which the first task of a schedule starts.
pub const DAY_START_HOUR: i64 = 6;

/// Local wall-clock start of the scheduling day.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(DAY_START_HOUR)
}

pub fn format_hhmm(at: NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

/// Render a half-open window as "HH:MM-HH:MM".
pub fn format_window(start: NaiveDateTime, end: NaiveDateTime) -> String {
    format!("{}-{}", format_hhmm(start), format_hhmm(end))
}

/// The calendar date at `now` in an IANA timezone like "America/Chicago".
pub fn date_in_tz(now: DateTime<Utc>, tz: &str) -> Result<NaiveDate, ValidationError> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| ValidationError::UnknownTimezone(tz.to_string()))?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// Today's date in `tz`. Reads the system clock once.
pub fn today_in(tz: &str) -> Result<NaiveDate, ValidationError> {
    date_in_tz(Utc::now(), tz)
}
