//! Shared calendar helpers.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Formats a timestamp for log output.
pub fn format_timestamp(timestamp: NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Midnight at the start of the given day.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// First day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month after the one containing `date`, or `None` past the
/// end of the supported calendar.
pub fn first_day_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    first_day_of_month(date).checked_add_months(Months::new(1))
}
