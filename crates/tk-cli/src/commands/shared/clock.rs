use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Today's date on the user's local calendar.
///
/// Deadlines are calendar dates the user typed, so "today" follows the local
/// zone rather than UTC.
pub fn today() -> NaiveDate {
    date_in(Utc::now(), &Local)
}

fn date_in<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    now.with_timezone(tz).date_naive()
}
