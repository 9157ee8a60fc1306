//! Calendar arithmetic shared by the read side.

use chrono::NaiveDate;

const DAYS_PER_YEAR: f64 = 365.25;

/// Age in whole years on `today`, derived from `birth_date`.
///
/// Computed as elapsed days divided by the mean year length and rounded
/// to the nearest integer, so a person can tick over to the next age a
/// day or two around their calendar birthday.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i64 {
    let days = (today - birth_date).num_days() as f64;
    (days / DAYS_PER_YEAR).round() as i64
}

/// Render a date as `dd Mon yyyy`, e.g. `05 Mar 2000`.
///
/// This is the presentation format used by text search over birth dates.
pub fn format_day_month_year(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}
