//! Source of "today" for derived-field computation.

use chrono::{NaiveDate, Utc};

/// A date source. The person store holds one and consults it on every
/// read so that ages always reflect the current calendar; pure domain
/// code never calls the wall clock itself.
pub type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// The real calendar, in UTC.
pub fn system_clock() -> Clock {
    Box::new(|| Utc::now().date_naive())
}

/// A clock frozen at `today`, for deterministic age assertions.
pub fn fixed_clock(today: NaiveDate) -> Clock {
    Box::new(move || today)
}
