//! Age calculation in whole months
//!
//! Reference tables key age-based rows by integer months, so age is always
//! floored: a child one day short of 24 months is 23 months old.

use chrono::{Datelike, Months, NaiveDate};
use log::warn;

/// Whole months elapsed between `start` and `end`
///
/// A month is counted once its calendar anniversary has been reached, with
/// chrono's end-of-month clamping (born Jan 31, Feb 28 counts as one month).
/// Returns `None` when `end` is before `start`.
#[must_use]
pub fn months_between(start: NaiveDate, end: NaiveDate) -> Option<u32> {
    if end < start {
        return None;
    }

    let calendar_months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    let months = u32::try_from(calendar_months).ok()?;

    match start.checked_add_months(Months::new(months)) {
        Some(anniversary) if anniversary <= end => Some(months),
        _ => months.checked_sub(1),
    }
}

/// Age in whole months on `today`, or `None` without a usable birthdate
#[must_use]
pub fn age_in_months(birthdate: Option<NaiveDate>, today: NaiveDate) -> Option<u32> {
    let birthdate = birthdate?;
    let months = months_between(birthdate, today);
    if months.is_none() {
        warn!("Birthdate {birthdate} is after evaluation date {today}, age unavailable");
    }
    months
}
