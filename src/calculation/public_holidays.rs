//! Public holiday calendar.
//!
//! Expands a [`HolidayCalendar`] rule into the concrete holiday dates of a
//! year. Movable feasts are placed relative to Easter Sunday, computed with
//! the anonymous Gregorian algorithm.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::config::HolidayCalendar;

/// Easter Sunday of a Gregorian year.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::easter_sunday;
/// use chrono::NaiveDate;
///
/// assert_eq!(easter_sunday(2019), NaiveDate::from_ymd_opt(2019, 4, 21));
/// assert_eq!(easter_sunday(2026), NaiveDate::from_ymd_opt(2026, 4, 5));
/// ```
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// All public holidays of `year` under `calendar`, in date order.
///
/// Fixed entries that do not exist in `year` (February 29th outside leap
/// years) are skipped. Holidays colliding on one date count once.
pub fn public_holidays(calendar: &HolidayCalendar, year: i32) -> BTreeSet<NaiveDate> {
    let mut dates: BTreeSet<NaiveDate> = calendar
        .fixed
        .iter()
        .filter_map(|h| NaiveDate::from_ymd_opt(year, h.month, h.day))
        .collect();

    if let Some(easter) = easter_sunday(year) {
        dates.extend(
            calendar
                .easter_relative
                .iter()
                .filter_map(|h| easter.checked_add_signed(Duration::days(h.offset_days))),
        );
    }

    dates
}
