//! Calendar arithmetic shared by the recurrence generator and the views.
//!
//! Everything here works on plain `NaiveDate` values at day granularity —
//! time zones and times-of-day are out of scope for the engine.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{RecurError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month (1-based, January = 1).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Parse a strict `YYYY-MM-DD` calendar-date string.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| RecurError::InvalidDate(raw.to_string()))
}

/// Format a date back to `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Whether `date` falls within `[start, end]`, inclusive on both ends.
pub fn is_date_in_range(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// The Sunday-first week containing `date` — one month-view row.
pub fn week_dates(date: NaiveDate) -> [NaiveDate; 7] {
    let back = i64::from(date.weekday().num_days_from_sunday());
    let sunday = date - Duration::days(back);
    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// The month-view grid: one row per week, day numbers in Sunday-first
/// columns, `None` for the leading and trailing blanks.
///
/// Returns an empty grid for a month outside 1..=12.
pub fn month_grid(year: i32, month: u32) -> Vec<[Option<u32>; 7]> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let offset = first.weekday().num_days_from_sunday() as usize;
    let last_day = days_in_month(year, month);

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    for day in 1..=last_day {
        let column = (offset + day as usize - 1) % 7;
        week[column] = Some(day);
        if column == 6 || day == last_day {
            weeks.push(week);
            week = [None; 7];
        }
    }
    weeks
}

/// Which week of which month a date belongs to, for week-view headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekOfMonth {
    pub year: i32,
    pub month: u32,
    /// 1-based week number within the month.
    pub week: u32,
}

/// Assign `date`'s week to a month and number it within that month.
///
/// A week belongs to the month containing its Thursday, and week numbers
/// count from the month's first Thursday. A late-August Sunday therefore
/// lands in week 1 of September, not week 5 of August.
pub fn week_of_month(date: NaiveDate) -> WeekOfMonth {
    let to_thursday = 4 - i64::from(date.weekday().num_days_from_sunday());
    let thursday = date + Duration::days(to_thursday);

    // Weekday of the 1st of the Thursday's month, from the Thursday itself.
    let first_dow = (i64::from(thursday.weekday().num_days_from_sunday())
        - i64::from(thursday.day() - 1))
    .rem_euclid(7);
    let first_thursday = 1 + (4 - first_dow).rem_euclid(7);
    let week = (i64::from(thursday.day()) - first_thursday) / 7 + 1;

    WeekOfMonth {
        year: thursday.year(),
        month: thursday.month(),
        week: week as u32,
    }
}
