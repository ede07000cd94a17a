//! Recurrence-date generation — converts a repeat rule into the concrete,
//! ordered list of calendar dates a repeating event occurs on.
//!
//! The walk keeps two invariants that naive add-a-month arithmetic breaks:
//!
//! 1. **Emission is gated on the anchor.** A monthly series anchored on the
//!    31st emits nothing in a 30-day month; a yearly series anchored on
//!    Feb 29 emits nothing in a non-leap year. Short periods are *omitted*,
//!    never clamped to a nearby day.
//! 2. **Each step re-derives from the anchor, not the previous cursor.**
//!    Jan 31 plus "one month" would overflow into Mar 3 and drift the rest
//!    of the series. The monthly step goes through day 1 of the month and
//!    re-applies the anchor day, so a clamped cursor can never compound.

use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::calendar::{days_in_month, format_date, parse_date};
use crate::error::{RecurError, Result};
use crate::rule::{RecurrenceRule, RepeatType};

/// Horizon applied when no end date is given: the series runs one year past
/// its start.
pub const DEFAULT_HORIZON_YEARS: i32 = 1;

/// Generate every occurrence date of a repeating event.
///
/// # Arguments
/// - `start_date` -- first occurrence, `YYYY-MM-DD`
/// - `repeat` -- how the series repeats
/// - `interval` -- step count between occurrences (1 = every period)
/// - `end_date` -- optional inclusive cutoff, `YYYY-MM-DD`; defaults to
///   [`DEFAULT_HORIZON_YEARS`] after the start
///
/// The result is strictly increasing, starts at `start_date`, and stays
/// within the inclusive bound. For [`RepeatType::None`] it is exactly the
/// start date.
///
/// # Errors
/// Returns `RecurError::InvalidDate` for a malformed date string,
/// `RecurError::InvalidInterval` when `interval < 1`, and
/// `RecurError::EndBeforeStart` when the end bound precedes the start.
pub fn generate_occurrences(
    start_date: &str,
    repeat: RepeatType,
    interval: u32,
    end_date: Option<&str>,
) -> Result<Vec<String>> {
    if interval < 1 {
        return Err(RecurError::InvalidInterval(interval));
    }

    let start = parse_date(start_date)?;

    if repeat == RepeatType::None {
        return Ok(vec![format_date(start)]);
    }

    let end = match end_date {
        Some(raw) => {
            let end = parse_date(raw)?;
            if end < start {
                return Err(RecurError::EndBeforeStart {
                    start: format_date(start),
                    end: format_date(end),
                });
            }
            end
        }
        None => default_end_bound(start).ok_or(RecurError::OutOfRange)?,
    };

    // The anchor is fixed by the start date and never moves.
    let anchor_day = start.day();
    let anchor_month = start.month();

    let mut dates = Vec::new();
    let mut cursor = start;

    while cursor <= end {
        if qualifies(cursor, repeat, anchor_day, anchor_month) {
            dates.push(format_date(cursor));
        }
        cursor = match advance(cursor, repeat, interval, anchor_day, anchor_month) {
            Some(next) => next,
            // Ran off the representable calendar; nothing further can be <= end.
            None => break,
        };
    }

    Ok(dates)
}

/// [`generate_occurrences`] taking the rule as a struct.
pub fn generate_for_rule(
    start_date: &str,
    rule: &RecurrenceRule,
    end_date: Option<&str>,
) -> Result<Vec<String>> {
    generate_occurrences(start_date, rule.repeat, rule.interval, end_date)
}

/// The default inclusive cutoff: same month and day, one year later.
///
/// A Feb 29 start has no twin in the following year; the bound rolls over
/// to Mar 1, matching how a day-preserving year shift lands.
fn default_end_bound(start: NaiveDate) -> Option<NaiveDate> {
    let year = start.year().checked_add(DEFAULT_HORIZON_YEARS)?;
    NaiveDate::from_ymd_opt(year, start.month(), start.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Whether the cursor's current date is a real member of the series.
///
/// Monthly and yearly cursors can sit on a clamped day after stepping
/// through a short month (or a non-leap February); those positions exist
/// only to keep the walk moving and must not be emitted.
fn qualifies(cursor: NaiveDate, repeat: RepeatType, anchor_day: u32, anchor_month: u32) -> bool {
    match repeat {
        RepeatType::Monthly => cursor.day() == anchor_day,
        RepeatType::Yearly => cursor.month() == anchor_month && cursor.day() == anchor_day,
        _ => true,
    }
}

/// Compute the next cursor position from the anchor.
///
/// Returns `None` only when the step leaves chrono's representable range.
fn advance(
    cursor: NaiveDate,
    repeat: RepeatType,
    interval: u32,
    anchor_day: u32,
    anchor_month: u32,
) -> Option<NaiveDate> {
    match repeat {
        RepeatType::None => None,
        RepeatType::Daily => cursor.checked_add_signed(Duration::days(i64::from(interval))),
        RepeatType::Weekly => cursor.checked_add_signed(Duration::days(7 * i64::from(interval))),
        RepeatType::Monthly => {
            // Step from day 1 so a short target month can never overflow into
            // the month after it, then re-apply the anchor day, clamped.
            let stepped = cursor.with_day(1)?.checked_add_months(Months::new(interval))?;
            let day = anchor_day.min(days_in_month(stepped.year(), stepped.month()));
            stepped.with_day(day)
        }
        RepeatType::Yearly => {
            let year = cursor.year().checked_add(interval as i32)?;
            // Feb 29 has no target in a non-leap year; park the cursor on the
            // clamped day so the walk continues. It fails the emission test.
            NaiveDate::from_ymd_opt(year, anchor_month, anchor_day).or_else(|| {
                let day = anchor_day.min(days_in_month(year, anchor_month));
                NaiveDate::from_ymd_opt(year, anchor_month, day)
            })
        }
    }
}
