//! Elapsed calendar units between a start date and a reference date.
//!
//! Every public operation here is total: unusable input (a missing start
//! date, text that does not name a real day, an out-of-range timestamp)
//! produces the operation's neutral value instead of an error. Callers that
//! want to tell "zero elapsed" apart from "nothing to compute" should use
//! [`summarize`], which returns `None` in the latter case.
//!
//! Sign convention: positive results mean the start date lies in the past
//! relative to the reference; negative results mean it lies in the future.
//!
//! # Functions
//!
//! - [`months_since`] — Full calendar months, by day-of-month comparison
//! - [`weeks_since`] — Full 7-day blocks, truncated toward zero
//! - [`ymd_since`] — Years, then months, then days, by calendar cascade
//! - [`summarize`] — All of the above for one normalized pair of dates
//!
//! Each has a `*_now` variant that reads the local clock for the reference.

use serde::Serialize;
use tracing::debug;

use crate::date::{today, CalendarDate, DateInput};
use crate::error::{DeltaError, Result};

// ── Result types ────────────────────────────────────────────────────────────

/// A years/months/days decomposition of the distance between two dates.
///
/// Adding `years` years, then `months` months, then `days` days to the start
/// date yields the reference date. Components need not share a sign when the
/// reference precedes the start: 2024-03-20 → 2024-03-15 is `{0, 0, -5}`,
/// while 2024-04-30 → 2024-03-31 is `{0, -1, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct YmdDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
}

impl YmdDelta {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Every delta for one pair of normalized dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeSummary {
    /// The normalized start date.
    pub start: CalendarDate,
    /// The normalized reference date.
    pub reference: CalendarDate,
    /// Full months, as computed by [`months_between`].
    pub months: i64,
    /// Full weeks, as computed by [`weeks_between`].
    pub weeks: i64,
    /// Calendar cascade, as computed by [`ymd_between`].
    pub ymd: YmdDelta,
}

// ── months_since ────────────────────────────────────────────────────────────

/// Number of full calendar months from `from` until `reference`.
///
/// An absent `reference` means today.
///
/// # Examples
///
/// ```
/// use calendar_delta::months_since;
///
/// assert_eq!(months_since("2024-02-10", "2024-03-10"), 1);
/// assert_eq!(months_since("2024-02-11", "2024-03-10"), 0);
/// assert_eq!(months_since("2024-04-10", "2024-03-10"), -1);
/// assert_eq!(months_since(None::<&str>, "2024-03-10"), 0);
/// ```
pub fn months_since(from: impl Into<DateInput>, reference: impl Into<DateInput>) -> i64 {
    resolve("months_since", from.into(), reference.into())
        .map_or(0, |(start, end)| months_between(start, end))
}

/// [`months_since`] measured against today's local date.
pub fn months_since_now(from: impl Into<DateInput>) -> i64 {
    months_since(from, today())
}

/// Full months between two normalized dates.
///
/// The raw month span is pulled one step toward zero when the reference's
/// day of month has not yet reached the start's (past start) or has already
/// gone beyond it (future start).
pub fn months_between(start: CalendarDate, end: CalendarDate) -> i64 {
    let raw = raw_month_span(start, end);
    if raw > 0 && end.day() < start.day() {
        raw - 1
    } else if raw < 0 && end.day() > start.day() {
        raw + 1
    } else {
        raw
    }
}

// ── weeks_since ─────────────────────────────────────────────────────────────

/// Number of full 7-day blocks from `from` until `reference`.
///
/// Partial weeks are dropped on both sides of zero: six days in either
/// direction is 0, seven days is 1 (past) or -1 (future).
///
/// # Examples
///
/// ```
/// use calendar_delta::weeks_since;
///
/// assert_eq!(weeks_since("2024-03-03", "2024-03-10"), 1);
/// assert_eq!(weeks_since("2024-03-04", "2024-03-10"), 0);
/// assert_eq!(weeks_since("2024-03-17", "2024-03-10"), -1);
/// ```
pub fn weeks_since(from: impl Into<DateInput>, reference: impl Into<DateInput>) -> i64 {
    resolve("weeks_since", from.into(), reference.into())
        .map_or(0, |(start, end)| weeks_between(start, end))
}

/// [`weeks_since`] measured against today's local date.
pub fn weeks_since_now(from: impl Into<DateInput>) -> i64 {
    weeks_since(from, today())
}

/// Full weeks between two normalized dates.
pub fn weeks_between(start: CalendarDate, end: CalendarDate) -> i64 {
    // Integer division truncates toward zero: floor for past, ceil for future.
    start.days_until(end) / 7
}

// ── ymd_since ───────────────────────────────────────────────────────────────

/// Years, months and days from `from` until `reference`.
///
/// # Examples
///
/// ```
/// use calendar_delta::{ymd_since, YmdDelta};
///
/// let delta = ymd_since("2022-01-10", "2024-03-15");
/// assert_eq!(delta, YmdDelta { years: 2, months: 2, days: 5 });
///
/// let ahead = ymd_since("2024-03-20", "2024-03-15");
/// assert_eq!(ahead, YmdDelta { years: 0, months: 0, days: -5 });
/// ```
pub fn ymd_since(from: impl Into<DateInput>, reference: impl Into<DateInput>) -> YmdDelta {
    let Some((start, end)) = resolve("ymd_since", from.into(), reference.into()) else {
        return YmdDelta::default();
    };
    ymd_between(start, end).unwrap_or_else(|e| {
        debug!(op = "ymd_since", %start, %end, error = %e, "calendar arithmetic absorbed");
        YmdDelta::default()
    })
}

/// [`ymd_since`] measured against today's local date.
pub fn ymd_since_now(from: impl Into<DateInput>) -> YmdDelta {
    ymd_since(from, today())
}

/// Calendar cascade between two normalized dates.
///
/// Whole years are taken first, then whole months from the date those years
/// land on, then the remaining days from the date those months land on. Each
/// step uses calendar-unit addition with end-of-month clamping, so Feb 29
/// plus one year is Feb 28.
///
/// Month counts are measured from whichever date has the larger day of
/// month, so a future start can leave a positive day remainder
/// (2024-04-30 → 2024-03-31 is -1 month, +1 day).
///
/// # Errors
///
/// Returns [`DeltaError::Overflow`] if an intermediate date is not
/// representable.
pub fn ymd_between(start: CalendarDate, end: CalendarDate) -> Result<YmdDelta> {
    let years = elapsed_months(start, end)? / 12;
    let after_years = start.add_years(years)?;

    let months = elapsed_months(after_years, end)?;
    let after_months = after_years.add_months(months)?;

    Ok(YmdDelta {
        years,
        months,
        days: after_months.days_until(end),
    })
}

// ── summarize ───────────────────────────────────────────────────────────────

/// Compute every delta for one pair of inputs.
///
/// Returns `None` when either input is unusable, where the individual
/// operations would return their neutral value.
///
/// # Examples
///
/// ```
/// use calendar_delta::summarize;
///
/// let summary = summarize("2024-03-03", "2024-03-10").unwrap();
/// assert_eq!(summary.weeks, 1);
/// assert!(summarize("not-a-date", "2024-03-10").is_none());
/// ```
pub fn summarize(
    from: impl Into<DateInput>,
    reference: impl Into<DateInput>,
) -> Option<LifeSummary> {
    let (start, end) = resolve("summarize", from.into(), reference.into())?;
    let ymd = match ymd_between(start, end) {
        Ok(ymd) => ymd,
        Err(e) => {
            debug!(op = "summarize", %start, %end, error = %e, "calendar arithmetic absorbed");
            return None;
        }
    };
    Some(LifeSummary {
        start,
        reference: end,
        months: months_between(start, end),
        weeks: weeks_between(start, end),
        ymd,
    })
}

/// [`summarize`] measured against today's local date.
pub fn summarize_now(from: impl Into<DateInput>) -> Option<LifeSummary> {
    summarize(from, today())
}

// ── Internal helpers ────────────────────────────────────────────────────────

/// Normalize both inputs. An omitted reference is today; blank reference
/// text is unusable like any other unparseable text.
fn normalize_pair(from: &DateInput, reference: &DateInput) -> Result<(CalendarDate, CalendarDate)> {
    let start = from.to_calendar_date()?;
    let end = if matches!(reference, DateInput::Absent) {
        today()
    } else {
        reference.to_calendar_date()?
    };
    Ok((start, end))
}

/// Normalize both inputs, logging and absorbing anything unusable.
fn resolve(
    op: &'static str,
    from: DateInput,
    reference: DateInput,
) -> Option<(CalendarDate, CalendarDate)> {
    match normalize_pair(&from, &reference) {
        Ok(pair) => Some(pair),
        Err(DeltaError::Absent) if from.is_absent() => {
            debug!(op, "no start date");
            None
        }
        Err(e) => {
            debug!(op, ?from, ?reference, error = %e, "unusable date input");
            None
        }
    }
}

/// `(end.year - start.year) * 12 + (end.month - start.month)`
fn raw_month_span(start: CalendarDate, end: CalendarDate) -> i64 {
    (i64::from(end.year()) - i64::from(start.year())) * 12 + i64::from(end.month())
        - i64::from(start.month())
}

/// Largest month count, toward zero, that can be added to `start` without
/// passing `end`.
fn whole_months(start: CalendarDate, end: CalendarDate) -> Result<i64> {
    let raw = raw_month_span(start, end);
    let anchor = start.add_months(raw)?;
    Ok(if raw > 0 && anchor > end {
        raw - 1
    } else if raw < 0 && anchor < end {
        raw + 1
    } else {
        raw
    })
}

/// Whole months from `start` to `end`, anchored on the date with the larger
/// day of month.
fn elapsed_months(start: CalendarDate, end: CalendarDate) -> Result<i64> {
    if end.day() > start.day() {
        Ok(-whole_months(end, start)?)
    } else {
        whole_months(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn ymd(years: i64, months: i64, days: i64) -> YmdDelta {
        YmdDelta {
            years,
            months,
            days,
        }
    }

    const REF_MARCH_10: &str = "2024-03-10";
    const REF_MARCH_15: &str = "2024-03-15";

    // ── months_since tests ──────────────────────────────────────────────

    #[test]
    fn test_months_one_full_month() {
        assert_eq!(months_since("2024-02-10", REF_MARCH_10), 1);
    }

    #[test]
    fn test_months_not_yet_full() {
        assert_eq!(months_since("2024-02-11", REF_MARCH_10), 0);
    }

    #[test]
    fn test_months_future() {
        assert_eq!(months_since("2024-04-10", REF_MARCH_10), -1);
    }

    #[test]
    fn test_months_future_not_yet_full() {
        // Raw span -1, reference day 10 > start day 9 → pulled to 0.
        assert_eq!(months_since("2024-04-09", REF_MARCH_10), 0);
        assert_eq!(months_since("2024-05-09", REF_MARCH_10), -1);
    }

    #[test]
    fn test_months_same_month_is_zero_regardless_of_day() {
        assert_eq!(months_since("2024-03-01", REF_MARCH_10), 0);
        assert_eq!(months_since("2024-03-31", REF_MARCH_10), 0);
    }

    #[test]
    fn test_months_across_years() {
        assert_eq!(months_since("1990-06-15", "2024-03-10"), 404);
        assert_eq!(months_since("1990-06-10", "2024-03-10"), 405);
    }

    #[test]
    fn test_months_compares_day_of_month_not_clamped_end() {
        // Jan 31 → Feb 29: day 29 < 31, so the month is not counted.
        assert_eq!(months_since("2024-01-31", "2024-02-29"), 0);
        assert_eq!(months_since("2024-01-31", "2024-03-01"), 1);
    }

    #[test]
    fn test_months_ignores_time_of_day() {
        assert_eq!(months_since("2024-02-10T23:59:59", "2024-03-10T00:00:00"), 1);
    }

    #[test]
    fn test_months_absent_and_invalid() {
        assert_eq!(months_since(None::<&str>, REF_MARCH_10), 0);
        assert_eq!(months_since(DateInput::Absent, REF_MARCH_10), 0);
        assert_eq!(months_since("not-a-date", REF_MARCH_10), 0);
        assert_eq!(months_since("2020-01-01", "not-a-date"), 0);
    }

    // ── weeks_since tests ───────────────────────────────────────────────

    #[test]
    fn test_weeks_one_full_week() {
        assert_eq!(weeks_since("2024-03-03", REF_MARCH_10), 1);
    }

    #[test]
    fn test_weeks_partial_week() {
        assert_eq!(weeks_since("2024-03-04", REF_MARCH_10), 0);
    }

    #[test]
    fn test_weeks_future_full_week() {
        assert_eq!(weeks_since("2024-03-17", REF_MARCH_10), -1);
    }

    #[test]
    fn test_weeks_future_partial_week() {
        assert_eq!(weeks_since("2024-03-16", REF_MARCH_10), 0);
        assert_eq!(weeks_since("2024-03-24", REF_MARCH_10), -2);
        assert_eq!(weeks_since("2024-03-23", REF_MARCH_10), -1);
    }

    #[test]
    fn test_weeks_across_leap_day() {
        // 2024-02-25 → 2024-03-10 is 14 days (Feb has 29 days).
        assert_eq!(weeks_since("2024-02-25", REF_MARCH_10), 2);
        assert_eq!(weeks_since("2023-02-25", "2023-03-10"), 1);
    }

    #[test]
    fn test_weeks_absent_and_invalid() {
        assert_eq!(weeks_since(None::<String>, REF_MARCH_10), 0);
        assert_eq!(weeks_since("", REF_MARCH_10), 0);
        assert_eq!(weeks_since("2024-02-30", REF_MARCH_10), 0);
    }

    // ── ymd_since tests ─────────────────────────────────────────────────

    #[test]
    fn test_ymd_basic() {
        assert_eq!(ymd_since("2022-01-10", REF_MARCH_15), ymd(2, 2, 5));
    }

    #[test]
    fn test_ymd_days_only() {
        assert_eq!(ymd_since("2024-03-10", REF_MARCH_15), ymd(0, 0, 5));
    }

    #[test]
    fn test_ymd_future_within_month_has_negative_days() {
        assert_eq!(ymd_since("2024-03-20", REF_MARCH_15), ymd(0, 0, -5));
    }

    #[test]
    fn test_ymd_future_beyond_a_year() {
        assert_eq!(ymd_since("2025-06-15", "2024-03-10"), ymd(-1, -3, -5));
    }

    #[test]
    fn test_ymd_future_start_anchors_on_month_end_reference() {
        // The reference has the larger day of month, so months are counted
        // back from it: Mar 31 + 1 month clamps to Apr 30.
        assert_eq!(ymd_since("2024-04-30", "2024-03-31"), ymd(0, -1, 1));
        assert_eq!(ymd_since("2023-02-28", "2023-01-31"), ymd(0, -1, 3));
    }

    #[test]
    fn test_ymd_future_start_later_day_unchanged() {
        assert_eq!(ymd_since("2024-04-30", "2024-03-29"), ymd(0, -1, -1));
    }

    #[test]
    fn test_ymd_month_not_yet_full() {
        // Jan 20 → Mar 15: Feb 20 is one full month, 24 days remain.
        assert_eq!(ymd_since("2024-01-20", REF_MARCH_15), ymd(0, 1, 24));
    }

    #[test]
    fn test_ymd_end_of_month_clamping() {
        // Jan 31 + 1 month clamps to Feb 29 (2024); one day more to Mar 1.
        assert_eq!(ymd_since("2024-01-31", "2024-03-01"), ymd(0, 1, 1));
        assert_eq!(ymd_since("2023-01-31", "2023-03-01"), ymd(0, 1, 1));
        assert_eq!(ymd_since("2024-01-31", "2024-02-29"), ymd(0, 1, 0));
    }

    #[test]
    fn test_ymd_leap_day_to_non_leap_year() {
        assert_eq!(ymd_since("2024-02-29", "2025-02-28"), ymd(1, 0, 0));
        assert_eq!(ymd_since("2024-02-29", "2025-03-01"), ymd(1, 0, 1));
        assert_eq!(ymd_since("2024-02-29", "2025-02-27"), ymd(0, 11, 29));
    }

    #[test]
    fn test_ymd_leap_day_to_leap_year() {
        assert_eq!(ymd_since("2020-02-29", "2024-02-29"), ymd(4, 0, 0));
    }

    #[test]
    fn test_ymd_leap_day_year_short_by_one_day() {
        // Three whole years land on 2023-02-28 (clamped), from which
        // 2024-02-28 is exactly twelve months away.
        assert_eq!(ymd_since("2020-02-29", "2024-02-28"), ymd(3, 12, 0));
    }

    #[test]
    fn test_ymd_absent_and_invalid() {
        assert_eq!(ymd_since(None::<&str>, REF_MARCH_15), YmdDelta::default());
        assert_eq!(ymd_since("not-a-date", REF_MARCH_15), YmdDelta::default());
        assert!(ymd_since("garbage", REF_MARCH_15).is_zero());
    }

    #[test]
    fn test_ymd_round_trip_adds_back_to_reference() {
        let start = date(1987, 8, 31);
        let end = date(2024, 3, 15);
        let delta = ymd_between(start, end).unwrap();
        let rebuilt = start
            .add_years(delta.years)
            .and_then(|d| d.add_months(delta.months))
            .unwrap();
        assert_eq!(rebuilt.days_until(end), delta.days);
    }

    #[test]
    fn test_ymd_serializes_as_object() {
        let json = serde_json::to_value(ymd(2, 2, 5)).unwrap();
        assert_eq!(json["years"], 2);
        assert_eq!(json["months"], 2);
        assert_eq!(json["days"], 5);
    }

    // ── whole_months tests ──────────────────────────────────────────────

    #[test]
    fn test_whole_months_uses_clamped_anchor() {
        assert_eq!(whole_months(date(2024, 1, 31), date(2024, 2, 29)).unwrap(), 1);
        assert_eq!(whole_months(date(2024, 1, 31), date(2024, 2, 28)).unwrap(), 0);
        assert_eq!(whole_months(date(2024, 3, 31), date(2024, 2, 29)).unwrap(), -1);
        assert_eq!(whole_months(date(2024, 3, 30), date(2024, 2, 29)).unwrap(), -1);
    }

    // ── summarize tests ─────────────────────────────────────────────────

    #[test]
    fn test_summarize_collects_all_deltas() {
        let summary = summarize("2022-01-10", REF_MARCH_15).unwrap();
        assert_eq!(summary.start, date(2022, 1, 10));
        assert_eq!(summary.reference, date(2024, 3, 15));
        assert_eq!(summary.months, 26);
        assert_eq!(summary.weeks, 113);
        assert_eq!(summary.ymd, ymd(2, 2, 5));
    }

    #[test]
    fn test_summarize_unusable_is_none() {
        assert!(summarize(None::<&str>, REF_MARCH_15).is_none());
        assert!(summarize("2024-01-01", "2024-99-01").is_none());
    }

    #[test]
    fn test_summarize_serializes_dates_as_strings() {
        let summary = summarize("2024-03-03", REF_MARCH_10).unwrap();
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["start"], "2024-03-03");
        assert_eq!(json["reference"], "2024-03-10");
        assert_eq!(json["weeks"], 1);
    }

    // ── reference defaulting ────────────────────────────────────────────

    #[test]
    fn test_absent_reference_means_today() {
        let t = today();
        assert_eq!(months_since(t, DateInput::Absent), 0);
        assert_eq!(weeks_since(t, None::<&str>), 0);
        assert_eq!(summarize(t, DateInput::Absent).unwrap().reference, t);
        assert_eq!(summarize_now(t).unwrap().reference, t);
    }

    #[test]
    fn test_blank_reference_is_unusable() {
        assert_eq!(months_since("2000-01-01", ""), 0);
        assert_eq!(weeks_since("2000-01-01", "   "), 0);
        assert_eq!(ymd_since("2000-01-01", ""), YmdDelta::default());
        assert!(summarize("2000-01-01", "").is_none());
    }

    #[test]
    fn test_now_variants_match_explicit_today() {
        let start = "2000-01-01";
        let t = today();
        assert_eq!(months_since_now(start), months_since(start, t));
        assert_eq!(weeks_since_now(start), weeks_since(start, t));
        assert_eq!(ymd_since_now(start), ymd_since(start, t));
    }
}
