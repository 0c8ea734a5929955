//! Calendar dates and the inputs they are normalized from.
//!
//! A [`CalendarDate`] is a day in the proleptic Gregorian calendar with no
//! time-of-day component. A [`DateInput`] is whatever a caller hands the
//! engine: text, a native date/time value, a browser-style epoch timestamp,
//! or nothing at all. Normalization turns the latter into the former and is
//! the only fallible step in the crate.
//!
//! Instants (values carrying an offset or an epoch timestamp) are projected
//! onto the ambient local calendar via [`chrono::Local`]. Naive values and
//! offset-free text are taken at face value.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, Local, Months, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};

use crate::error::{DeltaError, Result};

/// Local date-time layouts accepted in text input, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Date-only layouts accepted in text input.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

// ── CalendarDate ────────────────────────────────────────────────────────────

/// A single day in the proleptic Gregorian calendar.
///
/// Ordering and equality compare (year, month, day). Serializes as
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from a year, a one-based month and a day of month.
    ///
    /// # Errors
    ///
    /// Returns [`DeltaError::InvalidText`] if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| DeltaError::InvalidText(format!("{year:04}-{month:02}-{day:02}")))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// One-based month (1 = January).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Zero-based month (0 = January).
    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(self) -> NaiveDate {
        self.0
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Add a signed number of calendar months, clamping the day of month to
    /// the end of the target month (Jan 31 + 1 month = Feb 28/29).
    ///
    /// # Errors
    ///
    /// Returns [`DeltaError::Overflow`] if the result leaves chrono's
    /// representable range.
    pub fn add_months(self, months: i64) -> Result<Self> {
        let magnitude = u32::try_from(months.unsigned_abs()).map_err(|_| DeltaError::Overflow)?;
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(magnitude))
        } else {
            self.0.checked_sub_months(Months::new(magnitude))
        };
        shifted.map(Self).ok_or(DeltaError::Overflow)
    }

    /// Add a signed number of calendar years (twelve months each).
    ///
    /// # Errors
    ///
    /// Returns [`DeltaError::Overflow`] if the result is out of range.
    pub fn add_years(self, years: i64) -> Result<Self> {
        let months = years.checked_mul(12).ok_or(DeltaError::Overflow)?;
        self.add_months(months)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = DeltaError;

    fn from_str(s: &str) -> Result<Self> {
        parse_text(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DeltaError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}

// ── DateInput ───────────────────────────────────────────────────────────────

/// A date as supplied by a caller, before validation.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DateInput {
    /// No date (`null` / `undefined` / `None`).
    #[default]
    Absent,
    /// An ISO 8601 / RFC 3339 date or date-time string.
    Text(String),
    /// A local date-time with no offset.
    Naive(NaiveDateTime),
    /// An absolute instant, projected onto the local calendar.
    Instant(DateTime<FixedOffset>),
    /// Milliseconds since the Unix epoch, projected onto the local calendar.
    TimestampMillis(i64),
    /// An already normalized date.
    Date(CalendarDate),
}

impl DateInput {
    /// Normalize this input to a start-of-day calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`DeltaError::Absent`] for a missing (or blank) input, and
    /// [`DeltaError::InvalidText`] / [`DeltaError::TimestampOutOfRange`] for
    /// values that do not name a real calendar day.
    pub fn to_calendar_date(&self) -> Result<CalendarDate> {
        match self {
            Self::Absent => Err(DeltaError::Absent),
            Self::Text(s) => parse_text(s),
            Self::Naive(dt) => Ok(CalendarDate(dt.date())),
            Self::Instant(dt) => Ok(local_date(dt)),
            Self::TimestampMillis(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
                .map(|dt| local_date(&dt))
                .ok_or(DeltaError::TimestampOutOfRange(*ms)),
            Self::Date(d) => Ok(*d),
        }
    }

    /// Whether this input counts as a missing start date. Blank text does.
    pub fn is_absent(&self) -> bool {
        match self {
            Self::Absent => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for DateInput {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(CalendarDate(date))
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        Self::Naive(dt)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateInput {
    fn from(dt: DateTime<Tz>) -> Self {
        Self::Instant(dt.fixed_offset())
    }
}

impl From<CalendarDate> for DateInput {
    fn from(date: CalendarDate) -> Self {
        Self::Date(date)
    }
}

impl<T: Into<DateInput>> From<Option<T>> for DateInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

// ── Clock ───────────────────────────────────────────────────────────────────

/// Today's date on the local calendar.
pub fn today() -> CalendarDate {
    CalendarDate(Local::now().date_naive())
}

// ── Internal helpers ────────────────────────────────────────────────────────

fn local_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> CalendarDate {
    CalendarDate(dt.with_timezone(&Local).date_naive())
}

/// Parse date text in any of the accepted layouts.
fn parse_text(raw: &str) -> Result<CalendarDate> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(DeltaError::Absent);
    }

    try_rfc3339(s)
        .or_else(|| try_local_datetime(s))
        .or_else(|| try_date(s))
        .or_else(|| try_year_month(s))
        .or_else(|| try_year(s))
        .ok_or_else(|| DeltaError::InvalidText(s.to_string()))
}

/// "2024-03-10T23:30:00+02:00", "2024-03-10T21:30:00Z"
fn try_rfc3339(s: &str) -> Option<CalendarDate> {
    DateTime::parse_from_rfc3339(s).ok().map(|dt| local_date(&dt))
}

/// "2024-03-10T09:15", "2024-03-10 09:15:00.250"
fn try_local_datetime(s: &str) -> Option<CalendarDate> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| CalendarDate(dt.date()))
}

/// "2024-03-10", "2024/03/10"
fn try_date(s: &str) -> Option<CalendarDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
        .map(CalendarDate)
}

/// "2024-03" → first of the month.
fn try_year_month(s: &str) -> Option<CalendarDate> {
    let (year, month) = s.split_once('-')?;
    if year.len() != 4 || !(1..=2).contains(&month.len()) {
        return None;
    }
    let year = parse_digits(year)?;
    let month = u32::try_from(parse_digits(month)?).ok()?;
    NaiveDate::from_ymd_opt(year, month, 1).map(CalendarDate)
}

/// "2024" → January 1.
fn try_year(s: &str) -> Option<CalendarDate> {
    if s.len() != 4 {
        return None;
    }
    NaiveDate::from_ymd_opt(parse_digits(s)?, 1, 1).map(CalendarDate)
}

fn parse_digits(s: &str) -> Option<i32> {
    if s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}
