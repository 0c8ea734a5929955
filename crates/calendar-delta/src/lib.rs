//! # calendar-delta
//!
//! Calendar-aware elapsed time for life calendars.
//!
//! Converts a historical date into human-meaningful elapsed units relative
//! to a reference date: full months, full weeks, or a years/months/days
//! triple. All arithmetic is date-only on the proleptic Gregorian calendar.
//! The operations never fail; unusable input yields a neutral result.
//!
//! ## Modules
//!
//! - [`date`] — `CalendarDate`, `DateInput`, and input normalization
//! - [`delta`] — `months_since`, `weeks_since`, `ymd_since`, `summarize`
//! - [`error`] — Error types for direct parsing
//!
//! ```
//! use calendar_delta::{months_since, weeks_since, ymd_since, YmdDelta};
//!
//! assert_eq!(months_since("2024-02-10", "2024-03-10"), 1);
//! assert_eq!(weeks_since("2024-03-03", "2024-03-10"), 1);
//! assert_eq!(
//!     ymd_since("2022-01-10", "2024-03-15"),
//!     YmdDelta { years: 2, months: 2, days: 5 }
//! );
//! ```

pub mod date;
pub mod delta;
pub mod error;

pub use date::{today, CalendarDate, DateInput};
pub use delta::{
    months_between, months_since, months_since_now, summarize, summarize_now, weeks_between,
    weeks_since, weeks_since_now, ymd_between, ymd_since, ymd_since_now, LifeSummary, YmdDelta,
};
pub use error::DeltaError;
