//! WebAssembly bindings for calendar-delta.
//!
//! Each export accepts whatever the browser hands it: an ISO string, a
//! `Date` object, a number of epoch milliseconds, `null`, or `undefined`.
//! A falsy start produces zero. An omitted (`undefined`) reference means
//! today. Nothing here throws; values the engine cannot use produce zero.

use calendar_delta::{DateInput, YmdDelta};
use wasm_bindgen::prelude::*;

/// Years, months and days, exposed to JS as plain number getters.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ymd {
    pub years: f64,
    pub months: f64,
    pub days: f64,
}

impl From<YmdDelta> for Ymd {
    fn from(delta: YmdDelta) -> Self {
        Self {
            years: delta.years as f64,
            months: delta.months as f64,
            days: delta.days as f64,
        }
    }
}

#[wasm_bindgen(js_name = monthsSince)]
pub fn months_since(from: JsValue, reference: JsValue) -> f64 {
    match inputs(&from, &reference) {
        Some((from, reference)) => calendar_delta::months_since(from, reference) as f64,
        None => 0.0,
    }
}

#[wasm_bindgen(js_name = weeksSince)]
pub fn weeks_since(from: JsValue, reference: JsValue) -> f64 {
    match inputs(&from, &reference) {
        Some((from, reference)) => calendar_delta::weeks_since(from, reference) as f64,
        None => 0.0,
    }
}

#[wasm_bindgen(js_name = ymdSince)]
pub fn ymd_since(from: JsValue, reference: JsValue) -> Ymd {
    inputs(&from, &reference)
        .map(|(from, reference)| calendar_delta::ymd_since(from, reference))
        .unwrap_or_default()
        .into()
}

fn inputs(from: &JsValue, reference: &JsValue) -> Option<(DateInput, DateInput)> {
    Some((
        start_input(JsDate::read(from))?,
        reference_input(JsDate::read(reference))?,
    ))
}

/// The observable shape of a JS value handed to an export.
#[derive(Debug, Clone, PartialEq)]
enum JsDate {
    Text(String),
    Number(f64),
    /// A `Date` object, carrying `getTime()` (NaN when invalid).
    Date(f64),
    Undefined,
    Null,
    /// Objects, booleans, and anything else the engine cannot read.
    Other,
}

impl JsDate {
    fn read(value: &JsValue) -> Self {
        if let Some(date) = value.dyn_ref::<js_sys::Date>() {
            Self::Date(date.get_time())
        } else if let Some(text) = value.as_string() {
            Self::Text(text)
        } else if let Some(number) = value.as_f64() {
            Self::Number(number)
        } else if value.is_undefined() {
            Self::Undefined
        } else if value.is_null() {
            Self::Null
        } else {
            Self::Other
        }
    }
}

/// Falsy starts (`undefined`, `null`, `0`, `NaN`, and blank text via the
/// engine) are absent. `None` means present but unreadable.
fn start_input(value: JsDate) -> Option<DateInput> {
    match value {
        JsDate::Text(text) => Some(DateInput::Text(text)),
        JsDate::Number(ms) if ms == 0.0 || ms.is_nan() => Some(DateInput::Absent),
        JsDate::Number(ms) | JsDate::Date(ms) => millis(ms),
        JsDate::Undefined | JsDate::Null => Some(DateInput::Absent),
        JsDate::Other => None,
    }
}

/// Only `undefined` defaults to today; `null` is unusable.
fn reference_input(value: JsDate) -> Option<DateInput> {
    match value {
        JsDate::Text(text) => Some(DateInput::Text(text)),
        JsDate::Number(ms) | JsDate::Date(ms) => millis(ms),
        JsDate::Undefined => Some(DateInput::Absent),
        JsDate::Null | JsDate::Other => None,
    }
}

fn millis(ms: f64) -> Option<DateInput> {
    ms.is_finite()
        .then(|| DateInput::TimestampMillis(ms.trunc() as i64))
}
