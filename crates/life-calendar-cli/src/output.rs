//! Plain-text and JSON rendering of delta results.

use calendar_delta::{LifeSummary, YmdDelta};
use serde_json::{Map, Value};

/// "2 years, 2 months, 5 days"
pub fn format_ymd(delta: &YmdDelta) -> String {
    format!(
        "{} {}, {} {}, {} {}",
        delta.years,
        unit(delta.years, "year"),
        delta.months,
        unit(delta.months, "month"),
        delta.days,
        unit(delta.days, "day"),
    )
}

pub fn format_summary(summary: &LifeSummary) -> String {
    format!(
        "start:     {}\nreference: {}\nmonths:    {}\nweeks:     {}\nelapsed:   {}",
        summary.start,
        summary.reference,
        summary.months,
        summary.weeks,
        format_ymd(&summary.ymd),
    )
}

/// `{"months": n}` / `{"weeks": n}`
pub fn count_json(key: &str, value: i64) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), Value::from(value));
    Value::Object(map)
}

fn unit(n: i64, singular: &str) -> String {
    if n.abs() == 1 {
        singular.to_string()
    } else {
        format!("{singular}s")
    }
}
