//! Tabular rows as returned by breakdown queries.

use serde_json::{Map, Value};

/// Name of the count field every breakdown row carries.
pub const VISITORS: &str = "visitors";

/// One breakdown bucket, e.g. `{"country": "DE", "visitors": 9}`.
///
/// Key order follows the upstream response (`serde_json` is built with
/// `preserve_order`).
pub type Row = Map<String, Value>;

pub type RowSet = Vec<Row>;

/// Numeric value of `field`. Integers, floats and numeric strings are accepted;
/// `null`, missing fields and anything else yield `None`.
pub fn count(row: &Row, field: &str) -> Option<f64> {
    match row.get(field)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Non-empty textual value of `field`. Numbers are rendered as text so that
/// numeric dimensions (e.g. city ids) still count as present.
pub fn text(row: &Row, field: &str) -> Option<String> {
    match row.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Interpret a decoded response body as a row set.
///
/// Returns `None` when the payload is not an array. Array items that are not
/// objects are skipped.
pub fn rows_from_value(value: Value) -> Option<RowSet> {
    match value {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(row) => Some(row),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}
