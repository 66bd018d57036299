//! Post-processing of breakdown rows: cleanup, share of visitors and
//! conversion rate.

use serde_json::Value;
use tracing::warn;

use crate::analytics::{fetch_total_visitors, StatsApi};
use crate::row::{count, text, Row, RowSet, VISITORS};

pub const PERCENTAGE: &str = "percentage";
pub const CONVERSION_RATE: &str = "cr";

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Keep only `fields` in every row and drop incomplete rows.
///
/// `fields[0]` is the primary dimension: a row whose primary value is
/// missing, `null` or empty is dropped, as is a row without a `visitors`
/// count. Row order and each row's key order are preserved.
pub fn clean(fields: &[&str], rows: &[Row]) -> RowSet {
    let Some(primary) = fields.first() else {
        return Vec::new();
    };
    rows.iter()
        .filter(|row| text(row, primary).is_some() && count(row, VISITORS).is_some())
        .map(|row| {
            row.iter()
                .filter(|(key, _)| fields.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .collect()
}

/// Attach each row's share of the total visitor count.
///
/// The share is rounded to one decimal. A row holding the entire total gets
/// the integer `100` instead of `100.0`. When the total is zero the rows are
/// returned without a `percentage` field.
pub fn percentage(rows: &[Row]) -> RowSet {
    let total: f64 = rows.iter().filter_map(|row| count(row, VISITORS)).sum();
    if total <= 0.0 {
        return rows.to_vec();
    }
    rows.iter()
        .map(|row| {
            let visitors = count(row, VISITORS).unwrap_or(0.0);
            let share = if visitors == total {
                Value::from(100)
            } else {
                Value::from(round1(100.0 * visitors / total))
            };
            let mut row = row.clone();
            row.insert(PERCENTAGE.to_string(), share);
            row
        })
        .collect()
}

/// Attach `cr` (visitors of the row relative to `total_visitors` of the site).
/// A zero total leaves the rows untouched.
pub fn with_conversion_rate(total_visitors: u64, rows: &[Row]) -> RowSet {
    if total_visitors == 0 {
        return rows.to_vec();
    }
    let total = total_visitors as f64;
    rows.iter()
        .map(|row| {
            let visitors = count(row, VISITORS).unwrap_or(0.0);
            let mut row = row.clone();
            row.insert(
                CONVERSION_RATE.to_string(),
                Value::from(round1(100.0 * visitors / total)),
            );
            row
        })
        .collect()
}

/// Fetch the unfiltered visitor total for the site and attach `cr` to every
/// row. If the total cannot be fetched or is zero, `cr` is omitted.
pub async fn conversion_rate(
    api: &dyn StatsApi,
    site_id: &str,
    time_frame: &str,
    rows: &[Row],
) -> RowSet {
    if rows.is_empty() {
        return Vec::new();
    }
    match fetch_total_visitors(api, site_id, time_frame).await {
        Some(total) if total > 0 => with_conversion_rate(total, rows),
        _ => {
            warn!(site_id, time_frame, "no visitor total, conversion rate omitted");
            rows.to_vec()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows(value: Value) -> RowSet {
        crate::row::rows_from_value(value).unwrap_or_default()
    }

    #[test]
    fn clean_drops_incomplete_rows_and_foreign_fields() {
        let input = rows(json!([
            {"country": "DE", "visitors": 3, "bounce_rate": 40},
            {"country": "", "visitors": 9},
            {"visitors": 4},
            {"country": "US", "visitors": null},
            {"country": "US"},
        ]));
        assert_eq!(
            clean(&["country", "visitors"], &input),
            rows(json!([{"country": "DE", "visitors": 3}]))
        );
    }

    #[test]
    fn clean_is_idempotent() {
        let input = rows(json!([
            {"browser": "Firefox", "visitors": 12, "x": 1},
            {"browser": "Chrome", "visitors": 8},
            {"browser": null, "visitors": 8},
        ]));
        let once = clean(&["browser", "visitors"], &input);
        assert_eq!(clean(&["browser", "visitors"], &once), once);
    }

    #[test]
    fn clean_preserves_row_order() {
        let input = rows(json!([
            {"page": "/b", "visitors": 1},
            {"page": "/a", "visitors": 5},
        ]));
        let cleaned = clean(&["page", "visitors"], &input);
        assert_eq!(cleaned[0]["page"], "/b");
        assert_eq!(cleaned[1]["page"], "/a");
    }

    #[test]
    fn percentage_splits_total() {
        let input = rows(json!([
            {"device": "Tablet", "visitors": 3},
            {"device": "Desktop", "visitors": 9},
        ]));
        assert_eq!(
            percentage(&input),
            rows(json!([
                {"device": "Tablet", "visitors": 3, "percentage": 25.0},
                {"device": "Desktop", "visitors": 9, "percentage": 75.0},
            ]))
        );
    }

    #[test]
    fn percentage_of_single_row_is_integer_hundred() {
        let result = percentage(&rows(json!([{"browser": "Firefox", "visitors": 99}])));
        assert_eq!(result[0][PERCENTAGE], json!(100));
        assert!(result[0][PERCENTAGE].is_u64());
    }

    #[test]
    fn percentage_sums_to_hundred_within_rounding() {
        let input = rows(json!([
            {"os": "a", "visitors": 1},
            {"os": "b", "visitors": 1},
            {"os": "c", "visitors": 1},
            {"os": "d", "visitors": 7},
            {"os": "e", "visitors": 13},
        ]));
        let result = percentage(&input);
        let sum: f64 = result
            .iter()
            .filter_map(|row| row[PERCENTAGE].as_f64())
            .sum();
        // Each share is rounded independently, so the error grows with the row count.
        let tolerance = 0.05 * result.len() as f64;
        assert!((sum - 100.0).abs() <= tolerance, "sum was {sum}");
    }

    #[test]
    fn percentage_with_zero_total_leaves_rows() {
        let input = rows(json!([{"os": "a", "visitors": 0}]));
        assert_eq!(percentage(&input), input);
        assert!(percentage(&[]).is_empty());
    }

    #[test]
    fn conversion_rate_is_relative_to_site_total() {
        let input = rows(json!([
            {"goal": "Signup", "visitors": 5},
            {"goal": "404", "visitors": 1},
        ]));
        let result = with_conversion_rate(40, &input);
        assert_eq!(result[0][CONVERSION_RATE], json!(12.5));
        assert_eq!(result[1][CONVERSION_RATE], json!(2.5));
        assert_eq!(with_conversion_rate(0, &input), input);
    }
}
