//! Analytics API abstraction.
//!
//! Providers build a [`StatsQuery`] and hand it to a [`StatsApi`]; the HTTP
//! implementation lives in `plausibleio-api`.

use anyhow::Result;
use serde_json::{Map, Value};
use tracing::warn;

use crate::filter::{to_query_string, Filter};
use crate::row::{rows_from_value, RowSet, VISITORS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Breakdown,
    Aggregate,
    Timeseries,
    RealtimeVisitors,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Breakdown => "api/v1/stats/breakdown",
            Endpoint::Aggregate => "api/v1/stats/aggregate",
            Endpoint::Timeseries => "api/v1/stats/timeseries",
            Endpoint::RealtimeVisitors => "api/v1/stats/realtime/visitors",
        }
    }
}

/// A parameterized request against one stats endpoint.
///
/// Parameters keep insertion order: `site_id`, `period`, `property`,
/// `metrics`, `filters`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    pub site_id: String,
    pub endpoint: Endpoint,
    pub params: Vec<(String, String)>,
}

impl StatsQuery {
    fn new(endpoint: Endpoint, site_id: &str) -> Self {
        Self {
            site_id: site_id.to_string(),
            endpoint,
            params: vec![("site_id".to_string(), site_id.to_string())],
        }
    }

    fn with_param(mut self, name: &str, value: &str) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// `GET api/v1/stats/breakdown` grouped by `property`.
    pub fn breakdown(site_id: &str, period: &str, property: &str) -> Self {
        Self::new(Endpoint::Breakdown, site_id)
            .with_param("period", period)
            .with_param("property", property)
    }

    pub fn aggregate(site_id: &str, period: &str) -> Self {
        Self::new(Endpoint::Aggregate, site_id).with_param("period", period)
    }

    pub fn timeseries(site_id: &str, period: &str) -> Self {
        Self::new(Endpoint::Timeseries, site_id).with_param("period", period)
    }

    pub fn realtime_visitors(site_id: &str) -> Self {
        Self::new(Endpoint::RealtimeVisitors, site_id)
    }

    pub fn metrics(self, metrics: &str) -> Self {
        self.with_param("metrics", metrics)
    }

    /// Attach the `filters` parameter unless `filters` serializes to nothing.
    pub fn filters(self, filters: &[Filter]) -> Self {
        let encoded = to_query_string(filters);
        if encoded.is_empty() {
            self
        } else {
            self.with_param("filters", &encoded)
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Transport to the remote analytics API.
#[async_trait::async_trait]
pub trait StatsApi: Send + Sync + 'static {
    /// Send an authorized request and return the decoded response payload
    /// (the `results` member when the API wraps its answer).
    async fn send(&self, query: &StatsQuery) -> Result<Value>;
}

/// Run a breakdown-style query, degrading to an empty row set when the call
/// fails or the payload is not an array.
pub async fn fetch_rows(api: &dyn StatsApi, query: &StatsQuery) -> RowSet {
    match api.send(query).await {
        Ok(value) => rows_from_value(value).unwrap_or_else(|| {
            warn!(
                site_id = %query.site_id,
                endpoint = query.endpoint.path(),
                "stats response is not a row array"
            );
            Vec::new()
        }),
        Err(e) => {
            warn!(
                site_id = %query.site_id,
                endpoint = query.endpoint.path(),
                error = %e,
                "stats request failed"
            );
            Vec::new()
        }
    }
}

/// Run an aggregate query and return its metric object, e.g.
/// `{"visitors": {"value": 12}}`. Failures yield `None`.
pub async fn fetch_aggregate(api: &dyn StatsApi, query: &StatsQuery) -> Option<Map<String, Value>> {
    match api.send(query).await {
        Ok(Value::Object(metrics)) => Some(metrics),
        Ok(_) => {
            warn!(site_id = %query.site_id, "aggregate response is not an object");
            None
        }
        Err(e) => {
            warn!(site_id = %query.site_id, error = %e, "aggregate request failed");
            None
        }
    }
}

/// Value of one aggregate metric. Accepts both `{"m": {"value": n}}` and
/// `{"m": n}`.
pub fn aggregate_value(metrics: &Map<String, Value>, metric: &str) -> Option<f64> {
    match metrics.get(metric)? {
        Value::Object(inner) => inner.get("value").and_then(Value::as_f64),
        other => other.as_f64(),
    }
}

/// Unfiltered unique-visitor total of a site for `period`.
pub async fn fetch_total_visitors(api: &dyn StatsApi, site_id: &str, period: &str) -> Option<u64> {
    let query = StatsQuery::aggregate(site_id, period).metrics(VISITORS);
    let metrics = fetch_aggregate(api, &query).await?;
    aggregate_value(&metrics, VISITORS)
        .filter(|total| *total >= 0.0)
        .map(|total| total.round() as u64)
}
