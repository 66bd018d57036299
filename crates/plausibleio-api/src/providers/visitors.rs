use serde::Serialize;
use tracing::warn;

use plausibleio_core::analytics::{aggregate_value, fetch_aggregate, fetch_rows, StatsApi, StatsQuery};
use plausibleio_core::filter::Filter;
use plausibleio_core::row::{count, text, VISITORS};

const OVERVIEW_METRICS: &str = "visitors,pageviews,visit_duration,bounce_rate";

/// Visitors per interval of the time frame, as parallel label/value arrays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitorsChart {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisitorsOverview {
    pub visitors: u64,
    pub pageviews: u64,
    /// Average visit duration in seconds.
    pub visit_duration: f64,
    /// Bounce rate in percent.
    pub bounce_rate: f64,
    pub current_visitors: u64,
}

/// Visitor trend and headline numbers.
pub struct VisitorsDataProvider<'a> {
    api: &'a dyn StatsApi,
}

impl<'a> VisitorsDataProvider<'a> {
    pub fn new(api: &'a dyn StatsApi) -> Self {
        Self { api }
    }

    pub async fn chart_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> VisitorsChart {
        let query = StatsQuery::timeseries(site_id, time_frame)
            .metrics(VISITORS)
            .filters(filters);
        let rows = fetch_rows(self.api, &query).await;

        let mut chart = VisitorsChart {
            labels: Vec::with_capacity(rows.len()),
            data: Vec::with_capacity(rows.len()),
        };
        for row in &rows {
            let Some(date) = text(row, "date") else {
                continue;
            };
            chart.labels.push(date);
            chart
                .data
                .push(count(row, VISITORS).unwrap_or(0.0).max(0.0).round() as u64);
        }
        chart
    }

    /// Aggregate numbers for the time frame plus the realtime visitor count.
    /// Missing values are reported as zero.
    pub async fn overview_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> VisitorsOverview {
        let query = StatsQuery::aggregate(site_id, time_frame)
            .metrics(OVERVIEW_METRICS)
            .filters(filters);
        let metrics = fetch_aggregate(self.api, &query).await.unwrap_or_default();
        let metric = |name: &str| aggregate_value(&metrics, name).unwrap_or(0.0);

        VisitorsOverview {
            visitors: metric("visitors").max(0.0).round() as u64,
            pageviews: metric("pageviews").max(0.0).round() as u64,
            visit_duration: metric("visit_duration"),
            bounce_rate: metric("bounce_rate"),
            current_visitors: self.current_visitors(site_id).await,
        }
    }

    async fn current_visitors(&self, site_id: &str) -> u64 {
        match self.api.send(&StatsQuery::realtime_visitors(site_id)).await {
            Ok(value) => value.as_u64().unwrap_or(0),
            Err(e) => {
                warn!(site_id, error = %e, "realtime visitors request failed");
                0
            }
        }
    }
}
