use tracing::warn;

use plausibleio_core::analytics::StatsApi;
use plausibleio_core::filter::{self, Filter};
use plausibleio_core::labels::LabelResolver;
use plausibleio_core::metrics::{clean, conversion_rate, percentage, CONVERSION_RATE};
use plausibleio_core::row::VISITORS;
use plausibleio_core::widget::{ColumnDescriptor, ColumnFilter, WidgetData};

use super::fetch_breakdown;

const GOAL_PROPERTY: &str = "event:goal";
const GOAL_METRICS: &str = "visitors,events";
const EVENTS: &str = "events";
const SUB_DATA: &str = "subData";

/// Custom properties known per goal. The analytics API cannot list event
/// properties, so only goals emitted by this system are covered: the `404`
/// goal carries the requested `path`.
fn goal_properties(goal: &str) -> &'static [&'static str] {
    match goal {
        "404" => &["path"],
        _ => &[],
    }
}

/// Goal conversions, with a per-property drill-down for a filtered goal.
pub struct GoalDataProvider<'a> {
    api: &'a dyn StatsApi,
    labels: &'a dyn LabelResolver,
}

impl<'a> GoalDataProvider<'a> {
    pub fn new(api: &'a dyn StatsApi, labels: &'a dyn LabelResolver) -> Self {
        Self { api, labels }
    }

    pub async fn goals_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        let rows = fetch_breakdown(
            self.api,
            site_id,
            time_frame,
            GOAL_PROPERTY,
            Some(GOAL_METRICS),
            filters,
        )
        .await;
        let rows = percentage(&clean(&["goal", VISITORS, EVENTS], &rows));
        let mut data = conversion_rate(self.api, site_id, time_frame, &rows).await;

        if let (Some(goal), Some(first)) = (filter::value_of(GOAL_PROPERTY, filters), data.first_mut()) {
            let sub_data = self
                .goal_properties_data(&goal, site_id, time_frame, filters)
                .await;
            if !sub_data.is_empty() {
                match serde_json::to_value(&sub_data) {
                    Ok(value) => {
                        first.insert(SUB_DATA.to_string(), value);
                    }
                    Err(e) => warn!(error = %e, goal = %goal, "failed to encode goal property data"),
                }
            }
        }

        WidgetData {
            data,
            columns: vec![
                ColumnDescriptor::new("goal", self.labels.label("barChart.labels.goal")).with_filter(
                    ColumnFilter::new(GOAL_PROPERTY, self.labels.label("filter.goalData.goalIs")),
                ),
                ColumnDescriptor::new(VISITORS, self.labels.label("barChart.labels.uniques")),
                ColumnDescriptor::new(EVENTS, self.labels.label("barChart.labels.total")),
                ColumnDescriptor::new(CONVERSION_RATE, self.labels.label("barChart.labels.cr")),
            ],
        }
    }

    /// One table per known custom property of `goal`; empty for goals
    /// without known properties.
    pub async fn goal_properties_data(
        &self,
        goal: &str,
        site_id: &str,
        time_frame: &str,
        filters: &[Filter],
    ) -> Vec<WidgetData> {
        let mut result = Vec::new();
        for &prop in goal_properties(goal) {
            let property = format!("event:props:{prop}");
            let rows = fetch_breakdown(
                self.api,
                site_id,
                time_frame,
                &property,
                Some(GOAL_METRICS),
                filters,
            )
            .await;
            let rows = percentage(&clean(&[prop, VISITORS, EVENTS], &rows));
            let data = conversion_rate(self.api, site_id, time_frame, &rows).await;

            result.push(WidgetData {
                data,
                columns: vec![
                    ColumnDescriptor::new(prop, self.labels.label("barChart.labels.goalProperty"))
                        .with_filter(ColumnFilter::new(
                            property,
                            self.labels.label("filter.goalData.goalPropertyIs"),
                        )),
                    ColumnDescriptor::new(VISITORS, self.labels.label("barChart.labels.uniques")),
                    ColumnDescriptor::new(EVENTS, self.labels.label("barChart.labels.total")),
                    ColumnDescriptor::new(CONVERSION_RATE, self.labels.label("barChart.labels.cr")),
                ],
            });
        }
        result
    }
}
