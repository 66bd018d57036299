use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use serde_json::{json, Value};

use plausibleio_api::providers::{
    CountryMapDataProvider, DeviceDataProvider, GoalDataProvider, PageDataProvider,
    SourceDataProvider, VisitorsDataProvider,
};
use plausibleio_core::analytics::{Endpoint, StatsApi, StatsQuery};
use plausibleio_core::filter::Filter;
use plausibleio_core::labels::DefaultLabels;

const SITE: &str = "waldhacker.dev";

/// Canned responses keyed by endpoint path plus `property`; every request is
/// recorded. Unscripted requests fail like an unreachable API.
#[derive(Default)]
struct ScriptedApi {
    responses: HashMap<String, Value>,
    requests: Mutex<Vec<StatsQuery>>,
}

impl ScriptedApi {
    fn key(endpoint: Endpoint, property: Option<&str>) -> String {
        format!("{}|{}", endpoint.path(), property.unwrap_or_default())
    }

    fn breakdown(mut self, property: &str, response: Value) -> Self {
        self.responses
            .insert(Self::key(Endpoint::Breakdown, Some(property)), response);
        self
    }

    fn respond(mut self, endpoint: Endpoint, response: Value) -> Self {
        self.responses.insert(Self::key(endpoint, None), response);
        self
    }

    fn requests(&self) -> Vec<StatsQuery> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    fn breakdown_request(&self, property: &str) -> Option<StatsQuery> {
        self.requests()
            .into_iter()
            .find(|q| q.endpoint == Endpoint::Breakdown && q.param("property") == Some(property))
    }
}

#[async_trait::async_trait]
impl StatsApi for ScriptedApi {
    async fn send(&self, query: &StatsQuery) -> Result<Value> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(query.clone());
        }
        self.responses
            .get(&Self::key(query.endpoint, query.param("property")))
            .cloned()
            .ok_or_else(|| anyhow!("connection refused"))
    }
}

fn filters(list: &[(&str, &str)]) -> Vec<Filter> {
    list.iter().map(|(name, value)| Filter::new(*name, *value)).collect()
}

fn column_names(columns: &[plausibleio_core::widget::ColumnDescriptor]) -> Vec<&str> {
    columns.iter().map(|c| c.name.as_str()).collect()
}

#[tokio::test]
async fn countries_are_mapped_with_share() {
    let api = ScriptedApi::default().breakdown(
        "visit:country",
        json!([
            {"country": "DE", "visitors": 3},
            {"country": "US", "visitors": 1},
        ]),
    );
    let labels = DefaultLabels::new();
    let data = CountryMapDataProvider::new(&api, &labels)
        .country_data_for_data_map(SITE, "7d", &[])
        .await;

    assert_eq!(
        serde_json::to_value(&data.data).ok(),
        Some(json!([
            {"alpha2": "DE", "alpha3": "DEU", "country": "Germany", "visitors": 3, "percentage": 75.0},
            {"alpha2": "US", "alpha3": "USA", "country": "United States of America", "visitors": 1, "percentage": 25.0},
        ]))
    );
    assert_eq!(column_names(&data.columns), ["country", "visitors"]);
    let filter = data.columns[0].filter.as_ref();
    assert_eq!(filter.map(|f| f.name.as_str()), Some("visit:country"));
    assert_eq!(filter.and_then(|f| f.value.as_deref()), Some("alpha2"));
    assert_eq!(data.columns[1].label, "Visitors");
}

#[tokio::test]
async fn country_filter_switches_to_regions() {
    let api = ScriptedApi::default().breakdown(
        "visit:region",
        json!([{"region": "DE-BB", "visitors": 4}]),
    );
    let labels = DefaultLabels::new();
    let active = filters(&[("visit:country", "DE")]);
    let data = CountryMapDataProvider::new(&api, &labels)
        .country_data_for_data_map(SITE, "7d", &active)
        .await;

    assert_eq!(
        serde_json::to_value(&data.data).ok(),
        Some(json!([{"region": "Brandenburg", "isoCode": "DE-BB", "visitors": 4, "percentage": 100}]))
    );
    assert_eq!(column_names(&data.columns), ["region", "visitors"]);
    let request = api.breakdown_request("visit:region");
    assert_eq!(
        request.as_ref().and_then(|q| q.param("filters")),
        Some("visit:country==DE")
    );
    assert_eq!(request.as_ref().and_then(|q| q.param("metrics")), None);
}

#[tokio::test]
async fn country_only_map_ignores_country_filter() {
    let api = ScriptedApi::default().breakdown(
        "visit:country",
        json!([{"country": "DE", "visitors": 2}]),
    );
    let labels = DefaultLabels::new();
    let active = filters(&[("visit:country", "DE"), ("visit:browser", "Firefox")]);
    let data = CountryMapDataProvider::new(&api, &labels)
        .country_data_only_for_data_map(SITE, "30d", &active)
        .await;

    assert_eq!(data.data.len(), 1);
    assert!(api.breakdown_request("visit:region").is_none());
    assert_eq!(
        api.breakdown_request("visit:country")
            .as_ref()
            .and_then(|q| q.param("filters")),
        Some("visit:browser==Firefox")
    );
}

#[tokio::test]
async fn unknown_country_codes_are_dropped() {
    let api = ScriptedApi::default().breakdown(
        "visit:country",
        json!([
            {"country": "XX", "visitors": 5},
            {"country": "DE", "visitors": 5},
        ]),
    );
    let labels = DefaultLabels::new();
    let data = CountryMapDataProvider::new(&api, &labels)
        .country_data_for_data_map(SITE, "7d", &[])
        .await;
    assert_eq!(data.data.len(), 1);
    assert_eq!(data.data[0]["percentage"], json!(100));
}

#[tokio::test]
async fn browser_filter_drills_down_to_versions() {
    let api = ScriptedApi::default().breakdown(
        "visit:browser_version",
        json!([
            {"browser_version": "118.0", "visitors": 6},
            {"browser_version": "117.0", "visitors": 2},
        ]),
    );
    let labels = DefaultLabels::new();
    let active = filters(&[("visit:browser", "Firefox")]);
    let data = DeviceDataProvider::new(&api, &labels)
        .browser_data(SITE, "7d", &active)
        .await;

    assert_eq!(column_names(&data.columns), ["browser_version", "visitors"]);
    assert_eq!(data.data[0]["percentage"], json!(75.0));
    assert_eq!(data.data[1]["percentage"], json!(25.0));
    assert_eq!(
        api.breakdown_request("visit:browser_version")
            .as_ref()
            .and_then(|q| q.param("metrics")),
        Some("visitors")
    );
}

#[tokio::test]
async fn device_data_cleans_rows() {
    let api = ScriptedApi::default().breakdown(
        "visit:device",
        json!([
            {"device": "Desktop", "visitors": 9, "bounce_rate": 12},
            {"device": null, "visitors": 3},
            {"device": "Tablet", "visitors": 3},
        ]),
    );
    let labels = DefaultLabels::new();
    let data = DeviceDataProvider::new(&api, &labels)
        .device_data(SITE, "7d", &[])
        .await;

    assert_eq!(
        serde_json::to_value(&data.data).ok(),
        Some(json!([
            {"device": "Desktop", "visitors": 9, "percentage": 75.0},
            {"device": "Tablet", "visitors": 3, "percentage": 25.0},
        ]))
    );
    assert_eq!(data.columns[0].label, "Screen Size");
}

#[tokio::test]
async fn failed_request_keeps_columns() {
    let api = ScriptedApi::default();
    let labels = DefaultLabels::new();
    let data = SourceDataProvider::new(&api, &labels)
        .campaign_data(SITE, "7d", &[])
        .await;

    assert!(data.data.is_empty());
    assert_eq!(column_names(&data.columns), ["utm_campaign", "visitors"]);
    assert_eq!(
        data.columns[0].filter.as_ref().map(|f| f.name.as_str()),
        Some("visit:utm_campaign")
    );
}

#[tokio::test]
async fn sources_drop_empty_values() {
    let api = ScriptedApi::default().breakdown(
        "visit:source",
        json!([
            {"source": "Google", "visitors": 8},
            {"source": "", "visitors": 2},
        ]),
    );
    let labels = DefaultLabels::new();
    let data = SourceDataProvider::new(&api, &labels)
        .all_sources_data(SITE, "month", &[])
        .await;

    assert_eq!(data.data.len(), 1);
    assert_eq!(data.data[0]["source"], "Google");
    assert_eq!(data.data[0]["percentage"], json!(100));
}

#[tokio::test]
async fn goals_carry_conversion_rate() {
    let api = ScriptedApi::default()
        .breakdown(
            "event:goal",
            json!([
                {"goal": "Signup", "visitors": 3, "events": 5},
                {"goal": "404", "visitors": 1, "events": 1},
            ]),
        )
        .respond(Endpoint::Aggregate, json!({"visitors": {"value": 40}}));
    let labels = DefaultLabels::new();
    let data = GoalDataProvider::new(&api, &labels)
        .goals_data(SITE, "30d", &[])
        .await;

    assert_eq!(
        serde_json::to_value(&data.data).ok(),
        Some(json!([
            {"goal": "Signup", "visitors": 3, "events": 5, "percentage": 75.0, "cr": 7.5},
            {"goal": "404", "visitors": 1, "events": 1, "percentage": 25.0, "cr": 2.5},
        ]))
    );
    assert_eq!(column_names(&data.columns), ["goal", "visitors", "events", "cr"]);
    assert_eq!(data.columns[1].label, "Uniques");

    let aggregate = api
        .requests()
        .into_iter()
        .find(|q| q.endpoint == Endpoint::Aggregate);
    assert_eq!(aggregate.as_ref().and_then(|q| q.param("filters")), None);
    assert_eq!(aggregate.as_ref().and_then(|q| q.param("period")), Some("30d"));
}

#[tokio::test]
async fn goals_without_total_omit_conversion_rate() {
    let api = ScriptedApi::default().breakdown(
        "event:goal",
        json!([{"goal": "Signup", "visitors": 3, "events": 5}]),
    );
    let labels = DefaultLabels::new();
    let data = GoalDataProvider::new(&api, &labels)
        .goals_data(SITE, "30d", &[])
        .await;

    assert_eq!(data.data.len(), 1);
    assert!(data.data[0].get("cr").is_none());
}

#[tokio::test]
async fn filtered_404_goal_gets_path_sub_data() {
    let api = ScriptedApi::default()
        .breakdown("event:goal", json!([{"goal": "404", "visitors": 2, "events": 3}]))
        .breakdown(
            "event:props:path",
            json!([
                {"path": "/missing", "visitors": 1, "events": 2},
                {"path": "/gone", "visitors": 1, "events": 1},
            ]),
        )
        .respond(Endpoint::Aggregate, json!({"visitors": {"value": 10}}));
    let labels = DefaultLabels::new();
    let active = filters(&[("event:goal", "404")]);
    let data = GoalDataProvider::new(&api, &labels)
        .goals_data(SITE, "7d", &active)
        .await;

    let sub_data = &data.data[0]["subData"];
    assert_eq!(sub_data[0]["data"][0]["path"], "/missing");
    assert_eq!(sub_data[0]["data"][0]["percentage"], json!(50.0));
    assert_eq!(sub_data[0]["data"][0]["cr"], json!(10.0));
    assert_eq!(sub_data[0]["columns"][0]["name"], "path");
    assert_eq!(sub_data[0]["columns"][0]["filter"]["name"], "event:props:path");
}

#[tokio::test]
async fn goal_without_known_properties_has_no_sub_data() {
    let api = ScriptedApi::default()
        .breakdown("event:goal", json!([{"goal": "Signup", "visitors": 2, "events": 2}]))
        .respond(Endpoint::Aggregate, json!({"visitors": 4}));
    let labels = DefaultLabels::new();
    let active = filters(&[("event:goal", "Signup")]);
    let data = GoalDataProvider::new(&api, &labels)
        .goals_data(SITE, "7d", &active)
        .await;

    assert!(data.data[0].get("subData").is_none());
    assert_eq!(data.data[0]["cr"], json!(50.0));
}

#[tokio::test]
async fn top_pages_include_pageviews() {
    let api = ScriptedApi::default().breakdown(
        "event:page",
        json!([{"page": "/", "visitors": 5, "pageviews": 11}]),
    );
    let labels = DefaultLabels::new();
    let data = PageDataProvider::new(&api, &labels)
        .top_page_data(SITE, "7d", &[])
        .await;

    assert_eq!(
        serde_json::to_value(&data.data).ok(),
        Some(json!([{"page": "/", "visitors": 5, "pageviews": 11, "percentage": 100}]))
    );
    assert_eq!(column_names(&data.columns), ["page", "visitors", "pageviews"]);
    assert_eq!(
        api.breakdown_request("event:page")
            .as_ref()
            .and_then(|q| q.param("metrics")),
        Some("visitors,pageviews")
    );
}

#[tokio::test]
async fn entry_and_exit_pages_use_their_labels() {
    let api = ScriptedApi::default()
        .breakdown("visit:entry_page", json!([{"entry_page": "/a", "visitors": 1}]))
        .breakdown("visit:exit_page", json!([{"exit_page": "/b", "visitors": 1}]));
    let labels = DefaultLabels::new();
    let provider = PageDataProvider::new(&api, &labels);

    let entry = provider.entry_page_data(SITE, "7d", &[]).await;
    let exit = provider.exit_page_data(SITE, "7d", &[]).await;

    assert_eq!(entry.data[0]["entry_page"], "/a");
    assert_eq!(entry.columns[1].label, "Unique Entrances");
    assert_eq!(exit.data[0]["exit_page"], "/b");
    assert_eq!(exit.columns[1].label, "Unique Exits");
}

#[tokio::test]
async fn visitors_chart_and_overview() {
    let api = ScriptedApi::default()
        .respond(
            Endpoint::Timeseries,
            json!([
                {"date": "2022-03-01", "visitors": 4},
                {"date": "2022-03-02", "visitors": 7},
            ]),
        )
        .respond(
            Endpoint::Aggregate,
            json!({
                "visitors": {"value": 11},
                "pageviews": {"value": 30},
                "visit_duration": {"value": 61.5},
                "bounce_rate": {"value": 42}
            }),
        )
        .respond(Endpoint::RealtimeVisitors, json!(3));
    let provider = VisitorsDataProvider::new(&api);

    let chart = provider.chart_data(SITE, "7d", &[]).await;
    assert_eq!(chart.labels, ["2022-03-01", "2022-03-02"]);
    assert_eq!(chart.data, [4, 7]);

    let overview = provider.overview_data(SITE, "7d", &[]).await;
    assert_eq!(overview.visitors, 11);
    assert_eq!(overview.pageviews, 30);
    assert_eq!(overview.visit_duration, 61.5);
    assert_eq!(overview.bounce_rate, 42.0);
    assert_eq!(overview.current_visitors, 3);
}

#[tokio::test]
async fn visitors_degrade_to_zero() {
    let api = ScriptedApi::default();
    let provider = VisitorsDataProvider::new(&api);
    let overview = provider.overview_data(SITE, "7d", &[]).await;
    assert_eq!(overview.visitors, 0);
    assert_eq!(overview.current_visitors, 0);
    assert!(provider.chart_data(SITE, "7d", &[]).await.labels.is_empty());
}

#[tokio::test]
async fn country_shares_for_nine_and_three_visitors() {
    let api = ScriptedApi::default().breakdown(
        "visit:country",
        json!([
            {"country": "DE", "visitors": 9},
            {"country": "US", "visitors": 3},
        ]),
    );
    let labels = DefaultLabels::new();
    let data = CountryMapDataProvider::new(&api, &labels)
        .country_data_for_data_map(SITE, "day", &[])
        .await;

    assert_eq!(
        serde_json::to_value(&data.data).ok(),
        Some(json!([
            {"alpha2": "DE", "alpha3": "DEU", "country": "Germany", "visitors": 9, "percentage": 75.0},
            {"alpha2": "US", "alpha3": "USA", "country": "United States of America", "visitors": 3, "percentage": 25.0},
        ]))
    );
}

#[tokio::test]
async fn placeholder_country_code_is_dropped() {
    let api = ScriptedApi::default().breakdown(
        "visit:country",
        json!([
            {"country": "_", "visitors": 2},
            {"country": "DE", "visitors": 6},
        ]),
    );
    let labels = DefaultLabels::new();
    let data = CountryMapDataProvider::new(&api, &labels)
        .country_data_only_for_data_map(SITE, "7d", &[])
        .await;

    assert_eq!(
        serde_json::to_value(&data.data).ok(),
        Some(json!([
            {"alpha2": "DE", "alpha3": "DEU", "country": "Germany", "visitors": 6, "percentage": 100},
        ]))
    );
}

#[tokio::test]
async fn region_filter_drills_down_to_cities() {
    let api = ScriptedApi::default().breakdown(
        "visit:city",
        json!([
            {"city": 2950159, "visitors": 3},
            {"city": 2852458, "city_name": "Potsdam", "visitors": 1},
            {"city": null, "visitors": 4},
        ]),
    );
    let labels = DefaultLabels::new();
    let active = filters(&[("visit:country", "DE"), ("visit:region", "DE-BB")]);
    let data = CountryMapDataProvider::new(&api, &labels)
        .country_data_for_data_map(SITE, "7d", &active)
        .await;

    assert_eq!(
        serde_json::to_value(&data.data).ok(),
        Some(json!([
            {"city": "2950159", "cityCode": "2950159", "visitors": 3, "percentage": 75.0},
            {"city": "Potsdam", "cityCode": "2852458", "visitors": 1, "percentage": 25.0},
        ]))
    );
    assert_eq!(column_names(&data.columns), ["city", "visitors"]);
    assert_eq!(data.columns[0].label, "City");
    let filter = data.columns[0].filter.as_ref();
    assert_eq!(filter.map(|f| f.name.as_str()), Some("visit:city"));
    assert_eq!(filter.and_then(|f| f.value.as_deref()), Some("cityCode"));
    assert_eq!(filter.map(|f| f.label.as_str()), Some("City is"));

    let properties: Vec<String> = api
        .requests()
        .iter()
        .filter_map(|q| q.param("property").map(str::to_string))
        .collect();
    assert_eq!(properties, ["visit:city"]);
    assert_eq!(
        api.breakdown_request("visit:city")
            .as_ref()
            .and_then(|q| q.param("filters")),
        Some("visit:country==DE;visit:region==DE-BB")
    );
}

#[tokio::test]
async fn os_filter_drills_down_to_versions() {
    let api = ScriptedApi::default().breakdown(
        "visit:os_version",
        json!([
            {"os_version": "10", "visitors": 1},
            {"os_version": "11", "visitors": 1},
        ]),
    );
    let labels = DefaultLabels::new();
    let active = filters(&[("visit:os", "Windows")]);
    let data = DeviceDataProvider::new(&api, &labels)
        .os_data(SITE, "7d", &active)
        .await;

    assert_eq!(column_names(&data.columns), ["os_version", "visitors"]);
    assert_eq!(data.data[0]["percentage"], json!(50.0));
    assert!(api.breakdown_request("visit:os").is_none());
    assert_eq!(
        api.breakdown_request("visit:os_version")
            .as_ref()
            .and_then(|q| q.param("filters")),
        Some("visit:os==Windows")
    );
}

#[tokio::test]
async fn encoded_browser_filter_drills_down_and_reaches_query() {
    let api = ScriptedApi::default().breakdown(
        "visit:browser_version",
        json!([{"browser_version": "91.0", "visitors": 5}]),
    );
    let labels = DefaultLabels::new();
    let active = vec![Filter {
        name: "visit:browser==firefox".to_string(),
        value: None,
    }];
    let data = DeviceDataProvider::new(&api, &labels)
        .browser_data(SITE, "30d", &active)
        .await;

    assert_eq!(data.data[0]["browser_version"], "91.0");
    assert_eq!(data.data[0]["percentage"], json!(100));
    assert_eq!(
        api.breakdown_request("visit:browser_version")
            .as_ref()
            .and_then(|q| q.param("filters")),
        Some("visit:browser==firefox")
    );
}
