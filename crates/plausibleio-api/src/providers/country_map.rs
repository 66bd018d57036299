use serde_json::Value;

use plausibleio_core::analytics::StatsApi;
use plausibleio_core::filter::{self, Filter};
use plausibleio_core::geo;
use plausibleio_core::labels::LabelResolver;
use plausibleio_core::metrics::{clean, percentage};
use plausibleio_core::row::{count, text, Row, RowSet, VISITORS};
use plausibleio_core::widget::{ColumnDescriptor, ColumnFilter, WidgetData};

use super::{fetch_breakdown, visitors_column};

const COUNTRY_PROPERTY: &str = "visit:country";
const REGION_PROPERTY: &str = "visit:region";
const CITY_PROPERTY: &str = "visit:city";
/// Row field carrying the upstream city id, used as the filter value.
const CITY_CODE: &str = "cityCode";

/// Data for the world map and its region drill-down.
pub struct CountryMapDataProvider<'a> {
    api: &'a dyn StatsApi,
    labels: &'a dyn LabelResolver,
}

impl<'a> CountryMapDataProvider<'a> {
    pub fn new(api: &'a dyn StatsApi, labels: &'a dyn LabelResolver) -> Self {
        Self { api, labels }
    }

    /// Countries; the regions of the filtered country once a `visit:country`
    /// filter is active; the cities of the filtered region once a
    /// `visit:region` filter is active.
    pub async fn country_data_for_data_map(
        &self,
        site_id: &str,
        time_frame: &str,
        filters: &[Filter],
    ) -> WidgetData {
        if filter::is_active(REGION_PROPERTY, filters).is_some() {
            self.city_data(site_id, time_frame, filters).await
        } else if filter::is_active(COUNTRY_PROPERTY, filters).is_some() {
            self.region_data(site_id, time_frame, filters).await
        } else {
            self.country_data(site_id, time_frame, filters).await
        }
    }

    /// Countries only. A country filter is dropped from the query so the map
    /// always shows the full spread.
    pub async fn country_data_only_for_data_map(
        &self,
        site_id: &str,
        time_frame: &str,
        filters: &[Filter],
    ) -> WidgetData {
        let filters = filter::remove(COUNTRY_PROPERTY, filters);
        self.country_data(site_id, time_frame, &filters).await
    }

    async fn country_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        let rows = fetch_breakdown(self.api, site_id, time_frame, COUNTRY_PROPERTY, None, filters).await;
        WidgetData {
            data: percentage(&countries_to_data_map(&rows)),
            columns: vec![
                ColumnDescriptor::new("country", self.labels.label("barChart.labels.country"))
                    .with_filter(
                        ColumnFilter::new(
                            COUNTRY_PROPERTY,
                            self.labels.label("filter.locationData.countryIs"),
                        )
                        .with_value("alpha2"),
                    ),
                visitors_column(self.labels),
            ],
        }
    }

    async fn region_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        let rows = fetch_breakdown(self.api, site_id, time_frame, REGION_PROPERTY, None, filters).await;
        WidgetData {
            data: percentage(&regions_to_data_map(&rows)),
            columns: vec![
                ColumnDescriptor::new("region", self.labels.label("barChart.labels.region"))
                    .with_filter(
                        ColumnFilter::new(
                            REGION_PROPERTY,
                            self.labels.label("filter.locationData.regionIs"),
                        )
                        .with_value("isoCode"),
                    ),
                visitors_column(self.labels),
            ],
        }
    }

    async fn city_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        let rows = fetch_breakdown(self.api, site_id, time_frame, CITY_PROPERTY, None, filters).await;
        WidgetData {
            data: percentage(&cities_to_data_map(&rows)),
            columns: vec![
                ColumnDescriptor::new("city", self.labels.label("barChart.labels.city")).with_filter(
                    ColumnFilter::new(CITY_PROPERTY, self.labels.label("filter.locationData.cityIs"))
                        .with_value(CITY_CODE),
                ),
                visitors_column(self.labels),
            ],
        }
    }
}

/// `{country: "DE", visitors}` → `{alpha2, alpha3, country: name, visitors}`.
/// Rows with an unknown code are dropped.
fn countries_to_data_map(rows: &[Row]) -> RowSet {
    clean(&["country", VISITORS], rows)
        .iter()
        .filter_map(|row| {
            let country = geo::country(&text(row, "country")?)?;
            let mut mapped = Row::new();
            mapped.insert("alpha2".to_string(), Value::from(country.alpha2));
            mapped.insert("alpha3".to_string(), Value::from(country.alpha3));
            mapped.insert("country".to_string(), Value::from(country.name));
            mapped.insert(VISITORS.to_string(), row.get(VISITORS)?.clone());
            Some(mapped)
        })
        .collect()
}

/// `{region: "DE-BB", visitors}` → `{region: name, isoCode, visitors}`.
fn regions_to_data_map(rows: &[Row]) -> RowSet {
    clean(&["region", VISITORS], rows)
        .iter()
        .filter_map(|row| {
            let region = geo::region(&text(row, "region")?)?;
            let mut mapped = Row::new();
            mapped.insert("region".to_string(), Value::from(region.name));
            mapped.insert("isoCode".to_string(), Value::from(region.iso_code));
            mapped.insert(VISITORS.to_string(), row.get(VISITORS)?.clone());
            Some(mapped)
        })
        .collect()
}

/// `{city: 2950159, city_name?, visitors}` → `{city: name, cityCode, visitors}`.
/// Without a `city_name` the id doubles as the display name.
fn cities_to_data_map(rows: &[Row]) -> RowSet {
    rows.iter()
        .filter(|row| count(row, VISITORS).is_some())
        .filter_map(|row| {
            let code = text(row, "city")?;
            let name = text(row, "city_name").unwrap_or_else(|| code.clone());
            let mut mapped = Row::new();
            mapped.insert("city".to_string(), Value::from(name));
            mapped.insert(CITY_CODE.to_string(), Value::from(code));
            mapped.insert(VISITORS.to_string(), row.get(VISITORS)?.clone());
            Some(mapped)
        })
        .collect()
}
