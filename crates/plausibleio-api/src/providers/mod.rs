//! Widget data providers.
//!
//! Each provider is a request-scoped helper borrowing the stats transport and
//! the label resolver. Upstream failures never surface here: a failed call
//! yields empty `data` with the usual `columns`.

pub mod country_map;
pub mod device;
pub mod goal;
pub mod page;
pub mod source;
pub mod visitors;

pub use country_map::CountryMapDataProvider;
pub use device::DeviceDataProvider;
pub use goal::GoalDataProvider;
pub use page::PageDataProvider;
pub use source::SourceDataProvider;
pub use visitors::VisitorsDataProvider;

use plausibleio_core::analytics::{fetch_rows, StatsApi, StatsQuery};
use plausibleio_core::filter::Filter;
use plausibleio_core::labels::LabelResolver;
use plausibleio_core::metrics::{clean, percentage};
use plausibleio_core::row::{RowSet, VISITORS};
use plausibleio_core::widget::{ColumnDescriptor, ColumnFilter, WidgetData};

/// A breakdown dimension: which property to query, which row field carries
/// it, and the label keys of its column.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dimension {
    pub property: &'static str,
    pub field: &'static str,
    pub label: &'static str,
    pub filter_label: &'static str,
}

impl Dimension {
    pub(crate) fn column(&self, labels: &dyn LabelResolver) -> ColumnDescriptor {
        ColumnDescriptor::new(self.field, labels.label(self.label)).with_filter(ColumnFilter::new(
            self.property,
            labels.label(self.filter_label),
        ))
    }
}

pub(crate) fn visitors_column(labels: &dyn LabelResolver) -> ColumnDescriptor {
    ColumnDescriptor::new(VISITORS, labels.label("barChart.labels.visitors"))
}

pub(crate) async fn fetch_breakdown(
    api: &dyn StatsApi,
    site_id: &str,
    time_frame: &str,
    property: &str,
    metrics: Option<&str>,
    filters: &[Filter],
) -> RowSet {
    let mut query = StatsQuery::breakdown(site_id, time_frame, property);
    if let Some(metrics) = metrics {
        query = query.metrics(metrics);
    }
    fetch_rows(api, &query.filters(filters)).await
}

/// Visitors per value of one dimension, with share of total.
pub(crate) async fn single_dimension_data(
    api: &dyn StatsApi,
    labels: &dyn LabelResolver,
    site_id: &str,
    time_frame: &str,
    filters: &[Filter],
    dimension: &Dimension,
) -> WidgetData {
    let rows = fetch_breakdown(
        api,
        site_id,
        time_frame,
        dimension.property,
        Some(VISITORS),
        filters,
    )
    .await;

    WidgetData {
        data: percentage(&clean(&[dimension.field, VISITORS], &rows)),
        columns: vec![dimension.column(labels), visitors_column(labels)],
    }
}
