use plausibleio_core::analytics::StatsApi;
use plausibleio_core::filter::Filter;
use plausibleio_core::labels::LabelResolver;
use plausibleio_core::metrics::{clean, percentage};
use plausibleio_core::row::VISITORS;
use plausibleio_core::widget::{ColumnDescriptor, WidgetData};

use super::{fetch_breakdown, Dimension};

const PAGEVIEWS: &str = "pageviews";

const TOP_PAGE: Dimension = Dimension {
    property: "event:page",
    field: "page",
    label: "barChart.labels.pageUrl",
    filter_label: "filter.pageData.pageIs",
};

const ENTRY_PAGE: Dimension = Dimension {
    property: "visit:entry_page",
    field: "entry_page",
    label: "barChart.labels.entryPage",
    filter_label: "filter.pageData.entryPageIs",
};

const EXIT_PAGE: Dimension = Dimension {
    property: "visit:exit_page",
    field: "exit_page",
    label: "barChart.labels.exitPage",
    filter_label: "filter.pageData.exitPageIs",
};

/// Top, entry and exit pages.
pub struct PageDataProvider<'a> {
    api: &'a dyn StatsApi,
    labels: &'a dyn LabelResolver,
}

impl<'a> PageDataProvider<'a> {
    pub fn new(api: &'a dyn StatsApi, labels: &'a dyn LabelResolver) -> Self {
        Self { api, labels }
    }

    pub async fn top_page_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        let rows = fetch_breakdown(
            self.api,
            site_id,
            time_frame,
            TOP_PAGE.property,
            Some("visitors,pageviews"),
            filters,
        )
        .await;

        WidgetData {
            data: percentage(&clean(&[TOP_PAGE.field, VISITORS, PAGEVIEWS], &rows)),
            columns: vec![
                TOP_PAGE.column(self.labels),
                ColumnDescriptor::new(VISITORS, self.labels.label("barChart.labels.visitors")),
                ColumnDescriptor::new(PAGEVIEWS, self.labels.label("barChart.labels.pageviews")),
            ],
        }
    }

    pub async fn entry_page_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        self.landing_data(site_id, time_frame, filters, &ENTRY_PAGE, "barChart.labels.uniqueEntrances")
            .await
    }

    pub async fn exit_page_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        self.landing_data(site_id, time_frame, filters, &EXIT_PAGE, "barChart.labels.uniqueExits")
            .await
    }

    async fn landing_data(
        &self,
        site_id: &str,
        time_frame: &str,
        filters: &[Filter],
        dimension: &Dimension,
        visitors_label: &str,
    ) -> WidgetData {
        let rows = fetch_breakdown(
            self.api,
            site_id,
            time_frame,
            dimension.property,
            Some(VISITORS),
            filters,
        )
        .await;

        WidgetData {
            data: percentage(&clean(&[dimension.field, VISITORS], &rows)),
            columns: vec![
                dimension.column(self.labels),
                ColumnDescriptor::new(VISITORS, self.labels.label(visitors_label)),
            ],
        }
    }
}
