use plausibleio_core::analytics::StatsApi;
use plausibleio_core::filter::Filter;
use plausibleio_core::labels::LabelResolver;
use plausibleio_core::widget::WidgetData;

use super::{single_dimension_data, Dimension};

const ALL_SOURCES: Dimension = Dimension {
    property: "visit:source",
    field: "source",
    label: "barChart.labels.source",
    filter_label: "filter.sourceData.sourceIs",
};

const UTM_MEDIUM: Dimension = Dimension {
    property: "visit:utm_medium",
    field: "utm_medium",
    label: "barChart.labels.UTMMedium",
    filter_label: "filter.sourceData.UTMMediumIs",
};

const UTM_SOURCE: Dimension = Dimension {
    property: "visit:utm_source",
    field: "utm_source",
    label: "barChart.labels.UTMSource",
    filter_label: "filter.sourceData.UTMSourceIs",
};

const UTM_CAMPAIGN: Dimension = Dimension {
    property: "visit:utm_campaign",
    field: "utm_campaign",
    label: "barChart.labels.UTMCampaign",
    filter_label: "filter.sourceData.UTMCampaignIs",
};

const UTM_TERM: Dimension = Dimension {
    property: "visit:utm_term",
    field: "utm_term",
    label: "barChart.labels.UTMTerm",
    filter_label: "filter.sourceData.UTMTermIs",
};

const UTM_CONTENT: Dimension = Dimension {
    property: "visit:utm_content",
    field: "utm_content",
    label: "barChart.labels.UTMContent",
    filter_label: "filter.sourceData.UTMContentIs",
};

/// Referral sources and UTM campaign parameters.
pub struct SourceDataProvider<'a> {
    api: &'a dyn StatsApi,
    labels: &'a dyn LabelResolver,
}

impl<'a> SourceDataProvider<'a> {
    pub fn new(api: &'a dyn StatsApi, labels: &'a dyn LabelResolver) -> Self {
        Self { api, labels }
    }

    async fn data(&self, site_id: &str, time_frame: &str, filters: &[Filter], dimension: &Dimension) -> WidgetData {
        single_dimension_data(self.api, self.labels, site_id, time_frame, filters, dimension).await
    }

    pub async fn all_sources_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        self.data(site_id, time_frame, filters, &ALL_SOURCES).await
    }

    pub async fn medium_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        self.data(site_id, time_frame, filters, &UTM_MEDIUM).await
    }

    pub async fn source_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        self.data(site_id, time_frame, filters, &UTM_SOURCE).await
    }

    pub async fn campaign_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        self.data(site_id, time_frame, filters, &UTM_CAMPAIGN).await
    }

    pub async fn term_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        self.data(site_id, time_frame, filters, &UTM_TERM).await
    }

    pub async fn content_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        self.data(site_id, time_frame, filters, &UTM_CONTENT).await
    }
}
