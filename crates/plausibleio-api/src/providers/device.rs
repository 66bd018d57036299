use plausibleio_core::analytics::StatsApi;
use plausibleio_core::filter::{self, Filter};
use plausibleio_core::labels::LabelResolver;
use plausibleio_core::widget::WidgetData;

use super::{single_dimension_data, Dimension};

const BROWSER: Dimension = Dimension {
    property: "visit:browser",
    field: "browser",
    label: "barChart.labels.browser",
    filter_label: "filter.deviceData.browserIs",
};

const BROWSER_VERSION: Dimension = Dimension {
    property: "visit:browser_version",
    field: "browser_version",
    label: "barChart.labels.browserVersion",
    filter_label: "filter.deviceData.browserVersionIs",
};

const OS: Dimension = Dimension {
    property: "visit:os",
    field: "os",
    label: "barChart.labels.os",
    filter_label: "filter.deviceData.osIs",
};

const OS_VERSION: Dimension = Dimension {
    property: "visit:os_version",
    field: "os_version",
    label: "barChart.labels.osVersion",
    filter_label: "filter.deviceData.osVersionIs",
};

const DEVICE: Dimension = Dimension {
    property: "visit:device",
    field: "device",
    label: "barChart.labels.screenSize",
    filter_label: "filter.deviceData.screenSizeIs",
};

/// Browser, operating system and screen-size breakdowns.
pub struct DeviceDataProvider<'a> {
    api: &'a dyn StatsApi,
    labels: &'a dyn LabelResolver,
}

impl<'a> DeviceDataProvider<'a> {
    pub fn new(api: &'a dyn StatsApi, labels: &'a dyn LabelResolver) -> Self {
        Self { api, labels }
    }

    /// Browsers, or versions of the filtered browser.
    pub async fn browser_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        let dimension = if filter::is_active(BROWSER.property, filters).is_some() {
            &BROWSER_VERSION
        } else {
            &BROWSER
        };
        single_dimension_data(self.api, self.labels, site_id, time_frame, filters, dimension).await
    }

    /// Operating systems, or versions of the filtered one.
    pub async fn os_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        let dimension = if filter::is_active(OS.property, filters).is_some() {
            &OS_VERSION
        } else {
            &OS
        };
        single_dimension_data(self.api, self.labels, site_id, time_frame, filters, dimension).await
    }

    pub async fn device_data(&self, site_id: &str, time_frame: &str, filters: &[Filter]) -> WidgetData {
        single_dimension_data(self.api, self.labels, site_id, time_frame, filters, &DEVICE).await
    }
}
