//! Label lookup for column headers and filter captions.

use std::collections::HashMap;

/// Resolves a localization key to display text.
pub trait LabelResolver: Send + Sync + 'static {
    fn label(&self, key: &str) -> String;
}

/// English labels. Unknown keys resolve to the key itself so a missing
/// translation is visible instead of blank.
#[derive(Debug, Clone)]
pub struct DefaultLabels {
    labels: HashMap<&'static str, &'static str>,
}

const ENGLISH: &[(&str, &str)] = &[
    ("barChart.labels.visitors", "Visitors"),
    ("barChart.labels.uniques", "Uniques"),
    ("barChart.labels.total", "Total"),
    ("barChart.labels.cr", "CR"),
    ("barChart.labels.country", "Country"),
    ("barChart.labels.region", "Region"),
    ("barChart.labels.city", "City"),
    ("barChart.labels.browser", "Browser"),
    ("barChart.labels.browserVersion", "${browser} version"),
    ("barChart.labels.os", "Operating system"),
    ("barChart.labels.osVersion", "${os} version"),
    ("barChart.labels.screenSize", "Screen Size"),
    ("barChart.labels.source", "Source"),
    ("barChart.labels.UTMMedium", "UTM Medium"),
    ("barChart.labels.UTMSource", "UTM Source"),
    ("barChart.labels.UTMCampaign", "UTM Campaign"),
    ("barChart.labels.UTMTerm", "UTM Term"),
    ("barChart.labels.UTMContent", "UTM Content"),
    ("barChart.labels.goal", "Goal"),
    ("barChart.labels.goalProperty", "Property"),
    ("barChart.labels.pageUrl", "Page url"),
    ("barChart.labels.pageviews", "Pageviews"),
    ("barChart.labels.entryPage", "Entry page"),
    ("barChart.labels.uniqueEntrances", "Unique Entrances"),
    ("barChart.labels.exitPage", "Exit page"),
    ("barChart.labels.uniqueExits", "Unique Exits"),
    ("filter.locationData.countryIs", "Country is"),
    ("filter.locationData.regionIs", "Region is"),
    ("filter.locationData.cityIs", "City is"),
    ("filter.deviceData.browserIs", "Browser is"),
    ("filter.deviceData.browserVersionIs", "${browser} version is"),
    ("filter.deviceData.osIs", "Operating system is"),
    ("filter.deviceData.osVersionIs", "${os} version is"),
    ("filter.deviceData.screenSizeIs", "Screen size is"),
    ("filter.sourceData.sourceIs", "Source is"),
    ("filter.sourceData.UTMMediumIs", "UTM Medium is"),
    ("filter.sourceData.UTMSourceIs", "UTM Source is"),
    ("filter.sourceData.UTMCampaignIs", "UTM Campaign is"),
    ("filter.sourceData.UTMTermIs", "UTM Term is"),
    ("filter.sourceData.UTMContentIs", "UTM Content is"),
    ("filter.goalData.goalIs", "Goal is"),
    ("filter.goalData.goalPropertyIs", "Goal property is"),
    ("filter.pageData.pageIs", "Page is"),
    ("filter.pageData.entryPageIs", "Entry page is"),
    ("filter.pageData.exitPageIs", "Exit page is"),
];

impl DefaultLabels {
    pub fn new() -> Self {
        Self {
            labels: ENGLISH.iter().copied().collect(),
        }
    }
}

impl Default for DefaultLabels {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelResolver for DefaultLabels {
    fn label(&self, key: &str) -> String {
        self.labels.get(key).copied().unwrap_or(key).to_string()
    }
}
