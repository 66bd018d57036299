//! Dashboard filters and their `property==value` wire form.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Separator between property and value in an encoded filter.
const ASSIGN: &str = "==";
/// Separator between filters in the `filters` query parameter (logical AND).
const AND: &str = ";";

/// Properties the analytics API accepts as filter targets.
pub const KNOWN_PROPERTIES: &[&str] = &[
    "event:goal",
    "event:page",
    "visit:entry_page",
    "visit:exit_page",
    "visit:source",
    "visit:referrer",
    "visit:utm_medium",
    "visit:utm_source",
    "visit:utm_campaign",
    "visit:utm_term",
    "visit:utm_content",
    "visit:device",
    "visit:browser",
    "visit:browser_version",
    "visit:os",
    "visit:os_version",
    "visit:country",
    "visit:region",
    "visit:city",
];

/// Custom event properties are filtered as `event:props:<name>`.
const EVENT_PROPS_PREFIX: &str = "event:props:";

/// A single dimension constraint.
///
/// Accepted in two shapes: `{name: "visit:country", value: "DE"}` or the
/// already encoded `{name: "visit:country==DE"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Filter {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: property.into(),
            value: Some(value.into()),
        }
    }

    /// Parse an encoded `property==value` segment.
    pub fn parse(encoded: &str) -> Option<Self> {
        let (property, value) = encoded.split_once(ASSIGN)?;
        let property = property.trim();
        if property.is_empty() {
            return None;
        }
        Some(Self::new(property, value))
    }

    /// The property part of `name` (everything before `==`).
    pub fn property(&self) -> &str {
        match self.name.split_once(ASSIGN) {
            Some((property, _)) => property,
            None => &self.name,
        }
    }

    /// Explicit `value`, or the part of `name` after `==`.
    pub fn value(&self) -> Option<&str> {
        self.value
            .as_deref()
            .or_else(|| self.name.split_once(ASSIGN).map(|(_, value)| value))
    }

    fn segment(&self) -> String {
        match self.value() {
            Some(value) => format!("{}{ASSIGN}{}", self.property(), value),
            None => self.name.clone(),
        }
    }
}

/// Serialize filters for the `filters` query parameter.
///
/// An empty list yields an empty string; callers omit the parameter then.
pub fn to_query_string(filters: &[Filter]) -> String {
    filters
        .iter()
        .map(Filter::segment)
        .collect::<Vec<_>>()
        .join(AND)
}

/// Parse a `filters` query parameter back into filters. Malformed segments
/// are skipped.
pub fn from_query_string(raw: &str) -> Vec<Filter> {
    raw.split(AND).filter_map(Filter::parse).collect()
}

/// The first filter constraining `property`, if any.
pub fn is_active<'a>(property: &str, filters: &'a [Filter]) -> Option<&'a Filter> {
    filters.iter().find(|f| f.property() == property)
}

pub fn value_of(property: &str, filters: &[Filter]) -> Option<String> {
    is_active(property, filters)
        .and_then(Filter::value)
        .map(str::to_string)
}

/// A copy of `filters` without any entry for `property`.
pub fn remove(property: &str, filters: &[Filter]) -> Vec<Filter> {
    filters
        .iter()
        .filter(|f| f.property() != property)
        .cloned()
        .collect()
}

pub fn is_known_property(property: &str) -> bool {
    KNOWN_PROPERTIES.contains(&property)
        || property
            .strip_prefix(EVENT_PROPS_PREFIX)
            .is_some_and(|name| !name.is_empty())
}

/// Sanitize a filter list received from the frontend.
///
/// Drops entries with an unknown property, an empty value, or a value
/// containing the `;` segment separator, and keeps only the first filter per
/// property.
pub fn check_filters(filters: Vec<Filter>) -> Vec<Filter> {
    let mut checked: Vec<Filter> = Vec::with_capacity(filters.len());
    for filter in filters {
        let property = filter.property().trim();
        if !is_known_property(property) {
            tracing::debug!(property, "dropping filter on unknown property");
            continue;
        }
        let Some(value) = filter.value().filter(|v| !v.is_empty()) else {
            continue;
        };
        if value.contains(AND) {
            tracing::debug!(property, "dropping filter with separator in value");
            continue;
        }
        if is_active(property, &checked).is_some() {
            continue;
        }
        checked.push(Filter::new(property, value));
    }
    checked
}

/// Decode the JSON-encoded `filter` request parameter.
pub fn decode_filters(raw: &str) -> Result<Vec<Filter>, CoreError> {
    Ok(serde_json::from_str(raw)?)
}
