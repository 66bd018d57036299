//! Shapes returned to the dashboard frontend.

use serde::Serialize;

use crate::row::RowSet;

/// Filter metadata of a column: clicking a cell filters on `name`, taking the
/// value from the row field named by `value` (the column's own field when
/// absent).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnFilter {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub label: String,
}

impl ColumnFilter {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            label: label.into(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Display metadata for one field of the data rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ColumnFilter>,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: ColumnFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// `{data, columns}`: the unit a table/chart widget renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetData {
    pub data: RowSet,
    pub columns: Vec<ColumnDescriptor>,
}

/// One tab of a multi-tab widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabData {
    pub tab: &'static str,
    pub data: WidgetData,
}

impl TabData {
    pub fn new(tab: &'static str, data: WidgetData) -> Self {
        Self { tab, data }
    }
}
