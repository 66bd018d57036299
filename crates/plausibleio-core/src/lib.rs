pub mod analytics;
pub mod config;
pub mod error;
pub mod filter;
pub mod geo;
pub mod labels;
pub mod metrics;
pub mod row;
pub mod widget;
