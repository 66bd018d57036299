pub mod client;
pub mod providers;

pub use client::{ApiError, PlausibleClient};
