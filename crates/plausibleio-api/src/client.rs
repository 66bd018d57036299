use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use plausibleio_core::analytics::{StatsApi, StatsQuery};
use plausibleio_core::config::Config;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid analytics api url: {0}")]
    InvalidUrl(String),

    #[error("analytics api request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("analytics api error {status}: {body}")]
    Status { status: u16, body: String },
}

/// HTTP client for a Plausible-compatible stats API.
///
/// Every request is a `GET {base_url}{endpoint}?{params}` authorized with the
/// configured bearer token. Responses wrapped as `{"results": ...}` are
/// unwrapped before they are handed to the caller.
#[derive(Clone)]
pub struct PlausibleClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl PlausibleClient {
    /// `base_url` must end in `/`; see `plausibleio_core::config::normalize_api_url`.
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url, &config.api_key)
    }

    fn url(&self, query: &StatsQuery) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&format!("{}{}", self.base_url, query.endpoint.path()))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        {
            let mut qs = url.query_pairs_mut();
            for (name, value) in &query.params {
                qs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    async fn get(&self, query: &StatsQuery) -> Result<Value, ApiError> {
        let url = self.url(query)?;
        debug!(endpoint = query.endpoint.path(), site_id = %query.site_id, "stats request");

        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = resp.json().await?;
        Ok(unwrap_results(body))
    }
}

/// Take the `results` member out of a wrapped response; other payloads
/// (bare arrays, realtime counters) pass through.
pub fn unwrap_results(body: Value) -> Value {
    match body {
        Value::Object(mut obj) if obj.contains_key("results") => {
            obj.remove("results").unwrap_or(Value::Null)
        }
        other => other,
    }
}

#[async_trait::async_trait]
impl StatsApi for PlausibleClient {
    async fn send(&self, query: &StatsQuery) -> anyhow::Result<Value> {
        Ok(self.get(query).await?)
    }
}
