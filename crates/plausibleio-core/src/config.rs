use url::Url;

use crate::error::CoreError;

/// Upper bound of remembered dashboard users when `PLAUSIBLEIO_MAX_USERS` is unset.
pub const DEFAULT_MAX_USERS: usize = 1000;

/// Reporting periods understood by the analytics API.
pub const DEFAULT_TIME_FRAMES: &[&str] = &["day", "7d", "30d", "month", "6mo", "12mo"];

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the analytics API, always ending in `/`.
    pub api_url: String,
    pub api_key: String,
    /// Site ids the dashboard may query. The first one is the fallback.
    pub site_ids: Vec<String>,
    pub time_frames: Vec<String>,
    pub default_time_frame: String,
    pub cors_origins: Vec<String>,
    /// Capacity of the per-user selection store.
    pub max_users: usize,
}

fn list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse and normalize the API base URL so endpoint paths can be appended.
pub fn normalize_api_url(raw: &str) -> Result<String, CoreError> {
    let url = Url::parse(raw.trim()).map_err(|e| CoreError::Config(format!("invalid api url: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(CoreError::Config(format!(
            "api url must be http(s), got {}",
            url.scheme()
        )));
    }
    let mut normalized = url.to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}

impl Config {
    pub fn from_env() -> Result<Self, CoreError> {
        let time_frames = std::env::var("PLAUSIBLEIO_TIME_FRAMES")
            .map(|v| list(&v))
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_TIME_FRAMES.iter().map(|s| s.to_string()).collect());

        let default_time_frame = std::env::var("PLAUSIBLEIO_DEFAULT_TIME_FRAME")
            .ok()
            .filter(|tf| time_frames.contains(tf))
            .or_else(|| {
                time_frames
                    .iter()
                    .find(|tf| tf.as_str() == "30d")
                    .or(time_frames.first())
                    .cloned()
            })
            .unwrap_or_else(|| "30d".to_string());

        Ok(Self {
            port: std::env::var("PLAUSIBLEIO_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|e| CoreError::Config(format!("invalid port: {e}")))?,
            api_url: normalize_api_url(
                &std::env::var("PLAUSIBLEIO_API_URL")
                    .unwrap_or_else(|_| "https://plausible.io/".to_string()),
            )?,
            api_key: std::env::var("PLAUSIBLEIO_API_KEY").unwrap_or_default(),
            site_ids: std::env::var("PLAUSIBLEIO_SITE_IDS")
                .map(|v| list(&v))
                .unwrap_or_default(),
            time_frames,
            default_time_frame,
            cors_origins: std::env::var("PLAUSIBLEIO_CORS_ORIGINS")
                .map(|v| list(&v))
                .unwrap_or_default(),
            max_users: match std::env::var("PLAUSIBLEIO_MAX_USERS") {
                Ok(raw) => raw
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| CoreError::Config(format!("invalid max users: {raw}")))?,
                Err(_) => DEFAULT_MAX_USERS,
            },
        })
    }

    pub fn is_available_site_id(&self, site_id: &str) -> bool {
        self.site_ids.iter().any(|s| s == site_id)
    }

    pub fn is_time_frame(&self, time_frame: &str) -> bool {
        self.time_frames.iter().any(|tf| tf == time_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_splits_and_trims() {
        assert_eq!(list(" a.dev, ,b.dev "), vec!["a.dev", "b.dev"]);
        assert!(list("").is_empty());
    }

    #[test]
    fn api_url_gets_trailing_slash() {
        assert_eq!(
            normalize_api_url("https://stats.example.com/plausible").ok().as_deref(),
            Some("https://stats.example.com/plausible/")
        );
        assert_eq!(
            normalize_api_url("https://plausible.io").ok().as_deref(),
            Some("https://plausible.io/")
        );
    }

    #[test]
    fn api_url_must_be_http() {
        assert!(normalize_api_url("ftp://plausible.io").is_err());
        assert!(normalize_api_url("not a url").is_err());
    }
}
