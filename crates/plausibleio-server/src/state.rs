use std::sync::Arc;

use plausibleio_core::analytics::StatsApi;
use plausibleio_core::config::Config;
use plausibleio_core::labels::LabelResolver;
use plausibleio_metadata::{ConfigurationService, ConfigurationStore};

/// Shared application state injected into every Axum handler via
/// [`axum::extract::State`].
pub struct AppState {
    /// Transport to the analytics API. Tests swap in a scripted fake.
    pub api: Arc<dyn StatsApi>,

    pub labels: Arc<dyn LabelResolver>,

    /// Per-user dashboard selection (site, time frame, filters).
    pub configuration: ConfigurationService,

    /// Parsed configuration, loaded once at startup from environment variables.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        api: Arc<dyn StatsApi>,
        labels: Arc<dyn LabelResolver>,
        store: Arc<dyn ConfigurationStore>,
        config: Config,
    ) -> Self {
        let config = Arc::new(config);
        Self {
            api,
            labels,
            configuration: ConfigurationService::new(store, Arc::clone(&config)),
            config,
        }
    }
}
