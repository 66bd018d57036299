use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use plausibleio_core::config::{Config, DEFAULT_MAX_USERS};
use plausibleio_core::filter::Filter;

/// Dashboard selection remembered per user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfiguration {
    pub site_id: Option<String>,
    pub time_frame: Option<String>,
    #[serde(default)]
    pub filters: Vec<Filter>,
}

/// Storage interface for per-user dashboard settings.
///
/// The server ships with [`InMemoryConfigurationStore`]; a persistent backend
/// can be swapped in without touching the route handlers.
#[async_trait]
pub trait ConfigurationStore: Send + Sync + 'static {
    async fn get(&self, user: &str) -> anyhow::Result<UserConfiguration>;
    async fn set_site_id(&self, user: &str, site_id: &str) -> anyhow::Result<()>;
    async fn set_time_frame(&self, user: &str, time_frame: &str) -> anyhow::Result<()>;
    async fn set_filters(&self, user: &str, filters: &[Filter]) -> anyhow::Result<()>;
}

#[derive(Debug)]
struct Entry {
    configuration: UserConfiguration,
    last_used: u64,
}

#[derive(Debug, Default)]
struct Users {
    entries: HashMap<String, Entry>,
    clock: u64,
}

impl Users {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Entry of `user`, created if missing. At `capacity` the least recently
    /// used entry makes room.
    fn entry(&mut self, user: &str, capacity: usize) -> &mut UserConfiguration {
        let now = self.tick();
        if !self.entries.contains_key(user) && self.entries.len() >= capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(name, _)| name.clone());
            if let Some(oldest) = oldest {
                debug!(user = %oldest, "evicting least recently used configuration");
                self.entries.remove(&oldest);
            }
        }
        let entry = self.entries.entry(user.to_string()).or_insert_with(|| Entry {
            configuration: UserConfiguration::default(),
            last_used: now,
        });
        entry.last_used = now;
        &mut entry.configuration
    }
}

/// Process-local store holding at most `capacity` users. Once full, the least
/// recently read or written user is evicted.
#[derive(Debug)]
pub struct InMemoryConfigurationStore {
    capacity: usize,
    users: RwLock<Users>,
}

impl InMemoryConfigurationStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_USERS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            users: RwLock::new(Users::default()),
        }
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryConfigurationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigurationStore for InMemoryConfigurationStore {
    async fn get(&self, user: &str) -> anyhow::Result<UserConfiguration> {
        let mut users = self.users.write().await;
        let now = users.tick();
        Ok(match users.entries.get_mut(user) {
            Some(entry) => {
                entry.last_used = now;
                entry.configuration.clone()
            }
            None => UserConfiguration::default(),
        })
    }

    async fn set_site_id(&self, user: &str, site_id: &str) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        users.entry(user, self.capacity).site_id = Some(site_id.to_string());
        Ok(())
    }

    async fn set_time_frame(&self, user: &str, time_frame: &str) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        users.entry(user, self.capacity).time_frame = Some(time_frame.to_string());
        Ok(())
    }

    async fn set_filters(&self, user: &str, filters: &[Filter]) -> anyhow::Result<()> {
        let mut users = self.users.write().await;
        users.entry(user, self.capacity).filters = filters.to_vec();
        Ok(())
    }
}

/// Resolves the dashboard selection of a user against the configured sites
/// and time frames.
///
/// Read failures of the store degrade to the configured defaults; write
/// failures are returned to the caller.
#[derive(Clone)]
pub struct ConfigurationService {
    store: Arc<dyn ConfigurationStore>,
    config: Arc<Config>,
}

impl ConfigurationService {
    pub fn new(store: Arc<dyn ConfigurationStore>, config: Arc<Config>) -> Self {
        Self { store, config }
    }

    async fn user_configuration(&self, user: &str) -> UserConfiguration {
        match self.store.get(user).await {
            Ok(configuration) => configuration,
            Err(e) => {
                warn!(user, error = %e, "failed to read user configuration");
                UserConfiguration::default()
            }
        }
    }

    pub fn available_site_ids(&self) -> &[String] {
        &self.config.site_ids
    }

    pub fn time_frame_values(&self) -> &[String] {
        &self.config.time_frames
    }

    /// Stored site id if still configured, else the first configured site.
    /// `None` when no site is configured at all.
    pub async fn site_id_from_user_configuration(&self, user: &str) -> Option<String> {
        self.user_configuration(user)
            .await
            .site_id
            .filter(|site_id| self.config.is_available_site_id(site_id))
            .or_else(|| self.config.site_ids.first().cloned())
    }

    /// Stored time frame if still valid, else the configured default.
    pub async fn time_frame_from_user_configuration(&self, user: &str) -> String {
        self.user_configuration(user)
            .await
            .time_frame
            .filter(|time_frame| self.config.is_time_frame(time_frame))
            .unwrap_or_else(|| self.config.default_time_frame.clone())
    }

    pub async fn filters_from_user_configuration(&self, user: &str) -> Vec<Filter> {
        self.user_configuration(user).await.filters
    }

    pub async fn persist_site_id(&self, user: &str, site_id: &str) -> anyhow::Result<()> {
        self.store.set_site_id(user, site_id).await
    }

    pub async fn persist_time_frame(&self, user: &str, time_frame: &str) -> anyhow::Result<()> {
        self.store.set_time_frame(user, time_frame).await
    }

    pub async fn persist_filters(&self, user: &str, filters: &[Filter]) -> anyhow::Result<()> {
        self.store.set_filters(user, filters).await
    }
}
