//! Configuration service implementation.
//!
//! Loads the client configuration from the configuration file
//! (~/.config/pickwise/config.toml), creating it with defaults when missing.

use crate::paths::PickwisePaths;
use pickwise_core::{PickwiseError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Client-side configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the recommendation backend.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Loads and caches the client configuration.
///
/// The file is read once and cached; repeated accesses avoid file I/O until
/// the cache is invalidated.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    config: Arc<RwLock<Option<ClientConfig>>>,
}

impl ConfigService {
    /// Creates a service over the default config file location.
    pub fn new() -> Result<Self> {
        let path = PickwisePaths::config_file()
            .map_err(|err| PickwiseError::config(err.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a service over an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing file is created with defaults; an unreadable or malformed
    /// file falls back to defaults without being overwritten.
    pub fn get_config(&self) -> ClientConfig {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|err| {
            log::warn!("failed to load config, using defaults: {err}");
            ClientConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Result<ClientConfig> {
        if !self.path.exists() {
            let default_config = ClientConfig::default();
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let rendered = toml::to_string_pretty(&default_config)?;
            std::fs::write(&self.path, rendered)?;
            return Ok(default_config);
        }

        let raw = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&raw)?)
    }
}
