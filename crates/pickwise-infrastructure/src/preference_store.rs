//! Persisted theme preference.
//!
//! The visual theme is the single piece of client state that survives a
//! restart; everything else about a session is deliberately ephemeral.
//! Writes go through a temp file rename so a crash mid-write never
//! truncates the stored value.

use crate::paths::PickwisePaths;
use pickwise_core::theme::Theme;
use pickwise_core::{PickwiseError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct PreferencesFile {
    #[serde(default)]
    theme: Theme,
}

/// Loads and saves the persisted [`Theme`], caching the last loaded value.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    cached: Arc<RwLock<Option<Theme>>>,
}

impl PreferenceStore {
    /// Creates a store over the default preferences file location.
    pub fn new() -> Result<Self> {
        let path = PickwisePaths::preferences_file()
            .map_err(|err| PickwiseError::config(err.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a store over an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            cached: Arc::new(RwLock::new(None)),
        }
    }

    /// Loads the stored theme, falling back to the default when the file is
    /// missing or unreadable. A corrupt file never blocks startup.
    pub fn load(&self) -> Theme {
        {
            let read_lock = self.cached.read().unwrap();
            if let Some(cached) = *read_lock {
                return cached;
            }
        }

        let loaded = self
            .read_file()
            .map(|file| file.theme)
            .unwrap_or_else(|err| {
                log::warn!("failed to load preferences, using defaults: {err}");
                Theme::default()
            });

        {
            let mut write_lock = self.cached.write().unwrap();
            *write_lock = Some(loaded);
        }

        loaded
    }

    /// Persists the theme and updates the cache.
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rendered = toml::to_string_pretty(&PreferencesFile { theme })?;
        let tmp = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp, rendered)?;
        std::fs::rename(&tmp, &self.path)?;

        let mut write_lock = self.cached.write().unwrap();
        *write_lock = Some(theme);
        Ok(())
    }

    fn read_file(&self) -> Result<PreferencesFile> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&raw)?)
    }
}
