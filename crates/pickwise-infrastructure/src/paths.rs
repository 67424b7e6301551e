//! Unified path management for pickwise configuration files.
//!
//! All client configuration and persisted preferences live under a single
//! per-user config directory, resolved the same way on every platform.
//!
//! ```text
//! ~/.config/pickwise/          # Config directory
//! ├── config.toml              # Client configuration (backend URL)
//! └── preferences.toml         # Persisted user preferences (theme, language)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for pickwise.
pub struct PickwisePaths;

impl PickwisePaths {
    /// Returns the pickwise configuration directory.
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("pickwise"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted preferences file.
    pub fn preferences_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("preferences.toml"))
    }
}
