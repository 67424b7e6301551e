//! Filesystem-backed infrastructure: path resolution, client configuration,
//! and the persisted preference store.

pub mod config_service;
pub mod paths;
pub mod preference_store;

pub use config_service::{ClientConfig, ConfigService};
pub use paths::{PathError, PickwisePaths};
pub use preference_store::PreferenceStore;
