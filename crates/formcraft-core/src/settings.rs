//! Runtime configuration for the formcraft service.
//!
//! [`Settings`] holds every knob the system reads at startup, with defaults
//! matching the reference deployment (local API server on port 5000 backed
//! by a `db.json` file). Settings can be loaded from a TOML file; missing
//! keys fall back to their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FormcraftError, FormcraftResult};

/// The complete set of service settings.
///
/// # Examples
///
/// ```
/// use formcraft_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.bind_addr, "127.0.0.1:5000");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled. Controls log formatting.
    pub debug: bool,
    /// Address the HTTP server binds to.
    pub bind_addr: String,
    /// Path of the JSON file backing the record store.
    pub db_path: PathBuf,
    /// Tracing filter directive (e.g. "debug", "info", "formcraft=trace").
    pub log_level: String,
    /// Whether to answer cross-origin requests from any origin.
    pub cors_allow_any_origin: bool,
    /// Whether to seed the store with sample forms when the db file is new.
    pub seed_sample_data: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            bind_addr: "127.0.0.1:5000".to_string(),
            db_path: PathBuf::from("db.json"),
            log_level: "info".to_string(),
            cors_allow_any_origin: true,
            seed_sample_data: true,
        }
    }
}

impl Settings {
    /// Parses settings from a TOML string. Keys not present keep their
    /// default values.
    pub fn from_toml_str(raw: &str) -> FormcraftResult<Self> {
        toml::from_str(raw)
            .map_err(|e| FormcraftError::Configuration(format!("Invalid settings TOML: {e}")))
    }

    /// Loads settings from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> FormcraftResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&raw)
    }
}
