use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;
use types::errors::TrackerError;

pub const CONFIG_PATH_ENV: &str = "TSS_TRACKER_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Clear signed flags when the driver restarts the ceremony at an earlier
    /// phase without reporting `error` first.
    pub rollback_on_regression: bool,
    /// Rounds a signing session runs through once co-signers have joined.
    pub signature_rounds: u32,
    pub ceremony_timeout_secs: u64,
    pub poll_interval_ms: u64,
    pub log_file_path: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            rollback_on_regression: false,
            signature_rounds: 4,
            ceremony_timeout_secs: 300,
            poll_interval_ms: 100,
            log_file_path: None,
        }
    }
}

impl TrackerConfig {
    #[must_use]
    pub const fn ceremony_timeout(&self) -> Duration {
        Duration::from_secs(self.ceremony_timeout_secs)
    }

    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn load(path: &Path) -> Result<Self, TrackerError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            TrackerError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let config = serde_yaml::from_str::<Self>(&contents)?;
        debug!("Loaded tracker config from {}", path.display());
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, TrackerError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), TrackerError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_str = serde_yaml::to_string(self)?;
        fs::write(path, config_str).map_err(|e| {
            TrackerError::Config(format!("Failed to write {}: {e}", path.display()))
        })?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf, TrackerError> {
        let proj_dirs = ProjectDirs::from("", "", "TssTracker").ok_or_else(|| {
            TrackerError::Config("Failed to determine project directory".into())
        })?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    /// Explicit path first, then `TSS_TRACKER_CONFIG` (a `.env` file is
    /// honoured), then the per-user config directory.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Result<PathBuf, TrackerError> {
        if let Some(mut path) = explicit {
            if path.is_dir() {
                path.push("config.yaml");
            }
            return Ok(path);
        }

        dotenvy::dotenv().ok();
        if let Ok(path) = dotenvy::var(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        Self::default_path()
    }
}
