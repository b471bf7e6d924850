//! Dashboard configuration file support.
//!
//! Reads `dashboard.toml`. Every setting has a default, so an empty file (or
//! no file at all, via [`DashboardConfig::default`]) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::repository::{ErrorContext, RepositoryError};
use crate::services::calendar::ViewMode;

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub scheduler: SchedulerSettings,
    #[serde(default)]
    pub seed: SeedSettings,
}

/// Scheduler screen settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerSettings {
    #[serde(default = "default_view")]
    pub default_view: String,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            default_view: default_view(),
        }
    }
}

/// Where the initial records come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSettings {
    /// JSON seed document; relative paths resolve against the config file.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_view() -> String {
    "week".to_string()
}

impl DashboardConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, RepositoryError> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| {
            RepositoryError::ConfigurationError {
                message: format!("Failed to parse config: {}", e),
                context: ErrorContext::new("parse_config"),
            }
        })?;
        config.view_mode()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// A relative `seed.path` is rewritten to be relative to the file's
    /// directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| RepositoryError::ConfigurationError {
            message: format!("Failed to read config file: {}", e),
            context: ErrorContext::new("load_config").with_details(path.display().to_string()),
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let (Some(seed_path), Some(dir)) = (config.seed.path.as_ref(), path.parent()) {
            if seed_path.is_relative() {
                config.seed.path = Some(dir.join(seed_path));
            }
        }
        log::debug!("Loaded dashboard config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `dashboard.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, RepositoryError> {
        let search_paths = [
            PathBuf::from("dashboard.toml"),
            PathBuf::from("backend/dashboard.toml"),
            PathBuf::from("../dashboard.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Err(RepositoryError::configuration(
            "No dashboard.toml found in standard locations",
        ))
    }

    /// Initial scheduler view mode.
    pub fn view_mode(&self) -> Result<ViewMode, RepositoryError> {
        self.scheduler.default_view.parse().map_err(|e: String| {
            RepositoryError::ConfigurationError {
                message: e,
                context: ErrorContext::new("view_mode").with_entity("scheduler.default_view"),
            }
        })
    }
}
