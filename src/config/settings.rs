//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Datastore and artifact directory settings
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Data directory holding the database and its backups
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory holding uploaded meeting audio
    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,

    /// Directory holding generated PDF reports
    #[serde(default = "default_pdf_dir")]
    pub pdf_dir: PathBuf,
}

/// Resolved directory layout handed explicitly to every maintenance
/// operation, so operations never read global state and tests can point
/// them at temporary directories.
#[derive(Debug, Clone)]
pub struct StorePaths {
    pub data_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub pdf_dir: PathBuf,
}

impl StorePaths {
    /// Path of the database file owned by the meeting analyzer.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("meetings.db")
    }

    /// Directory that receives timestamped backups.
    pub fn backup_dir(&self) -> PathBuf {
        self.data_dir.join("backups")
    }
}

// Default value functions

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "meetkeep", "meetkeep")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/meetkeep"))
}

fn default_upload_dir() -> PathBuf {
    default_data_dir().join("uploads")
}

fn default_pdf_dir() -> PathBuf {
    default_data_dir().join("pdfs")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            upload_dir: default_upload_dir(),
            pdf_dir: default_pdf_dir(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::debug!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        for (var, target) in [
            ("MEETKEEP_DATA_DIR", &mut self.storage.data_dir),
            ("MEETKEEP_UPLOAD_DIR", &mut self.storage.upload_dir),
            ("MEETKEEP_PDF_DIR", &mut self.storage.pdf_dir),
        ] {
            if let Ok(value) = std::env::var(var) {
                if !value.trim().is_empty() {
                    *target = PathBuf::from(value);
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "meetkeep", "meetkeep")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Resolved directory layout for the maintenance operations.
    pub fn store_paths(&self) -> StorePaths {
        StorePaths {
            data_dir: self.storage.data_dir.clone(),
            upload_dir: self.storage.upload_dir.clone(),
            pdf_dir: self.storage.pdf_dir.clone(),
        }
    }
}
