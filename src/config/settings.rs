//! Application settings

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::table::DEFAULT_ROWS_PER_PAGE;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Database file path, or `:memory:`
    pub database_path: String,

    /// Initial rows per page for every table
    pub rows_per_page: usize,

    /// Choices cycled with `+` / `-`
    pub rows_per_page_options: Vec<usize>,

    /// Log level used when RUST_LOG is unset
    pub log_level: String,

    /// Log file path
    pub log_file: String,

    /// Theme name
    pub theme: String,

    /// Key overrides by action name, e.g. `"delete": "x"`
    pub keys: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: Self::default_db_path().to_string_lossy().to_string(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows_per_page_options: vec![5, 10, 25],
            log_level: "info".to_string(),
            log_file: Self::default_log_path().to_string_lossy().to_string(),
            theme: "default".to_string(),
            keys: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from file or create default
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);

        let settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            serde_json::from_str::<Self>(&content)?
        } else {
            Self::default()
        };
        Ok(settings.validated())
    }

    /// Save settings to file
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);

        // Create parent directory if needed
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    /// Drop zero page sizes and make sure the default is one of the options
    pub fn validated(mut self) -> Self {
        self.rows_per_page_options.retain(|&n| n > 0);
        if self.rows_per_page == 0 {
            tracing::warn!("rows_per_page of 0 in settings, using {}", DEFAULT_ROWS_PER_PAGE);
            self.rows_per_page = DEFAULT_ROWS_PER_PAGE;
        }
        if !self.rows_per_page_options.contains(&self.rows_per_page) {
            self.rows_per_page_options.push(self.rows_per_page);
        }
        self.rows_per_page_options.sort_unstable();
        self.rows_per_page_options.dedup();
        self
    }

    /// Get default config directory
    pub fn config_dir() -> PathBuf {
        ProjectDirs::from("com", "payroll-admin", "payroll-admin")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
                    .join("payroll-admin")
            })
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    /// Get default database path
    pub fn default_db_path() -> PathBuf {
        Self::config_dir().join("payroll.db")
    }

    /// Get default log file path
    pub fn default_log_path() -> PathBuf {
        Self::config_dir().join("payroll-admin.log")
    }
}
