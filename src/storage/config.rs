//! Per-install configuration.
//!
//! Stored as TOML under the workspace root (`config/config.toml`). Every
//! field carries a serde default so older config files keep loading as the
//! schema grows.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::workspace_root;

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Practice-exam defaults applied when a spec omits a value.
    #[serde(default)]
    pub practice: PracticeSettings,
    /// Study-assistant collaborator toggles.
    #[serde(default)]
    pub assistant: AssistantSettings,
}

/// Defaults for practice exams offered by the portal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticeSettings {
    #[serde(default = "default_question_count")]
    pub question_count: usize,
    #[serde(default = "default_time_limit_minutes")]
    pub time_limit_minutes: u32,
    #[serde(default = "default_passing_score")]
    pub passing_score: u8,
    #[serde(default = "default_attempts")]
    pub attempts: u32,
}

impl Default for PracticeSettings {
    fn default() -> Self {
        Self {
            question_count: default_question_count(),
            time_limit_minutes: default_time_limit_minutes(),
            passing_score: default_passing_score(),
            attempts: default_attempts(),
        }
    }
}

const fn default_question_count() -> usize {
    10
}

const fn default_time_limit_minutes() -> u32 {
    15
}

const fn default_passing_score() -> u8 {
    70
}

const fn default_attempts() -> u32 {
    3
}

/// Study-assistant preferences tied to the local install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantSettings {
    /// Whether the remote text-generation collaborator may be called at all.
    #[serde(default = "default_remote_allowed")]
    pub remote_allowed: bool,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            remote_allowed: default_remote_allowed(),
        }
    }
}

const fn default_remote_allowed() -> bool {
    true
}

/// Path to the config file under the workspace root.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config").join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let path = config_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
