// ABOUTME: Configuration management for slide-picker
// Layered TOML files: project overrides user, user overrides system

use crate::models::UserType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub ui: UiPreferences,

    #[serde(default)]
    pub wizard: WizardDefaults,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Delays of the simulated collaborators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_report_delay_ms")]
    pub report_delay_ms: u64,

    #[serde(default = "default_export_delay_ms")]
    pub export_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            report_delay_ms: default_report_delay_ms(),
            export_delay_ms: default_export_delay_ms(),
        }
    }
}

impl SimulationConfig {
    pub fn report_delay(&self) -> Duration {
        Duration::from_millis(self.report_delay_ms)
    }

    pub fn export_delay(&self) -> Duration {
        Duration::from_millis(self.export_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Event loop tick in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Show the thumbnail strip under the slide viewer
    #[serde(default = "default_true")]
    pub show_thumbnails: bool,

    /// How long success and info notifications stay visible
    #[serde(default = "default_notification_secs")]
    pub notification_secs: u64,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            show_thumbnails: default_true(),
            notification_secs: default_notification_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct WizardDefaults {
    #[serde(default)]
    pub default_user_type: UserType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    /// Write a JSON manifest of each consolidated deck here
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_report_delay_ms() -> u64 {
    1500
}

fn default_export_delay_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_notification_secs() -> u64 {
    3
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        Self::load_from_paths(&Self::get_config_paths())
    }

    /// Load and merge the given files, highest precedence first. Missing files are skipped.
    pub fn load_from_paths(paths: &[PathBuf]) -> Result<Self> {
        let mut merged = toml::Value::Table(toml::Table::new());

        for path in paths.iter().rev() {
            if !path.exists() {
                continue;
            }
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let layer: toml::Value = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            debug!("Merging config from {}", path.display());
            merge_values(&mut merged, layer);
        }

        merged
            .try_into()
            .context("Config files do not describe a valid configuration")
    }

    /// Save configuration to user config directory
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::get_user_config_dir()?.join(CONFIG_FILE);
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get configuration file paths in order of precedence
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".slide-picker").join(CONFIG_FILE));
        }

        // 2. User config (~/.slide-picker/config/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join(CONFIG_FILE));
        }

        // 3. System config
        paths.push(PathBuf::from("/etc/slide-picker").join(CONFIG_FILE));

        paths
    }

    /// Root of per-user state (~/.slide-picker)
    pub fn get_user_data_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".slide-picker"))
    }

    pub fn get_user_config_dir() -> Result<PathBuf> {
        Ok(Self::get_user_data_dir()?.join("config"))
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms.max(10))
    }
}

/// Overlay `layer` onto `base`, descending into tables
fn merge_values(base: &mut toml::Value, layer: toml::Value) {
    match (base, layer) {
        (toml::Value::Table(base), toml::Value::Table(layer)) => {
            for (key, value) in layer {
                match base.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, layer) => *base = layer,
    }
}
