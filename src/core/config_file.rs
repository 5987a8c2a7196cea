//! User configuration file handling
//!
//! Manages settings from ~/.config/fontshelf/settings.json

use crate::ui::theme::ThemeVariant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// User configuration from ~/.config/fontshelf/settings.json
///
/// These settings override built-in defaults but are overridden by CLI arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Default theme ("light", "dark" or "system")
    pub default_theme: Option<String>,
    /// API host the pages read from; unset means this server's own address
    pub base_url: Option<String>,
    pub bind_address: Option<SocketAddr>,
    /// Fixture JSON to serve instead of the embedded data
    pub data_path: Option<PathBuf>,
}

impl ConfigFile {
    /// Get the path to the fontshelf config directory
    pub fn config_dir() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")));
        config_dir.join("fontshelf")
    }

    /// Get the path to the user config file
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("settings.json")
    }

    /// Get the path to the logs directory
    pub fn logs_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load configuration from the user config file
    pub fn load() -> Option<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    debug!("Loaded user settings from {:?}", path);
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse settings.json: {}", e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read settings.json: {}", e);
                None
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        debug!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Settings written by `--new-config`
    pub fn starter() -> Self {
        Self {
            default_theme: Some(ThemeVariant::default().as_str().to_string()),
            base_url: None,
            bind_address: crate::core::settings::DEFAULT_BIND_ADDRESS.parse().ok(),
            data_path: None,
        }
    }

    /// Initialize the user configuration directory
    ///
    /// This creates:
    /// 1. The config directory
    /// 2. A settings.json file with default values
    /// 3. A logs/ directory for `--log-file`
    pub fn initialize_config_directory(config_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(config_dir)?;
        println!("Created config directory: {:?}", config_dir);

        let logs_dir = config_dir.join("logs");
        fs::create_dir_all(&logs_dir)?;
        println!("Created logs directory: {:?}", logs_dir);

        let settings_path = config_dir.join("settings.json");
        if !settings_path.exists() {
            Self::starter().save_to(&settings_path)?;
            println!("Created settings file: {:?}", settings_path);
        } else {
            println!("Settings file already exists: {:?}", settings_path);
        }

        println!("\nConfiguration initialized successfully!");
        println!("You can now:");
        println!("  - Edit settings at: {:?}", settings_path);
        println!("  - View application logs in: {:?}", logs_dir);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_writes_starter_settings() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join("fontshelf");

        ConfigFile::initialize_config_directory(&config_dir).unwrap();

        assert!(config_dir.join("logs").is_dir());
        let loaded = ConfigFile::load_from(&config_dir.join("settings.json")).unwrap();
        assert_eq!(loaded, ConfigFile::starter());
    }

    #[test]
    fn test_initialize_keeps_existing_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let custom = ConfigFile {
            default_theme: Some("dark".into()),
            ..Default::default()
        };
        custom.save_to(&path).unwrap();

        ConfigFile::initialize_config_directory(dir.path()).unwrap();
        assert_eq!(ConfigFile::load_from(&path), Some(custom));
    }

    #[test]
    fn test_unparseable_settings_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ nope").unwrap();
        assert_eq!(ConfigFile::load_from(&path), None);
        assert_eq!(ConfigFile::load_from(&dir.path().join("missing.json")), None);
    }
}
