use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// General configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Color theme name ("dark" or "light")
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Simulate a paste keystroke after copying the selected result
    #[serde(default = "default_paste_on_select")]
    pub paste_on_select: bool,

    /// Delay before the paste keystroke fires, letting the terminal close
    #[serde(default = "default_paste_delay_ms")]
    pub paste_delay_ms: u64,

    /// Log level for the log file (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            theme: default_theme(),
            paste_on_select: default_paste_on_select(),
            paste_delay_ms: default_paste_delay_ms(),
            log_level: default_log_level(),
        }
    }
}

// Default value functions for serde
fn default_theme() -> String {
    "dark".to_string()
}

fn default_paste_on_select() -> bool {
    true
}

fn default_paste_delay_ms() -> u64 {
    150
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Trait for configuration storage
pub trait ConfigStorage: Send + Sync {
    /// Load configuration from file
    fn load(&self) -> Result<Config>;

    /// Save configuration to file
    fn save(&self, config: &Config) -> Result<()>;

    /// Get the config file path
    fn path(&self) -> &PathBuf;

    /// Create default configuration file if it doesn't exist
    fn create_default(&self) -> Result<()>;
}

/// TOML-based implementation of ConfigStorage
pub struct TomlConfigStorage {
    path: PathBuf,
}

impl TomlConfigStorage {
    /// Create a new TomlConfigStorage with the given path
    pub fn new(path: PathBuf) -> Self {
        TomlConfigStorage { path }
    }
}

impl ConfigStorage for TomlConfigStorage {
    fn load(&self) -> Result<Config> {
        // If file doesn't exist, create default and return it
        if !self.path.exists() {
            log::info!(
                "Config file not found at {:?}, creating default configuration",
                self.path
            );
            self.create_default()?;
            return Ok(Config::default());
        }

        // Read and parse TOML
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config from {:?}", self.path))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", self.path))?;

        log::info!("Loaded configuration from {:?}", self.path);
        log::debug!(
            "Config: theme={}, paste_on_select={}, paste_delay_ms={}",
            config.general.theme,
            config.general.paste_on_select,
            config.general.paste_delay_ms
        );

        Ok(config)
    }

    fn save(&self, config: &Config) -> Result<()> {
        // Serialize to TOML
        let toml_str =
            toml::to_string_pretty(config).with_context(|| "Failed to serialize configuration")?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        // Write to file
        fs::write(&self.path, toml_str)
            .with_context(|| format!("Failed to write config to {:?}", self.path))?;

        log::debug!("Saved configuration to {:?}", self.path);

        Ok(())
    }

    fn path(&self) -> &PathBuf {
        &self.path
    }

    fn create_default(&self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        // Use the example config compiled into the binary
        let example_config = include_str!("../recase.toml.example");

        fs::write(&self.path, example_config)
            .with_context(|| format!("Failed to create default config at {:?}", self.path))?;

        log::info!("Created default configuration at {:?}", self.path);

        Ok(())
    }
}

/// Ensure XDG data and config directories exist
/// Returns (data_dir, config_dir)
///
/// XDG Base Directory Specification:
/// - Data: $XDG_DATA_HOME/recase (default: ~/.local/share/recase)
/// - Config: $XDG_CONFIG_HOME/recase (default: ~/.config/recase)
pub fn ensure_directories() -> Result<(PathBuf, PathBuf)> {
    let home = env::var("HOME").context("HOME environment variable not set")?;
    let home_path = PathBuf::from(home);

    // Get XDG data directory
    let data_dir = if let Ok(xdg_data) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg_data).join("recase")
    } else {
        home_path.join(".local/share/recase")
    };

    // Get XDG config directory
    let config_dir = if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join("recase")
    } else {
        home_path.join(".config/recase")
    };

    fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory {:?}", data_dir))?;

    fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create config directory {:?}", config_dir))?;

    log::debug!("Data directory: {:?}", data_dir);
    log::debug!("Config directory: {:?}", config_dir);

    Ok((data_dir, config_dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeneralConfig::default();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.paste_on_select, true);
        assert_eq!(config.paste_delay_ms, 150);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_str = r#"
        [general]
        theme = "light"
        paste_delay_ms = 300
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, "light");
        assert_eq!(config.general.paste_delay_ms, 300);
        // Unspecified fields fall back to defaults
        assert_eq!(config.general.paste_on_select, true);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.general.theme, "dark");
    }

    #[test]
    fn test_example_config_parses() {
        let example = include_str!("../recase.toml.example");
        let config: Config = toml::from_str(example).unwrap();
        assert_eq!(config.general.theme, "dark");
        assert_eq!(config.general.paste_delay_ms, 150);
    }
}
