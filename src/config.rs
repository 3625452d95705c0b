use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu file to display (YAML, JSON or CSV); the built-in menu if unset
    pub menu_path: Option<String>,
    /// Logical pixels per terminal column
    pub px_per_column: u32,
    /// Logical pixels per scrolled line
    pub px_per_line: u32,
    /// Event poll timeout, i.e. the animation frame interval
    pub frame_interval_ms: u64,
    /// Force touch mode on or off instead of probing the environment
    pub touch: Option<bool>,
    /// Default `tracing` filter when `BISTRO_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_path: None,
            px_per_column: 8,
            px_per_line: 20,
            frame_interval_ms: 16,
            touch: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".bistro-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn load() -> Option<Config> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }

        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        // Create config directory if it doesn't exist
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }

    /// Convert a terminal width in columns to logical pixels
    pub fn logical_width(&self, columns: u16) -> u32 {
        u32::from(columns) * self.px_per_column.max(1)
    }

    /// Convert a scroll position in lines to logical pixels
    pub fn logical_offset(&self, lines: u16) -> u32 {
        u32::from(lines) * self.px_per_line.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_puts_breakpoint_at_96_columns() {
        let config = Config::default();
        assert_eq!(config.logical_width(95), 760);
        assert_eq!(config.logical_width(96), 768);
        assert_eq!(config.logical_offset(6), 120);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"px_per_line": 10, "touch": true}"#).unwrap();
        assert_eq!(config.px_per_line, 10);
        assert_eq!(config.touch, Some(true));
        assert_eq!(config.px_per_column, 8);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            menu_path: Some("menu.yaml".to_string()),
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path), Some(config));
    }

    #[test]
    fn test_missing_or_invalid_file_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert_eq!(Config::load_from(&path), None);

        fs::write(&path, "not json").unwrap();
        assert_eq!(Config::load_from(&path), None);
    }
}
