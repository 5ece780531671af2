use crate::model::presets::DEFAULT_PRESET;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn default_layout() -> String {
    DEFAULT_PRESET.to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Preset selected on startup
    #[serde(default = "default_layout")]
    pub default_layout: String,
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// YAML file with extra layout presets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layouts_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_layout: default_layout(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
            layouts_file: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".workspace-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_dir() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("logs"))
    }

    /// Read the config file, writing the defaults on first run
    ///
    /// A file that exists but cannot be read or parsed is left as it is; the
    /// defaults are used in memory and the error is handed back for logging.
    pub fn load_or_create() -> (Config, Option<anyhow::Error>) {
        match Self::config_path() {
            Some(path) => Self::load_or_create_at(&path),
            None => (
                Config::default(),
                Some(anyhow!("Could not determine config directory")),
            ),
        }
    }

    fn load_or_create_at(path: &Path) -> (Config, Option<anyhow::Error>) {
        match Self::load_from(path) {
            Ok(Some(config)) => (config, None),
            Ok(None) => {
                let config = Config::default();
                let error = config.save_to(path).err();
                (config, error)
            }
            Err(error) => (Config::default(), Some(error)),
        }
    }

    /// `Ok(None)` when there is no file at `path`
    fn load_from(path: &Path) -> Result<Option<Config>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(Some(config))
    }

    fn parse(contents: &str) -> serde_json::Result<Config> {
        serde_json::from_str(contents)
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse(r#"{ "default_layout": "complex" }"#).unwrap();
        assert_eq!(config.default_layout, "complex");
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.layouts_file, None);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_malformed_config_is_ignored() {
        assert!(Config::parse("not json").is_err());
        assert!(Config::parse(r#"{ "tick_rate_ms": "fast" }"#).is_err());
    }

    #[test]
    fn test_serialized_form_round_trips() {
        let config = Config {
            layouts_file: Some(PathBuf::from("/tmp/layouts.yaml")),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(Config::parse(&json).unwrap(), config);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("workspace-tui-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_config_writes_defaults() {
        let dir = scratch_dir("missing");
        let path = dir.join("config.json");

        let (config, error) = Config::load_or_create_at(&path);
        assert!(error.is_none());
        assert_eq!(config, Config::default());
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(Config::parse(&written).unwrap(), Config::default());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_malformed_config_file_is_kept() {
        let dir = scratch_dir("malformed");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        let original = r#"{ "default_layout": "complex", "tick_rate_ms": 50, }"#;
        fs::write(&path, original).unwrap();

        let (config, error) = Config::load_or_create_at(&path);
        assert_eq!(config, Config::default());
        let error = error.unwrap();
        assert!(format!("{:#}", error).contains("config.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), original);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_existing_config_is_loaded() {
        let dir = scratch_dir("existing");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, r#"{ "default_layout": "complex", "tick_rate_ms": 50 }"#).unwrap();

        let (config, error) = Config::load_or_create_at(&path);
        assert!(error.is_none());
        assert_eq!(config.default_layout, "complex");
        assert_eq!(config.tick_rate_ms, 50);

        fs::remove_dir_all(&dir).unwrap();
    }
}
