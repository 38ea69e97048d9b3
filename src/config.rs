//! Configuration for the feedback core
//!
//! Values come from built-in defaults, an optional TOML file and
//! `FEEDBACK_RADAR_*` environment variables, in increasing precedence.

use crate::error::{FeedbackError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Storage key used by existing saved collections
pub const DEFAULT_STORAGE_KEY: &str = "feedback-radar-data";

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "FEEDBACK_RADAR";

/// Main feedback configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackConfig {
    /// Slot holding the serialized collection
    pub storage_key: String,

    /// Directory for the file-backed store
    pub data_dir: PathBuf,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: default_data_dir(),
            log_level: "info".to_string(),
        }
    }
}

/// Platform data directory (XDG_DATA_HOME on Linux)
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("feedback-radar")
}

impl FeedbackConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: FeedbackConfig =
            toml::from_str(toml_str).map_err(|e| FeedbackError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Layer defaults, an optional TOML file and environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default("storage_key", defaults.storage_key.clone())?
            .set_default("data_dir", defaults.data_dir.to_string_lossy().into_owned())?
            .set_default("log_level", defaults.log_level.clone())?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: FeedbackConfig = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let key = self.storage_key.trim();
        if key.is_empty() {
            return Err(FeedbackError::InvalidConfig(
                "storage_key cannot be empty".to_string(),
            ));
        }
        if key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(FeedbackError::InvalidConfig(format!(
                "storage_key '{}' must be a plain name",
                self.storage_key
            )));
        }
        if self.log_level.trim().is_empty() {
            return Err(FeedbackError::InvalidConfig(
                "log_level cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Save configuration to a TOML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| FeedbackError::InvalidConfig(e.to_string()))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = FeedbackConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert!(config.data_dir.ends_with("feedback-radar"));
    }

    #[test]
    fn test_from_toml_partial() {
        let config = FeedbackConfig::from_toml(r#"storage_key = "team-feedback""#).unwrap();
        assert_eq!(config.storage_key, "team-feedback");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_validate_rejects_bad_key() {
        let result = FeedbackConfig::from_toml(r#"storage_key = "  ""#);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("storage_key cannot be empty"));

        let result = FeedbackConfig::from_toml(r#"storage_key = "../escape""#);
        assert!(matches!(result, Err(FeedbackError::InvalidConfig(_))));

        let result = FeedbackConfig::from_toml(r#"storage_key = ".radar.tmp""#);
        assert!(matches!(result, Err(FeedbackError::InvalidConfig(_))));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedback.toml");

        let config = FeedbackConfig {
            storage_key: "radar".to_string(),
            data_dir: dir.path().join("data"),
            log_level: "debug".to_string(),
        };
        config.to_file(&path).unwrap();

        assert_eq!(FeedbackConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    #[serial]
    fn test_load_layers_file_and_env() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("feedback.toml");
        std::fs::write(&path, "storage_key = \"from-file\"\nlog_level = \"warn\"\n").unwrap();

        env::set_var("FEEDBACK_RADAR_LOG_LEVEL", "trace");
        let config = FeedbackConfig::load(Some(&path));
        env::remove_var("FEEDBACK_RADAR_LOG_LEVEL");

        let config = config.unwrap();
        assert_eq!(config.storage_key, "from-file");
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    #[serial]
    fn test_load_defaults_without_file() {
        env::remove_var("FEEDBACK_RADAR_STORAGE_KEY");
        env::remove_var("FEEDBACK_RADAR_LOG_LEVEL");
        env::remove_var("FEEDBACK_RADAR_DATA_DIR");
        let config = FeedbackConfig::load(None).unwrap();
        assert_eq!(config, FeedbackConfig::default());
    }
}
