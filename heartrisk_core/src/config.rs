//! Configuration file support for HeartRisk.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/heartrisk/config.toml`.

use crate::artifacts::ArtifactPaths;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub artifacts: ArtifactConfig,
}

/// Trained-artifact location configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ArtifactConfig {
    #[serde(default = "default_artifacts_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_model_file")]
    pub model_file: String,

    #[serde(default = "default_norm_file")]
    pub norm_file: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            dir: default_artifacts_dir(),
            model_file: default_model_file(),
            norm_file: default_norm_file(),
        }
    }
}

// Default value functions
fn default_artifacts_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("heartrisk").join("models")
}

fn default_model_file() -> String {
    "model.json".into()
}

fn default_norm_file() -> String {
    "mean_std_values.json".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("heartrisk").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Resolve the artifact file paths, honoring an optional directory override
    pub fn artifact_paths(&self, dir_override: Option<&Path>) -> ArtifactPaths {
        let dir = dir_override.unwrap_or(&self.artifacts.dir);
        ArtifactPaths {
            model: dir.join(&self.artifacts.model_file),
            norm: dir.join(&self.artifacts.norm_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.artifacts.model_file, "model.json");
        assert_eq!(config.artifacts.norm_file, "mean_std_values.json");
        assert!(config.artifacts.dir.ends_with("heartrisk/models"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(config.artifacts.model_file, parsed.artifacts.model_file);
        assert_eq!(config.artifacts.dir, parsed.artifacts.dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[artifacts]
dir = "/opt/models"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.artifacts.dir, PathBuf::from("/opt/models"));
        assert_eq!(config.artifacts.model_file, "model.json"); // default
    }

    #[test]
    fn test_artifact_paths_override() {
        let config = Config::default();
        let paths = config.artifact_paths(Some(Path::new("/tmp/art")));
        assert_eq!(paths.model, PathBuf::from("/tmp/art/model.json"));
        assert_eq!(paths.norm, PathBuf::from("/tmp/art/mean_std_values.json"));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.artifacts.dir = PathBuf::from("/srv/heartrisk");
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.artifacts.dir, PathBuf::from("/srv/heartrisk"));
    }
}
