use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pdeps_util::errors::{PdepsError, PdepsResult};

/// User configuration loaded from `~/.pdeps/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output settings from `[output]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How resolved dependencies are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<package>: <version> <qualifier>` per line.
    #[default]
    Plain,
    /// A JSON array of `{package, version, qualifier}` objects.
    Json,
}

impl GlobalConfig {
    /// Load the configuration from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> PdepsResult<Self> {
        if !path.is_file() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| PdepsError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        toml::from_str(&content).map_err(|e| {
            PdepsError::Config {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Load the configuration from `~/.pdeps/config.toml`, or return defaults if the file doesn't exist.
    pub fn load() -> PdepsResult<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Returns the default path to the config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the pdeps data directory (`~/.pdeps/`).
pub fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    Path::new(&home).join(".pdeps")
}
