//! User configuration.
//!
//! Loaded from `calcpad/config.toml` in the platform config directory.
//! A missing file yields the defaults; a malformed file is logged and
//! ignored rather than aborting the program.

use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Group digits of displayed results with thousands separators.
    /// Never applied to clipboard output.
    pub group_digits: bool,
    /// Copy successful results to the clipboard automatically.
    pub copy_result: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            group_digits: false,
            copy_result: false,
        }
    }
}

impl Config {
    /// Path of the config file, if a config directory exists on this
    /// platform.
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file
    /// is absent or unreadable.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("ignoring config: {:#}", err);
                Self::default()
            }
        }
    }

    fn try_load() -> anyhow::Result<Option<Self>> {
        let Some(path) = Self::path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.group_digits);
        assert!(!config.copy_result);
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
            group_digits = true
            copy_result = true
            "#,
        )
        .unwrap();
        assert!(config.group_digits);
        assert!(config.copy_result);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("group_digits = true").unwrap();
        assert!(config.group_digits);
        assert!(!config.copy_result);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
