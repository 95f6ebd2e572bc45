//! Engine configuration file support.
//!
//! This module reads the column pipeline settings from a TOML file such as:
//!
//! ```toml
//! [cleaning]
//! drop_invalids = true
//!
//! [scaling]
//! strict = false
//! ```
//!
//! Every section and key is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Engine configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    #[serde(default)]
    pub cleaning: CleaningSettings,
    #[serde(default)]
    pub scaling: ScalingSettings,
}

/// Cleaning settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CleaningSettings {
    /// Filter out infinite and NaN values before computing statistics.
    #[serde(default = "default_drop_invalids")]
    pub drop_invalids: bool,
}

/// Scaling settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalingSettings {
    /// Use the checked kernels, turning sentinel cases into errors.
    #[serde(default)]
    pub strict: bool,
}

fn default_drop_invalids() -> bool {
    true
}

impl Default for CleaningSettings {
    fn default() -> Self {
        Self {
            drop_invalids: default_drop_invalids(),
        }
    }
}

const DEFAULT_SEARCH_PATHS: [&str; 3] = [
    "biobeat.toml",
    "rust_engine/biobeat.toml",
    "../biobeat.toml",
];

impl EngineConfig {
    /// Parse configuration from TOML text.
    ///
    /// Errors name the offending key, e.g. `scaling.strict`.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let deserializer = toml::Deserializer::new(content);
        let config = serde_path_to_error::deserialize(deserializer)
            .map_err(|e| anyhow::anyhow!("Invalid engine config at '{}': {}", e.path(), e.inner()))?;
        Ok(config)
    }

    /// Load engine configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(EngineConfig)` if successful
    /// * `Err` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load engine configuration from the default location.
    ///
    /// Searches for `biobeat.toml` in:
    /// 1. Current directory
    /// 2. `rust_engine/` directory
    /// 3. Parent directory
    ///
    /// Falls back to [`EngineConfig::default`] when none exists.
    pub fn from_default_location() -> Result<Self> {
        Self::from_search_paths(DEFAULT_SEARCH_PATHS.iter().map(PathBuf::from))
    }

    fn from_search_paths<I>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        for path in paths {
            if path.exists() {
                log::debug!("Loading engine config from {}", path.display());
                return Self::from_file(&path);
            }
        }

        log::debug!("No biobeat.toml found, using default engine config");
        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(config.cleaning.drop_invalids);
        assert!(!config.scaling.strict);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = EngineConfig::from_toml_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[cleaning]
drop_invalids = false

[scaling]
strict = true
"#;

        let config = EngineConfig::from_toml_str(toml).unwrap();
        assert!(!config.cleaning.drop_invalids);
        assert!(config.scaling.strict);
    }

    #[test]
    fn test_parse_partial_section() {
        let config = EngineConfig::from_toml_str("[scaling]\nstrict = true\n").unwrap();
        assert!(config.cleaning.drop_invalids);
        assert!(config.scaling.strict);
    }

    #[test]
    fn test_error_names_key_path() {
        let err = EngineConfig::from_toml_str("[scaling]\nstrict = \"yes\"\n").unwrap_err();
        assert!(err.to_string().contains("scaling.strict"), "{}", err);
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(EngineConfig::from_toml_str("[cleaning]\ndrop_nan = true\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scaling]\nstrict = true").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert!(config.scaling.strict);
    }

    #[test]
    fn test_from_missing_file() {
        let err = EngineConfig::from_file("/nonexistent/biobeat.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_search_paths_fall_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::from_search_paths(vec![dir.path().join("biobeat.toml")]).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_search_paths_pick_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("biobeat.toml");
        fs::write(&path, "[cleaning]\ndrop_invalids = false\n").unwrap();

        let config = EngineConfig::from_search_paths(vec![
            dir.path().join("missing.toml"),
            path,
        ])
        .unwrap();
        assert!(!config.cleaning.drop_invalids);
    }
}
