//! Configuration file loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::selector::SelectorConfig;

/// Default config file name, searched in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "paodrill.toml";

/// Top-level paodrill configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Association table CSV path.
    pub data_file: PathBuf,
    /// Stats store JSON path.
    pub stats_file: PathBuf,
    /// Selection tuning.
    pub selector: SelectorConfig,
}

impl Default for DrillConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("pao.csv"),
            stats_file: PathBuf::from("pao_stats.json"),
            selector: SelectorConfig::default(),
        }
    }
}

impl DrillConfig {
    /// Load configuration. An explicit path must exist and parse; with no
    /// path, `paodrill.toml` is read if present, else built-in defaults
    /// apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(explicit) => Self::parse_file(explicit),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::parse_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config: DrillConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.selector.weak_threshold),
            "selector.weak_threshold must be within 0..=1"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.selector.weak_bias),
            "selector.weak_bias must be within 0..=1"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = DrillConfig::default();
        assert_eq!(config.data_file, PathBuf::from("pao.csv"));
        assert_eq!(config.stats_file, PathBuf::from("pao_stats.json"));
        assert_eq!(config.selector.weak_threshold, 0.7);
        assert_eq!(config.selector.weak_bias, 0.30);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_file = \"my-pao.csv\"").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "[selector]").unwrap();
        writeln!(file, "weak_bias = 0.5").unwrap();
        file.flush().unwrap();

        let config = DrillConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.data_file, PathBuf::from("my-pao.csv"));
        assert_eq!(config.stats_file, PathBuf::from("pao_stats.json"));
        assert_eq!(config.selector.weak_bias, 0.5);
        assert_eq!(config.selector.weak_threshold, 0.7);
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        assert!(DrillConfig::load(Some(Path::new("no-such.toml"))).is_err());
    }

    #[test]
    fn out_of_range_tuning_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[selector]").unwrap();
        writeln!(file, "weak_bias = 1.5").unwrap();
        file.flush().unwrap();
        assert!(DrillConfig::load(Some(file.path())).is_err());
    }
}
