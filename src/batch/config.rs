//! Batch configuration
//!
//! Values are resolved in three layers: built-in defaults, an optional TOML
//! file, then command-line overrides.

use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::pgm::constants::DEFAULT_EXTENSION;
use crate::pgm::errors::{PgmError, PgmResult};

/// Recognized keys of the TOML configuration file
const KNOWN_KEYS: [&str; 2] = ["directory", "extension"];

/// Settings for a single batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    /// Directory to scan and write outputs into
    pub directory: PathBuf,
    /// Extension (without the dot) a file must carry to be processed
    pub extension: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            directory: PathBuf::from("."),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl BatchConfig {
    /// Loads defaults overlaid with the contents of a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> PgmResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PgmError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        info!("Loading configuration from {}", path.display());
        let mut config = BatchConfig::default();
        config.apply_toml_str(&content)?;
        Ok(config)
    }

    /// Overlays the keys present in a TOML document onto this config
    ///
    /// Absent keys keep their current value; unknown keys are ignored with
    /// a warning.
    pub fn apply_toml_str(&mut self, content: &str) -> PgmResult<()> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(PgmError::Config(format!("Failed to parse TOML: {}", e))),
        };

        let table = toml_value
            .as_table()
            .ok_or_else(|| PgmError::Config("configuration must be a TOML table".to_string()))?;

        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                warn!("Ignoring unknown configuration key '{}'", key);
            }
        }

        if let Some(directory) = Self::get_string(&toml_value, "directory")? {
            self.directory = PathBuf::from(directory);
        }
        if let Some(extension) = Self::get_string(&toml_value, "extension")? {
            self.set_extension(extension)?;
        }

        Ok(())
    }

    /// Sets the qualifying extension
    ///
    /// A single leading dot is accepted and dropped. The remaining text must
    /// be non-empty and contain no dot, since only the text after a file
    /// name's last dot is ever compared.
    pub fn set_extension(&mut self, extension: &str) -> PgmResult<()> {
        let trimmed = extension.strip_prefix('.').unwrap_or(extension);
        if trimmed.is_empty() || trimmed.contains('.') {
            return Err(PgmError::Config(format!("Invalid extension: '{}'", extension)));
        }

        self.extension = trimmed.to_string();
        Ok(())
    }

    /// Helper to read an optional string key from TOML
    fn get_string<'v>(toml_value: &'v toml::Value, key: &str) -> PgmResult<Option<&'v str>> {
        match toml_value.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| PgmError::Config(format!("'{}' must be a string", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.directory, PathBuf::from("."));
        assert_eq!(config.extension, "pgm");
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let mut config = BatchConfig::default();
        config
            .apply_toml_str("directory = \"/data/scans\"\nextension = \"pnm\"\n")
            .unwrap();
        assert_eq!(config.directory, PathBuf::from("/data/scans"));
        assert_eq!(config.extension, "pnm");
    }

    #[test]
    fn test_absent_keys_are_kept() {
        let mut config = BatchConfig::default();
        config.apply_toml_str("extension = \".ppm\"\n").unwrap();
        assert_eq!(config.directory, PathBuf::from("."));
        assert_eq!(config.extension, "ppm");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let mut config = BatchConfig::default();
        assert!(matches!(config.apply_toml_str("extension = 5"), Err(PgmError::Config(_))));
        assert!(matches!(config.apply_toml_str("directory = ["), Err(PgmError::Config(_))));
        assert!(config.set_extension("").is_err());
        assert!(config.set_extension("tar.gz").is_err());
        assert_eq!(config, BatchConfig::default());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let missing = std::env::temp_dir().join("pgmbatch-missing-config.toml");
        assert!(matches!(BatchConfig::from_toml_file(missing), Err(PgmError::Config(_))));
    }
}
