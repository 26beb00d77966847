use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Deploy-time knobs for the resolver. Everything defaults to the stock
/// server catalog so embedders without a config file get sane behavior.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolverConfig {
    /// Known sample status names; the accumulator's default status filter
    /// is this list, sorted.
    #[serde(default = "default_statuses")]
    pub statuses: Vec<String>,
}

fn default_statuses() -> Vec<String> {
    ["Critical", "Invalid", "Timeout", "Warning", "Info", "OK"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            statuses: default_statuses(),
        }
    }
}

impl ResolverConfig {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: ResolverConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.statuses.is_empty() {
            return Err(ConfigError::NoStatuses);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_statuses() {
        let config = ResolverConfig::default();
        assert_eq!(config.statuses.len(), 6);
        assert!(config.statuses.iter().any(|s| s == "Critical"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "statuses:\n  - Up\n  - Down").unwrap();

        let config = ResolverConfig::load(file.path()).unwrap();
        assert_eq!(config.statuses, vec!["Up", "Down"]);
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{}}").unwrap();

        let config = ResolverConfig::load(file.path()).unwrap();
        assert_eq!(config.statuses, ResolverConfig::default().statuses);
    }

    #[test]
    fn test_validate_rejects_empty_statuses() {
        let config = ResolverConfig { statuses: vec![] };
        assert!(matches!(config.validate(), Err(ConfigError::NoStatuses)));
    }
}
