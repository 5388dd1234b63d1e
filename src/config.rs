use std::path::Path;

use crate::error::ConfigError;

/// Deepest depth the config accepts; past this the turn pause is too long
/// for interactive play.
pub const MAX_DEPTH: usize = 12;

/// Search engine settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Ply budget for the root scoring pass.
    pub depth: usize,
    /// Seed for the tie-break RNG. Unset means seed from the OS.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: crate::ai::SEARCH_DEPTH,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_DEPTH}"
            )));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.search.depth, 7);
        assert_eq!(config.search.seed, None);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[search]
seed = 42
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.search.seed, Some(42));
        assert_eq!(config.search.depth, 7);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.search.depth, 7);
    }

    #[test]
    fn test_validation_rejects_zero_depth() {
        let mut config = AppConfig::default();
        config.search.depth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_excessive_depth() {
        let mut config = AppConfig::default();
        config.search.depth = MAX_DEPTH + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.search.depth, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[search]
depth = 5
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.search.depth, 5);
        assert_eq!(config.search.seed, None);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "[search]\ndepth = 0").unwrap();
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config
            .validate()
            .expect("roundtripped config should be valid");
    }
}
