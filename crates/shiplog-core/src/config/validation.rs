//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "file cannot be empty".to_string(),
        }
        .into());
    }

    if config.changelog.title.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.title".to_string(),
            message: "title cannot be empty".to_string(),
        }
        .into());
    }

    if config.changelog.title.contains('\n') {
        return Err(ConfigError::InvalidValue {
            field: "changelog.title".to_string(),
            message: "title must be a single line".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_file() {
        let mut config = Config::default();
        config.changelog.file = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_multiline_title() {
        let mut config = Config::default();
        config.changelog.title = "Changelog\nmore".to_string();
        assert!(validate_config(&config).is_err());
    }
}
