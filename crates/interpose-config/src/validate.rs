//! Configuration validation.

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;

/// Accepted `logging.level` values.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Accepted `logging.format` values.
pub const LOG_FORMATS: [&str; 4] = ["pretty", "compact", "json", "full"];

/// Validate a parsed configuration.
///
/// # Errors
///
/// Returns the first validation error found.
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_properties(config)?;
    validate_logging(config)?;
    validate_plugins(config)?;
    Ok(())
}

fn validate_properties(config: &Config) -> ConfigResult<()> {
    if config.properties.iter().any(|(key, _)| key.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            field: "properties".to_owned(),
            message: "property keys must not be empty".to_owned(),
        });
    }
    Ok(())
}

fn validate_logging(config: &Config) -> ConfigResult<()> {
    let level = config.logging.level.to_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.level".to_owned(),
            message: format!(
                "unsupported log level '{}'; expected one of: {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
        return Err(ConfigError::ValidationError {
            field: "logging.format".to_owned(),
            message: format!(
                "unsupported log format '{}'; expected one of: {}",
                config.logging.format,
                LOG_FORMATS.join(", ")
            ),
        });
    }

    if config.logging.directives.iter().any(|d| d.trim().is_empty()) {
        return Err(ConfigError::ValidationError {
            field: "logging.directives".to_owned(),
            message: "directives must not be empty".to_owned(),
        });
    }

    Ok(())
}

fn validate_plugins(config: &Config) -> ConfigResult<()> {
    for (index, plugin) in config.plugins.iter().enumerate() {
        if plugin.interceptor.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: format!("plugins[{index}].interceptor"),
                message: "interceptor alias must not be empty".to_owned(),
            });
        }
        if plugin.properties.iter().any(|(key, _)| key.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                field: format!("plugins[{index}].properties"),
                message: "property keys must not be empty".to_owned(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PluginSection;

    fn field_of(result: ConfigResult<()>) -> String {
        match result {
            Err(ConfigError::ValidationError { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_unknown_format_rejected() {
        let mut config = Config::default();
        config.logging.format = "yaml".to_owned();
        assert_eq!(field_of(validate(&config)), "logging.format");
    }

    #[test]
    fn test_level_is_case_insensitive() {
        let mut config = Config::default();
        config.logging.level = "DEBUG".to_owned();
        assert!(validate(&config).is_ok());
        config.logging.level = "loud".to_owned();
        assert_eq!(field_of(validate(&config)), "logging.level");
    }

    #[test]
    fn test_empty_alias_rejected() {
        let config = Config {
            plugins: vec![PluginSection::new("ok"), PluginSection::new("  ")],
            ..Config::default()
        };
        assert_eq!(field_of(validate(&config)), "plugins[1].interceptor");
    }

    #[test]
    fn test_empty_property_key_rejected() {
        let config = Config {
            plugins: vec![PluginSection::new("ok").with_property("", "v")],
            ..Config::default()
        };
        assert_eq!(field_of(validate(&config)), "plugins[0].properties");
    }
}
