//! Configuration struct definitions.

use serde::{Deserialize, Serialize};

use interpose_plugin::Properties;

/// A whole configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Variables available as `${name}` inside plugin properties.
    pub properties: Properties,
    /// Logging settings.
    pub logging: LoggingSection,
    /// Interceptor declarations, in registration order.
    pub plugins: Vec<PluginSection>,
}

impl Config {
    /// Declarations that will actually be registered.
    pub fn enabled_plugins(&self) -> impl Iterator<Item = &PluginSection> {
        self.plugins.iter().filter(|p| p.enabled)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Global level filter (`"trace"` through `"error"`).
    pub level: String,
    /// Output format: `"pretty"`, `"compact"`, `"json"` or `"full"`.
    pub format: String,
    /// Extra per-target directives, e.g. `"interpose_plugin=trace"`.
    pub directives: Vec<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: "compact".to_owned(),
            directives: Vec::new(),
        }
    }
}

/// One `[[plugins]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSection {
    /// Registry alias of the interceptor.
    pub interceptor: String,
    /// Disabled entries are parsed and validated but not registered.
    pub enabled: bool,
    /// Settings passed to [`Interceptor::configure`](interpose_plugin::Interceptor::configure).
    pub properties: Properties,
}

impl Default for PluginSection {
    fn default() -> Self {
        Self {
            interceptor: String::new(),
            enabled: true,
            properties: Properties::new(),
        }
    }
}

impl PluginSection {
    /// An enabled declaration for `alias`.
    #[must_use]
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            interceptor: alias.into(),
            ..Self::default()
        }
    }

    /// Add a property.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_section_defaults_enabled() {
        let section: PluginSection = toml::from_str(r#"interceptor = "audit""#).unwrap();
        assert!(section.enabled);
        assert!(section.properties.is_empty());
    }

    #[test]
    fn test_enabled_plugins_skips_disabled() {
        let mut off = PluginSection::new("b");
        off.enabled = false;
        let config = Config {
            plugins: vec![PluginSection::new("a"), off, PluginSection::new("c")],
            ..Config::default()
        };
        let aliases: Vec<_> = config
            .enabled_plugins()
            .map(|p| p.interceptor.as_str())
            .collect();
        assert_eq!(aliases, vec!["a", "c"]);
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = Config {
            plugins: vec![PluginSection::new("audit").with_property("level", "high")],
            ..Config::default()
        };
        let text = toml::to_string(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.plugins[0].properties.get("level"), Some("high"));
        assert_eq!(back.logging.format, "compact");
    }
}
