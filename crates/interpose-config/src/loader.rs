//! Config file loading.
//!
//! Loading runs in a fixed order:
//! 1. Read the file (size-limited) or take the given content
//! 2. Parse TOML into [`Config`]
//! 3. Overlay caller-supplied properties on `[properties]` (caller wins)
//! 4. Substitute `${name}` references in every plugin property value
//! 5. Validate

use std::path::Path;

use tracing::{debug, info};

use interpose_plugin::Properties;

use crate::error::{ConfigError, ConfigResult};
use crate::types::Config;
use crate::validate;

/// Maximum allowed config file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1_048_576;

/// Load a config from a file.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read, is too large, does
/// not parse, or fails validation.
pub fn load_file(path: &Path, overrides: &Properties) -> ConfigResult<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let config = load_str(&content, &path.display().to_string(), overrides)?;
    info!(
        path = %path.display(),
        plugins = config.plugins.len(),
        "loaded interceptor config"
    );
    Ok(config)
}

/// Load a config from in-memory TOML. `origin` labels errors.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the content is too large, does not parse, or
/// fails validation.
pub fn load_str(content: &str, origin: &str, overrides: &Properties) -> ConfigResult<Config> {
    check_size(content, origin)?;

    let mut config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: origin.to_owned(),
        source: e,
    })?;

    if !overrides.is_empty() {
        debug!(count = overrides.len(), "applying caller property overrides");
        config.properties.merge(overrides);
    }

    resolve_references(&mut config);
    validate::validate(&config)?;
    Ok(config)
}

fn check_size(content: &str, origin: &str) -> ConfigResult<()> {
    let len = u64::try_from(content.len()).unwrap_or(u64::MAX);
    if len > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::ValidationError {
            field: origin.to_owned(),
            message: format!(
                "config file is {len} bytes, exceeding the {MAX_CONFIG_FILE_SIZE} byte limit"
            ),
        });
    }
    Ok(())
}

/// Replace `${name}` in plugin property values with entries of
/// `config.properties`.
fn resolve_references(config: &mut Config) {
    let vars = &config.properties;
    for plugin in &mut config.plugins {
        plugin.properties = plugin
            .properties
            .iter()
            .map(|(key, value)| (key, substitute(value, vars)))
            .collect();
    }
}

/// Expand `${name}` references. Unknown names and an unterminated `${` are
/// kept verbatim.
pub fn substitute(raw: &str, vars: &Properties) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some((before, after)) = rest.split_once("${") {
        out.push_str(before);
        let Some((name, tail)) = after.split_once('}') else {
            out.push_str("${");
            rest = after;
            break;
        };
        match vars.get(name) {
            Some(value) => out.push_str(value),
            None => {
                out.push_str("${");
                out.push_str(name);
                out.push('}');
            },
        }
        rest = tail;
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
        [properties]
        threshold = "250"
        dialect = "sqlite"

        [logging]
        level = "debug"
        format = "json"

        [[plugins]]
        interceptor = "slow-call"
        [plugins.properties]
        threshold_ms = "${threshold}"
        label = "${missing}"

        [[plugins]]
        interceptor = "audit"
        enabled = false
    "#;

    #[test]
    fn test_load_str_parses_and_substitutes() {
        let config = load_str(SAMPLE, "<sample>", &Properties::new()).unwrap();
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.plugins.len(), 2);
        assert_eq!(config.plugins[0].properties.get("threshold_ms"), Some("250"));
        assert_eq!(config.plugins[0].properties.get("label"), Some("${missing}"));
        assert!(!config.plugins[1].enabled);
    }

    #[test]
    fn test_caller_overrides_win() {
        let overrides = Properties::new().with("threshold", "900");
        let config = load_str(SAMPLE, "<sample>", &overrides).unwrap();
        assert_eq!(config.properties.get("threshold"), Some("900"));
        assert_eq!(config.properties.get("dialect"), Some("sqlite"));
        assert_eq!(config.plugins[0].properties.get("threshold_ms"), Some("900"));
    }

    #[test]
    fn test_empty_content_is_default() {
        let config = load_str("", "<empty>", &Properties::new()).unwrap();
        assert!(config.plugins.is_empty());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = load_str("[[plugins]\n", "broken.toml", &Properties::new()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { ref path, .. } if path == "broken.toml"));
    }

    #[test]
    fn test_oversized_content_rejected() {
        let big = format!("# {}", "x".repeat(1_100_000));
        let err = load_str(&big, "big.toml", &Properties::new()).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_load_file_nonexistent() {
        let result = load_file(Path::new("/nonexistent/interpose.toml"), &Properties::new());
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn test_load_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = load_file(file.path(), &Properties::new()).unwrap();
        assert_eq!(config.plugins[0].interceptor, "slow-call");
    }

    #[test]
    fn test_substitute_edge_cases() {
        let vars = Properties::new().with("a", "1").with("b", "2");
        assert_eq!(substitute("${a}-${b}", &vars), "1-2");
        assert_eq!(substitute("x${a}y", &vars), "x1y");
        assert_eq!(substitute("${c}", &vars), "${c}");
        assert_eq!(substitute("open ${a", &vars), "open ${a");
        assert_eq!(substitute("plain", &vars), "plain");
        assert_eq!(substitute("$a {b}", &vars), "$a {b}");
    }
}
