//! Flat string settings handed to [`Interceptor::configure`](crate::Interceptor::configure).

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reading a typed setting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// A required key is absent.
    #[error("missing property: {0}")]
    Missing(String),

    /// A value failed to parse.
    #[error("invalid value '{value}' for property {key}: {message}")]
    Invalid {
        /// Property key.
        key: String,
        /// Raw value.
        value: String,
        /// Parser message.
        message: String,
    },
}

/// Per-interceptor key/value settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, String>);

impl Properties {
    /// Create an empty set of properties.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Set a property, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Raw value of a property.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Raw value of a property, or `default`.
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Raw value of a required property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Missing`] if the key is absent.
    pub fn require(&self, key: &str) -> Result<&str, PropertyError> {
        self.get(key)
            .ok_or_else(|| PropertyError::Missing(key.to_owned()))
    }

    /// Parse an optional property.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Invalid`] if the value is present but does not
    /// parse as `T`.
    pub fn parse<T>(&self, key: &str) -> Result<Option<T>, PropertyError>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get(key)
            .map(|raw| {
                raw.trim().parse::<T>().map_err(|e| PropertyError::Invalid {
                    key: key.to_owned(),
                    value: raw.to_owned(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    /// Parse an optional property, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::Invalid`] if the value does not parse.
    pub fn parse_or<T>(&self, key: &str, default: T) -> Result<T, PropertyError>
    where
        T: FromStr,
        T::Err: Display,
    {
        Ok(self.parse(key)?.unwrap_or(default))
    }

    /// Overlay `other` on top of these properties; `other` wins.
    pub fn merge(&mut self, other: &Properties) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Iterate in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for Properties {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_access() {
        let props = Properties::new()
            .with("threshold_ms", " 250 ")
            .with("enabled", "true");

        assert_eq!(props.parse::<u64>("threshold_ms").unwrap(), Some(250));
        assert_eq!(props.parse::<bool>("enabled").unwrap(), Some(true));
        assert_eq!(props.parse::<u64>("absent").unwrap(), None);
        assert_eq!(props.parse_or::<u32>("absent", 3).unwrap(), 3);
        assert_eq!(props.get_or("absent", "x"), "x");
    }

    #[test]
    fn test_invalid_value() {
        let props = Properties::new().with("retries", "many");
        let err = props.parse::<u32>("retries").unwrap_err();
        assert!(matches!(err, PropertyError::Invalid { ref key, .. } if key == "retries"));
    }

    #[test]
    fn test_require_missing() {
        let props = Properties::new();
        assert_eq!(
            props.require("dialect").unwrap_err(),
            PropertyError::Missing("dialect".to_owned())
        );
    }

    #[test]
    fn test_merge_overrides() {
        let mut base: Properties = [("a", "1"), ("b", "2")].into_iter().collect();
        base.merge(&Properties::new().with("b", "3").with("c", "4"));
        let pairs: Vec<_> = base.iter().collect();
        assert_eq!(pairs, vec![("a", "1"), ("b", "3"), ("c", "4")]);
    }

    #[test]
    fn test_serde_is_flat_map() {
        let props = Properties::new().with("k", "v");
        let json = serde_json::to_string(&props).unwrap();
        assert_eq!(json, r#"{"k":"v"}"#);
    }
}
