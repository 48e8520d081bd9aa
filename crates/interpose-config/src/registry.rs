//! Alias-to-factory registry for interceptors named in config files.

use std::collections::BTreeMap;

use tracing::debug;

use interpose_plugin::Interceptor;

use crate::error::{ConfigError, ConfigResult};

/// Builds a fresh, unconfigured interceptor.
pub type InterceptorFactory = Box<dyn Fn() -> Box<dyn Interceptor> + Send + Sync>;

/// Maps aliases to interceptor factories.
///
/// Aliases are case-insensitive: they are lower-cased on registration and on
/// lookup.
#[derive(Default)]
pub struct InterceptorRegistry {
    factories: BTreeMap<String, InterceptorFactory>,
}

impl InterceptorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateAlias`] if the alias is taken, or
    /// [`ConfigError::ValidationError`] if it is blank.
    pub fn register<F>(&mut self, alias: &str, factory: F) -> ConfigResult<()>
    where
        F: Fn() -> Box<dyn Interceptor> + Send + Sync + 'static,
    {
        let key = normalize(alias);
        if key.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "alias".to_owned(),
                message: "interceptor alias must not be empty".to_owned(),
            });
        }
        if self.factories.contains_key(&key) {
            return Err(ConfigError::DuplicateAlias(key));
        }
        debug!(alias = %key, "interceptor alias registered");
        self.factories.insert(key, Box::new(factory));
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// See [`register`](Self::register).
    pub fn with<F>(mut self, alias: &str, factory: F) -> ConfigResult<Self>
    where
        F: Fn() -> Box<dyn Interceptor> + Send + Sync + 'static,
    {
        self.register(alias, factory)?;
        Ok(self)
    }

    /// Whether `alias` is registered.
    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.factories.contains_key(&normalize(alias))
    }

    /// Instantiate the interceptor registered under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownInterceptor`] if nothing is registered
    /// under `alias`.
    pub fn create(&self, alias: &str) -> ConfigResult<Box<dyn Interceptor>> {
        self.factories
            .get(&normalize(alias))
            .map(|factory| factory())
            .ok_or_else(|| ConfigError::UnknownInterceptor {
                alias: alias.to_owned(),
                known: self.aliases().join(", "),
            })
    }

    /// Registered aliases, sorted.
    #[must_use]
    pub fn aliases(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Number of registered aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for InterceptorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorRegistry")
            .field("aliases", &self.aliases())
            .finish()
    }
}

fn normalize(alias: &str) -> String {
    alias.trim().to_lowercase()
}
