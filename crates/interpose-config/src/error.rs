//! Configuration error types.

use interpose_core::InterposeError;
use thiserror::Error;

/// Errors that can occur while loading configuration or assembling a chain
/// from it.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ReadError {
        /// File path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has the wrong shape.
    #[error("failed to parse config {path}: {source}")]
    ParseError {
        /// File path, or an origin label for in-memory content.
        path: String,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// A value is outside its accepted range.
    #[error("invalid value for {field}: {message}")]
    ValidationError {
        /// Dotted field path.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// A plugin declaration names an alias nobody registered.
    #[error("unknown interceptor '{alias}' (known: {known})")]
    UnknownInterceptor {
        /// Requested alias.
        alias: String,
        /// Comma-separated registered aliases.
        known: String,
    },

    /// An alias was registered twice.
    #[error("interceptor alias '{0}' is already registered")]
    DuplicateAlias(String),

    /// An interceptor failed to configure or register.
    #[error("interceptor '{alias}' could not be registered: {source}")]
    Plugin {
        /// Alias from the declaration.
        alias: String,
        /// Underlying error.
        #[source]
        source: InterposeError,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
