//! Configuration-driven interceptor registration for Interpose.
//!
//! A TOML file declares which interceptors to install, in which order, and
//! with which settings:
//!
//! ```toml
//! [properties]
//! threshold = "250"
//!
//! [[plugins]]
//! interceptor = "slow-call"
//! [plugins.properties]
//! threshold_ms = "${threshold}"
//! ```
//!
//! [`loader`] reads and validates such a file, [`InterceptorRegistry`] maps
//! the aliases to factories, and [`build_chain`] turns the result into a
//! sealed [`InterceptorChain`](interpose_plugin::InterceptorChain).
//!
//! # Property precedence
//!
//! From highest to lowest:
//!
//! 1. Properties supplied by the caller at load time
//! 2. The file's `[properties]` table
//!
//! `${name}` references in plugin properties resolve against the merged
//! result. Unknown references are left as written.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use interpose_config::{InterceptorRegistry, build_chain, loader};
//! use interpose_plugin::Properties;
//!
//! let registry = InterceptorRegistry::new();
//! let config = loader::load_file(Path::new("interpose.toml"), &Properties::new())?;
//! let chain = build_chain(&config, &registry)?;
//! println!("{} interceptors", chain.len());
//! # Ok::<(), interpose_config::ConfigError>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

/// Building a chain from a parsed config.
pub mod assemble;
/// Configuration error types.
pub mod error;
/// Config file loading.
pub mod loader;
/// Alias-to-factory registry.
pub mod registry;
/// Configuration struct definitions.
pub mod types;
/// Configuration validation rules.
pub mod validate;

pub use assemble::build_chain;
pub use error::{ConfigError, ConfigResult};
pub use registry::{InterceptorFactory, InterceptorRegistry};
pub use types::{Config, LoggingSection, PluginSection};

impl Config {
    /// Load a config file. See [`loader::load_file`].
    ///
    /// # Errors
    ///
    /// See [`loader::load_file`].
    pub fn load(
        path: &std::path::Path,
        overrides: &interpose_plugin::Properties,
    ) -> ConfigResult<Self> {
        loader::load_file(path, overrides)
    }
}
