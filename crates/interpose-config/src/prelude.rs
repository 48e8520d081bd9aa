//! Prelude module - commonly used types for convenient import.
//!
//! Use `use interpose_config::prelude::*;` to import all essential types.

// Config types
pub use crate::{Config, LoggingSection, PluginSection};

// Assembly
pub use crate::{InterceptorRegistry, build_chain};

// Errors
pub use crate::{ConfigError, ConfigResult};
