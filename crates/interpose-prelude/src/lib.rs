//! Unified prelude for the Interpose plugin system.
//!
//! A single import for the types most programs need from every Interpose
//! crate:
//!
//! ```rust,ignore
//! use interpose_prelude::*;
//!
//! // - interpose-core (capability!, component!, Value, Component, errors)
//! // - interpose-plugin (Interceptor, Invocation, Signature, chains)
//! // - interpose-config (Config, InterceptorRegistry, build_chain)
//! // - interpose-telemetry (LogConfig, setup_logging)
//! ```
//!
//! # Per-Crate Preludes
//!
//! ```rust,ignore
//! use interpose_core::prelude::*;
//! use interpose_plugin::prelude::*;
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use interpose_prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load(Path::new("interpose.toml"), &Properties::new())?;
//! setup_logging(&LogConfig::from_section(&config.logging)?)?;
//!
//! let registry = InterceptorRegistry::new();
//! let chain = build_chain(&config, &registry)?;
//! println!("installed: {:?}", chain.names());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub use interpose_config::prelude::*;
pub use interpose_core::prelude::*;
pub use interpose_plugin::prelude::*;
pub use interpose_telemetry::prelude::*;
