//! Interpose Telemetry - logging setup for the Interpose plugin system.
//!
//! Every Interpose crate emits `tracing` events: wrap decisions at `debug`,
//! chain sealing at `info`, diverted calls at `trace`. This crate installs a
//! `tracing-subscriber` stack to render them.
//!
//! # Example
//!
//! ```rust,no_run
//! use interpose_telemetry::{LogConfig, LogFormat, setup_logging};
//!
//! # fn main() -> Result<(), interpose_telemetry::TelemetryError> {
//! let config = LogConfig::new("info")
//!     .with_format(LogFormat::Pretty)
//!     .with_directive("interpose_plugin=trace");
//!
//! setup_logging(&config)?;
//! tracing::info!("logging ready");
//! # Ok(())
//! # }
//! ```
//!
//! With the `config` feature, [`LogConfig::from_section`] converts the
//! `[logging]` table of an `interpose-config` file.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

mod error;
mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::{
    BoxedSubscriber, LogConfig, LogFormat, LogTarget, build_subscriber, setup_default_logging,
    setup_logging,
};
