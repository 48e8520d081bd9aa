//! Interpose Test - shared test utilities for Interpose crates.
//!
//! Provides fixture capabilities (`Executor`, `Worker`, `Auditor`), mock
//! components implementing them, a set of mock interceptors covering the
//! usual interception patterns, and a logging helper for tests.
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! interpose-test.workspace = true
//! ```
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use interpose_plugin::InterceptorChain;
//! use interpose_test::{CallLog, MockExecutor, RecordingInterceptor, update_signature};
//! use interpose_test::fixtures::ExecutorApi;
//!
//! let log = CallLog::new();
//! let chain = InterceptorChain::builder()
//!     .with_interceptor(Arc::new(RecordingInterceptor::new(
//!         "audit",
//!         vec![update_signature()],
//!         &log,
//!     )))
//!     .unwrap()
//!     .build();
//!
//! let executor = chain.plugin_all(Arc::new(MockExecutor::new(&log))).unwrap();
//! executor.update("x".into()).unwrap();
//! assert_eq!(log.entries(), vec!["audit:before", "update(x)", "audit:after"]);
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod prelude;

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

/// Install a test-friendly subscriber once per process.
///
/// Honors `RUST_LOG`, defaulting to `warn`. Output goes through the test
/// harness so it is only shown for failing tests. Later calls are no-ops.
pub fn init_test_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
