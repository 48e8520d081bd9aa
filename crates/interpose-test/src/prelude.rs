//! Prelude module - commonly used test helpers.
//!
//! Use `use interpose_test::prelude::*;` in tests.

// Fixture capabilities and their typed traits
pub use crate::fixtures::{
    Auditor, AuditorApi, Executor, ExecutorApi, MockExecutor, MockFailure, MockWorker, Worker,
    WorkerApi, do_work_string_signature, query_signature, update_signature,
};

// Mock interceptors
pub use crate::mocks::{
    CallLog, FailingConfigureInterceptor, RecordingInterceptor, RejectingInterceptor,
    RetryInterceptor, RewriteArgsInterceptor, ShortCircuitInterceptor,
};

// Logging
pub use crate::init_test_logging;
