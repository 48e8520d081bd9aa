//! Fixture capabilities and mock components.

use std::sync::Mutex;

use thiserror::Error;

use interpose_core::{
    ArgKind, InterposeError, InterposeResult, Value, capability, component,
};
use interpose_plugin::Signature;

use crate::mocks::CallLog;

capability! {
    /// A statement executor with an overloaded `query`.
    pub interface Executor: ExecutorApi {
        /// Run a write; returns the affected row count.
        fn update(statement: String) -> i64;
        /// Run a read.
        fn query(statement: String) -> Vec<Value>;
        /// Run a read with a row limit.
        fn query_limit as "query"(statement: String, limit: i64) -> Vec<Value>;
        /// Commit pending work.
        fn commit(required: bool) -> ();
    }
}

capability! {
    /// Does work, with a `String` and an `i64` overload of `do_work`.
    pub interface Worker: WorkerApi {
        /// Work on a named input.
        fn do_work(input: String) -> String;
        /// Work a number of times.
        fn do_work_count as "do_work"(count: i64) -> String;
    }
}

capability! {
    /// Records audit events.
    pub interface Auditor: AuditorApi {
        /// Record an event.
        fn audit(event: String) -> bool;
        /// Events recorded so far.
        fn audit_count() -> i64;
    }
}

/// Error raised by mock components when told to fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("mock failure in {method}")]
pub struct MockFailure {
    /// Method that failed.
    pub method: String,
}

/// Mock [`Executor`] that records every real execution.
#[derive(Debug, Default)]
pub struct MockExecutor {
    log: CallLog,
    fail_next: Mutex<u32>,
}

impl MockExecutor {
    /// Create an executor writing to `log`.
    #[must_use]
    pub fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fail_next: Mutex::new(0),
        }
    }

    /// Make the next `times` executions fail with [`MockFailure`].
    #[must_use]
    pub fn failing(self, times: u32) -> Self {
        if let Ok(mut guard) = self.fail_next.lock() {
            *guard = times;
        }
        self
    }

    fn execute(&self, entry: String, method: &str) -> InterposeResult<()> {
        self.log.record(entry);
        if let Ok(mut guard) = self.fail_next.lock()
            && *guard > 0
        {
            *guard = guard.saturating_sub(1);
            return Err(InterposeError::other(MockFailure {
                method: method.to_owned(),
            }));
        }
        Ok(())
    }
}

impl ExecutorApi for MockExecutor {
    fn update(&self, statement: String) -> InterposeResult<i64> {
        self.execute(format!("update({statement})"), "update")?;
        Ok(1)
    }

    fn query(&self, statement: String) -> InterposeResult<Vec<Value>> {
        self.execute(format!("query({statement})"), "query")?;
        Ok(vec![Value::from("row-1"), Value::from("row-2")])
    }

    fn query_limit(&self, statement: String, limit: i64) -> InterposeResult<Vec<Value>> {
        self.execute(format!("query({statement}, {limit})"), "query")?;
        let rows = usize::try_from(limit).unwrap_or(0);
        Ok((1..=rows).map(|i| Value::from(format!("row-{i}"))).collect())
    }

    fn commit(&self, required: bool) -> InterposeResult<()> {
        self.execute(format!("commit({required})"), "commit")
    }
}

component!(MockExecutor: Executor);

/// Mock implementing both [`Worker`] and [`Auditor`].
#[derive(Debug, Default)]
pub struct MockWorker {
    log: CallLog,
}

impl MockWorker {
    /// Create a worker writing to `log`.
    #[must_use]
    pub fn new(log: &CallLog) -> Self {
        Self { log: log.clone() }
    }
}

impl WorkerApi for MockWorker {
    fn do_work(&self, input: String) -> InterposeResult<String> {
        self.log.record(format!("do_work({input})"));
        Ok(format!("worked:{input}"))
    }

    fn do_work_count(&self, count: i64) -> InterposeResult<String> {
        self.log.record(format!("do_work#{count}"));
        Ok(format!("worked x{count}"))
    }
}

impl AuditorApi for MockWorker {
    fn audit(&self, event: String) -> InterposeResult<bool> {
        self.log.record(format!("audit({event})"));
        Ok(true)
    }

    fn audit_count(&self) -> InterposeResult<i64> {
        let audits = self.log.count_prefix("audit(");
        Ok(i64::try_from(audits).unwrap_or(i64::MAX))
    }
}

component!(MockWorker: Worker, Auditor);

/// `Executor.update(string)`.
#[must_use]
pub fn update_signature() -> Signature {
    Signature::new(Executor::INTERFACE, "update", [ArgKind::Str])
}

/// `Executor.query(string)`, the one-argument overload only.
#[must_use]
pub fn query_signature() -> Signature {
    Signature::new(Executor::INTERFACE, "query", [ArgKind::Str])
}

/// `Worker.do_work(string)`, the `String` overload only.
#[must_use]
pub fn do_work_string_signature() -> Signature {
    Signature::new(Worker::INTERFACE, "do_work", [ArgKind::Str])
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use interpose_core::Target;

    use super::*;

    #[test]
    fn test_fixture_signatures_resolve() {
        update_signature().resolve().unwrap();
        query_signature().resolve().unwrap();
        do_work_string_signature().resolve().unwrap();
    }

    #[test]
    fn test_executor_fails_on_demand() {
        let log = CallLog::new();
        let target: Target = Arc::new(MockExecutor::new(&log).failing(1));

        let err = target.update("x".into()).unwrap_err();
        assert_eq!(err.cause::<MockFailure>().unwrap().method, "update");
        assert_eq!(target.update("x".into()).unwrap(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_query_overloads() {
        let log = CallLog::new();
        let target: Target = Arc::new(MockExecutor::new(&log));
        assert_eq!(target.query("q".into()).unwrap().len(), 2);
        assert_eq!(target.query_limit("q".into(), 3).unwrap().len(), 3);
        assert_eq!(log.entries(), vec!["query(q)", "query(q, 3)"]);
    }

    #[test]
    fn test_worker_counts_audits() {
        let log = CallLog::new();
        let target: Target = Arc::new(MockWorker::new(&log));
        target.audit("a".into()).unwrap();
        target.do_work("w".into()).unwrap();
        target.audit("b".into()).unwrap();
        assert_eq!(target.audit_count().unwrap(), 2);
    }
}
