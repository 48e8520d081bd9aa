//! Mock interceptors and a shared call log.

use std::sync::{Arc, Mutex};

use tracing::debug;

use interpose_core::{Arg, InterposeError, InterposeResult, Value};
use interpose_plugin::{Interceptor, Invocation, Properties, Signature};

/// Ordered record of calls, shared between mocks and assertions.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, entry: impl Into<String>) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push(entry.into());
        }
    }

    /// Snapshot of all entries in order.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries starting with `prefix`.
    #[must_use]
    pub fn count_prefix(&self, prefix: &str) -> usize {
        self.entries
            .lock()
            .map(|guard| guard.iter().filter(|e| e.starts_with(prefix)).count())
            .unwrap_or(0)
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.clear();
        }
    }
}

/// Records `label:before` and `label:after` around `proceed`.
#[derive(Debug)]
pub struct RecordingInterceptor {
    label: String,
    signatures: Vec<Signature>,
    log: CallLog,
}

impl RecordingInterceptor {
    /// Create a recording interceptor.
    #[must_use]
    pub fn new(label: impl Into<String>, signatures: Vec<Signature>, log: &CallLog) -> Self {
        Self {
            label: label.into(),
            signatures,
            log: log.clone(),
        }
    }
}

impl Interceptor for RecordingInterceptor {
    fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    fn intercept(&self, invocation: &mut Invocation<'_>) -> InterposeResult<Value> {
        self.log.record(format!("{}:before", self.label));
        let result = invocation.proceed();
        self.log.record(format!("{}:after", self.label));
        result
    }

    fn configure(&mut self, options: &Properties) -> InterposeResult<()> {
        if let Some(label) = options.get("label") {
            label.clone_into(&mut self.label);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// Returns a fixed value without ever calling `proceed`.
#[derive(Debug)]
pub struct ShortCircuitInterceptor {
    signatures: Vec<Signature>,
    value: Value,
    log: CallLog,
}

impl ShortCircuitInterceptor {
    /// Create an interceptor answering every matched call with `value`.
    #[must_use]
    pub fn new(signatures: Vec<Signature>, value: impl Arg, log: &CallLog) -> Self {
        Self {
            signatures,
            value: value.into_value(),
            log: log.clone(),
        }
    }
}

impl Interceptor for ShortCircuitInterceptor {
    fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    fn intercept(&self, invocation: &mut Invocation<'_>) -> InterposeResult<Value> {
        self.log.record(format!("short-circuit {}", invocation.method()));
        Ok(self.value.clone())
    }

    fn name(&self) -> &str {
        "short-circuit"
    }
}

/// Refuses every matched call with [`InterposeError::Rejected`].
#[derive(Debug)]
pub struct RejectingInterceptor {
    signatures: Vec<Signature>,
    reason: String,
}

impl RejectingInterceptor {
    /// Create a rejecting interceptor.
    #[must_use]
    pub fn new(signatures: Vec<Signature>, reason: impl Into<String>) -> Self {
        Self {
            signatures,
            reason: reason.into(),
        }
    }
}

impl Interceptor for RejectingInterceptor {
    fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    fn intercept(&self, _invocation: &mut Invocation<'_>) -> InterposeResult<Value> {
        Err(InterposeError::rejected(self.name(), self.reason.clone()))
    }

    fn name(&self) -> &str {
        "rejecting"
    }
}

/// Proceeds until success, up to `attempts` times (property `attempts`,
/// default 3).
#[derive(Debug)]
pub struct RetryInterceptor {
    signatures: Vec<Signature>,
    attempts: u32,
}

impl RetryInterceptor {
    /// Create a retry interceptor with the default attempt count.
    #[must_use]
    pub fn new(signatures: Vec<Signature>) -> Self {
        Self {
            signatures,
            attempts: 3,
        }
    }

    /// Configured attempt count.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl Interceptor for RetryInterceptor {
    fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    fn intercept(&self, invocation: &mut Invocation<'_>) -> InterposeResult<Value> {
        let mut last = None;
        for attempt in 1..=self.attempts {
            match invocation.proceed() {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(attempt, error = %e, "attempt failed");
                    last = Some(e);
                },
            }
        }
        Err(last.unwrap_or_else(|| InterposeError::rejected(self.name(), "no attempts allowed")))
    }

    fn configure(&mut self, options: &Properties) -> InterposeResult<()> {
        let attempts = options
            .parse_or("attempts", self.attempts)
            .map_err(|e| InterposeError::configuration(self.name(), e.to_string()))?;
        self.attempts = attempts;
        Ok(())
    }

    fn name(&self) -> &str {
        "retry"
    }
}

/// Replaces one argument, then proceeds.
#[derive(Debug)]
pub struct RewriteArgsInterceptor {
    signatures: Vec<Signature>,
    index: usize,
    value: Value,
}

impl RewriteArgsInterceptor {
    /// Create an interceptor setting argument `index` to `value`.
    #[must_use]
    pub fn new(signatures: Vec<Signature>, index: usize, value: impl Arg) -> Self {
        Self {
            signatures,
            index,
            value: value.into_value(),
        }
    }
}

impl Interceptor for RewriteArgsInterceptor {
    fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    fn intercept(&self, invocation: &mut Invocation<'_>) -> InterposeResult<Value> {
        invocation.set_arg(self.index, self.value.clone())?;
        invocation.proceed()
    }

    fn name(&self) -> &str {
        "rewrite-args"
    }
}

/// Rejects any configuration.
#[derive(Debug, Default)]
pub struct FailingConfigureInterceptor;

impl Interceptor for FailingConfigureInterceptor {
    fn signatures(&self) -> &[Signature] {
        &[]
    }

    fn intercept(&self, invocation: &mut Invocation<'_>) -> InterposeResult<Value> {
        invocation.proceed()
    }

    fn configure(&mut self, _options: &Properties) -> InterposeResult<()> {
        Err(InterposeError::configuration(
            self.name(),
            "this interceptor cannot be configured",
        ))
    }

    fn name(&self) -> &str {
        "failing-configure"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::update_signature;

    #[test]
    fn test_call_log() {
        let log = CallLog::new();
        let shared = log.clone();
        shared.record("a");
        shared.record("ab");
        assert_eq!(log.entries(), vec!["a", "ab"]);
        assert_eq!(log.count_prefix("a"), 2);
        log.clear();
        assert!(shared.is_empty());
    }

    #[test]
    fn test_retry_reads_attempts() {
        let mut retry = RetryInterceptor::new(vec![update_signature()]);
        retry
            .configure(&Properties::new().with("attempts", "5"))
            .unwrap();
        assert_eq!(retry.attempts(), 5);

        let err = retry
            .configure(&Properties::new().with("attempts", "lots"))
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_recording_label_from_properties() {
        let mut recording = RecordingInterceptor::new("A", Vec::new(), &CallLog::new());
        recording
            .configure(&Properties::new().with("label", "audit"))
            .unwrap();
        assert_eq!(recording.name(), "audit");
    }
}
