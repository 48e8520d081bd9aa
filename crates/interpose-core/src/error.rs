//! Error types shared by components, interceptors and the chain.

use thiserror::Error;

use crate::value::ArgKind;

/// Errors raised while declaring, wrapping or calling components.
#[derive(Debug, Error)]
pub enum InterposeError {
    // Configuration errors
    /// A signature names a method its interface does not declare.
    #[error("interface {interface} declares no method {method}({params})")]
    UnknownMethod {
        /// Interface the signature points at.
        interface: String,
        /// Method name that was not found.
        method: String,
        /// Rendered parameter kinds.
        params: String,
    },

    /// An interceptor rejected its configuration.
    #[error("interceptor {interceptor} misconfigured: {message}")]
    Configuration {
        /// Interceptor name.
        interceptor: String,
        /// What was wrong.
        message: String,
    },

    // Call-shape errors
    /// The component does not implement the called interface.
    #[error("{component} does not implement interface {interface}")]
    UnsupportedInterface {
        /// Component name.
        component: String,
        /// Interface that was called.
        interface: String,
    },

    /// Wrong number of arguments.
    #[error("{method} expects {expected} arguments, got {found}")]
    ArityMismatch {
        /// Rendered method.
        method: String,
        /// Declared parameter count.
        expected: usize,
        /// Supplied argument count.
        found: usize,
    },

    /// An argument has the wrong kind.
    #[error("argument {index} of {method}: expected {expected}, found {found}")]
    ArgumentMismatch {
        /// Rendered method.
        method: String,
        /// Zero-based argument position.
        index: usize,
        /// Declared kind.
        expected: ArgKind,
        /// Supplied kind.
        found: ArgKind,
    },

    /// A call returned a value of the wrong kind.
    #[error("{method} must return {expected}, got {found}")]
    ReturnMismatch {
        /// Rendered method.
        method: String,
        /// Declared return kind.
        expected: ArgKind,
        /// Returned kind.
        found: ArgKind,
    },

    // Interception errors
    /// An interceptor refused to let the call through.
    #[error("call rejected by {interceptor}: {reason}")]
    Rejected {
        /// Interceptor name.
        interceptor: String,
        /// Reason for rejection.
        reason: String,
    },

    // Underlying-call errors
    /// A component failed. Display and source are the original error's.
    #[error(transparent)]
    Other(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl InterposeError {
    /// Wrap a component failure, keeping the original error as the cause.
    #[must_use]
    pub fn other<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Other(Box::new(error))
    }

    /// Build a rejection.
    #[must_use]
    pub fn rejected(interceptor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            interceptor: interceptor.into(),
            reason: reason.into(),
        }
    }

    /// Build a configuration error.
    #[must_use]
    pub fn configuration(interceptor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            interceptor: interceptor.into(),
            message: message.into(),
        }
    }

    /// Downcast an underlying component failure to its concrete type.
    #[must_use]
    pub fn cause<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Other(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Whether this error was raised by configuration rather than by a call.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownMethod { .. } | Self::Configuration { .. }
        )
    }
}

/// Result type for interpose operations.
pub type InterposeResult<T> = Result<T, InterposeError>;
