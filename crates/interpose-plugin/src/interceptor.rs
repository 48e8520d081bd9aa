//! The interceptor capability contract.

use std::sync::Arc;

use interpose_core::{InterposeResult, Target, Value};

use crate::invocation::Invocation;
use crate::plugin::Plugin;
use crate::properties::Properties;
use crate::signature::Signature;

/// An extension that observes, alters or replaces calls on components.
///
/// Only calls matching [`signatures`](Self::signatures) reach
/// [`intercept`](Self::intercept). Within it the interceptor controls the flow
/// explicitly: call [`Invocation::proceed`] to continue inward, skip it to
/// short-circuit, call it again to retry. Errors are never swallowed by the
/// framework.
///
/// Interceptors are shared by every wrapper built for them and may be called
/// from several threads at once; any mutable state they keep must be
/// synchronized by the interceptor itself.
pub trait Interceptor: Send + Sync {
    /// The exact method shapes this interceptor diverts. Fixed for the
    /// lifetime of the interceptor.
    fn signatures(&self) -> &[Signature];

    /// Handle one diverted call.
    ///
    /// # Errors
    ///
    /// Returns an error raised by the interceptor or propagated from
    /// [`Invocation::proceed`].
    fn intercept(&self, invocation: &mut Invocation<'_>) -> InterposeResult<Value>;

    /// Decide whether to wrap `target`.
    ///
    /// The default wraps exactly when a declared signature names an interface
    /// the target implements. Return `target` itself to decline.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::UnknownMethod`](interpose_core::InterposeError::UnknownMethod)
    /// if a declared signature does not exist on its interface.
    fn decide_wrapping(&self, target: Target, wrap: WrapContext<'_>) -> InterposeResult<Target> {
        wrap.wrap(target)
    }

    /// Accept settings. Called once, at registration, before any wrapping.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the settings are unusable.
    fn configure(&mut self, options: &Properties) -> InterposeResult<()> {
        let _ = options;
        Ok(())
    }

    /// Label for diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl std::fmt::Debug for dyn Interceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interceptor")
            .field("name", &self.name())
            .field("signatures", &self.signatures().len())
            .finish()
    }
}

/// Handle passed to [`Interceptor::decide_wrapping`], able to build a
/// [`Plugin`] around a target for the interceptor being asked.
#[derive(Debug, Clone, Copy)]
pub struct WrapContext<'a> {
    interceptor: &'a Arc<dyn Interceptor>,
}

impl<'a> WrapContext<'a> {
    /// A context for `interceptor`.
    #[must_use]
    pub fn new(interceptor: &'a Arc<dyn Interceptor>) -> Self {
        Self { interceptor }
    }

    /// The interceptor being asked.
    #[must_use]
    pub fn interceptor(&self) -> &'a Arc<dyn Interceptor> {
        self.interceptor
    }

    /// Apply the canonical policy: [`Plugin::wrap`].
    ///
    /// # Errors
    ///
    /// See [`Plugin::wrap`].
    pub fn wrap(self, target: Target) -> InterposeResult<Target> {
        Plugin::wrap(target, Arc::clone(self.interceptor))
    }
}
