//! Ordered interceptor registry and whole-stack wrapping.
//!
//! A chain is assembled with [`InterceptorChainBuilder`] and sealed with
//! [`InterceptorChainBuilder::build`]. Once sealed it is immutable and can be
//! cloned and shared across threads; [`InterceptorChain::plugin_all`] is then
//! safe to call concurrently.

use std::sync::Arc;

use tracing::{debug, info};

use interpose_core::{InterposeResult, Target};

use crate::interceptor::{Interceptor, WrapContext};
use crate::plugin::resolve_signatures;
use crate::properties::Properties;

/// Collects interceptors in registration order.
#[derive(Debug, Default)]
pub struct InterceptorChainBuilder {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl InterceptorChainBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an interceptor.
    ///
    /// The same interceptor may be added more than once; it then wraps the
    /// target once per registration.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::UnknownMethod`](interpose_core::InterposeError::UnknownMethod)
    /// if one of its signatures names a method that does not exist.
    pub fn add_interceptor(
        &mut self,
        interceptor: Arc<dyn Interceptor>,
    ) -> InterposeResult<&mut Self> {
        resolve_signatures(interceptor.signatures())?;
        debug!(
            interceptor = interceptor.name(),
            position = self.interceptors.len(),
            "interceptor registered"
        );
        self.interceptors.push(interceptor);
        Ok(self)
    }

    /// Owned-builder form of [`add_interceptor`](Self::add_interceptor).
    ///
    /// # Errors
    ///
    /// See [`add_interceptor`](Self::add_interceptor).
    pub fn with_interceptor(mut self, interceptor: Arc<dyn Interceptor>) -> InterposeResult<Self> {
        self.add_interceptor(interceptor)?;
        Ok(self)
    }

    /// Configure an interceptor with `options`, then append it.
    ///
    /// # Errors
    ///
    /// Returns the error from [`Interceptor::configure`], or see
    /// [`add_interceptor`](Self::add_interceptor).
    pub fn register(
        &mut self,
        mut interceptor: Box<dyn Interceptor>,
        options: &Properties,
    ) -> InterposeResult<&mut Self> {
        interceptor.configure(options)?;
        self.add_interceptor(Arc::from(interceptor))
    }

    /// Number of registered interceptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Seal the chain.
    #[must_use]
    pub fn build(self) -> InterceptorChain {
        info!(interceptors = self.interceptors.len(), "interceptor chain sealed");
        InterceptorChain {
            interceptors: self.interceptors.into(),
        }
    }
}

/// An immutable, ordered list of interceptors.
#[derive(Clone)]
pub struct InterceptorChain {
    interceptors: Arc<[Arc<dyn Interceptor>]>,
}

impl InterceptorChain {
    /// Start a new chain.
    #[must_use]
    pub fn builder() -> InterceptorChainBuilder {
        InterceptorChainBuilder::new()
    }

    /// Offer `target` to every interceptor in registration order.
    ///
    /// Each interceptor sees the result of the previous one, so the last
    /// registered interceptor ends up outermost and runs first on a call.
    /// An empty chain returns `target` itself.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first error raised by
    /// [`Interceptor::decide_wrapping`].
    pub fn plugin_all(&self, target: Target) -> InterposeResult<Target> {
        self.interceptors.iter().try_fold(target, |current, interceptor| {
            interceptor.decide_wrapping(current, WrapContext::new(interceptor))
        })
    }

    /// Registered interceptors in order. Read-only.
    #[must_use]
    pub fn interceptors(&self) -> &[Arc<dyn Interceptor>] {
        &self.interceptors
    }

    /// Interceptor names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.interceptors.iter().map(|i| i.name()).collect()
    }

    /// Number of interceptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Whether the chain is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }
}

impl Default for InterceptorChain {
    fn default() -> Self {
        InterceptorChainBuilder::new().build()
    }
}

impl std::fmt::Debug for InterceptorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("interceptors", &self.names())
            .finish()
    }
}
