//! The object-safe surface every interceptable component exposes.

use std::sync::Arc;

use crate::error::{InterposeError, InterposeResult};
use crate::interface::{Interface, MethodRef};
use crate::value::{Arg, Value};

/// An object implementing one or more capability interfaces.
///
/// Typed callers never use this trait directly: each interface declared with
/// [`capability!`](crate::capability) gets a typed trait implemented for
/// `dyn Component`, which marshals arguments into [`Component::invoke`].
/// Concrete components usually implement it with
/// [`component!`](crate::component).
pub trait Component: Send + Sync {
    /// Interfaces this component implements.
    fn interfaces(&self) -> &[&'static Interface];

    /// Execute one method with already-marshalled arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever the method raises, or a call-shape error when the
    /// interface or arguments do not fit.
    fn invoke(&self, method: MethodRef, args: &[Value]) -> InterposeResult<Value>;

    /// Label for diagnostics.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether this component implements `interface`.
    fn implements(&self, interface: &Interface) -> bool {
        self.interfaces().iter().any(|i| i.same_as(interface))
    }
}

/// A shared, interceptable component. Wrappers and chains pass these around.
pub type Target = Arc<dyn Component>;

impl std::fmt::Debug for dyn Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name())
            .field(
                "interfaces",
                &self.interfaces().iter().map(|i| i.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Reads typed arguments off a marshalled argument list.
#[derive(Debug)]
pub struct ArgReader<'a> {
    method: MethodRef,
    args: std::slice::Iter<'a, Value>,
    index: usize,
}

impl<'a> ArgReader<'a> {
    /// Start reading, after checking the argument count.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::ArityMismatch`] if the count is wrong.
    pub fn new(method: MethodRef, args: &'a [Value]) -> InterposeResult<Self> {
        let expected = method.method.params.len();
        if args.len() != expected {
            return Err(InterposeError::ArityMismatch {
                method: method.to_string(),
                expected,
                found: args.len(),
            });
        }
        Ok(Self {
            method,
            args: args.iter(),
            index: 0,
        })
    }

    /// Read the next argument as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::ArgumentMismatch`] if the value has the wrong
    /// kind, or [`InterposeError::ArityMismatch`] if the list is exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next<T: Arg>(&mut self) -> InterposeResult<T> {
        let index = self.index;
        self.index = self.index.saturating_add(1);
        let value = self.args.next().ok_or_else(|| InterposeError::ArityMismatch {
            method: self.method.to_string(),
            expected: self.method.method.params.len(),
            found: index,
        })?;
        T::from_value(value).ok_or_else(|| InterposeError::ArgumentMismatch {
            method: self.method.to_string(),
            index,
            expected: T::KIND,
            found: value.kind(),
        })
    }
}

/// Convert a call's returned value into the declared Rust type.
///
/// # Errors
///
/// Returns [`InterposeError::ReturnMismatch`] if the value has the wrong kind,
/// which happens when an interceptor short-circuits with a bad value.
pub fn returned<T: Arg>(method: MethodRef, value: &Value) -> InterposeResult<T> {
    T::from_value(value).ok_or_else(|| InterposeError::ReturnMismatch {
        method: method.to_string(),
        expected: T::KIND,
        found: value.kind(),
    })
}

/// Error for a call on an interface the component does not implement.
#[must_use]
pub fn unsupported(component: &str, method: MethodRef) -> InterposeError {
    InterposeError::UnsupportedInterface {
        component: component.to_owned(),
        interface: method.interface.name.to_owned(),
    }
}

/// Whether two targets are the very same component.
#[must_use]
pub fn same_target(a: &Target, b: &Target) -> bool {
    Arc::ptr_eq(a, b)
}
