//! The per-call context handed to an interceptor.

use interpose_core::{Arg, Component, InterposeError, InterposeResult, MethodRef, Value, returned};

/// One diverted call.
///
/// Built fresh by a [`Plugin`](crate::Plugin) for every matched call and
/// borrowed from that call's frame; it never outlives the call and never
/// crosses threads. [`proceed`](Self::proceed) runs the real method on the
/// next layer inward and may be called any number of times.
pub struct Invocation<'a> {
    target: &'a (dyn Component + 'static),
    method: MethodRef,
    args: Vec<Value>,
}

impl<'a> Invocation<'a> {
    /// Create an invocation.
    #[must_use]
    pub fn new(target: &'a (dyn Component + 'static), method: MethodRef, args: Vec<Value>) -> Self {
        Self {
            target,
            method,
            args,
        }
    }

    /// The object the real method runs on (possibly another wrapper).
    ///
    /// Typed calls made on it go through any inner layers but not through
    /// the interceptor currently handling this invocation.
    #[must_use]
    pub fn target(&self) -> &'a (dyn Component + 'static) {
        self.target
    }

    /// The matched method.
    #[must_use]
    pub fn method(&self) -> MethodRef {
        self.method
    }

    /// Current arguments.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Mutable arguments; changes are seen by later `proceed` calls.
    pub fn args_mut(&mut self) -> &mut Vec<Value> {
        &mut self.args
    }

    /// Read one argument as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::ArityMismatch`] if `index` is out of range, or
    /// [`InterposeError::ArgumentMismatch`] if the value is not a `T`.
    pub fn arg<T: Arg>(&self, index: usize) -> InterposeResult<T> {
        let value = self
            .args
            .get(index)
            .ok_or_else(|| InterposeError::ArityMismatch {
                method: self.method.to_string(),
                expected: self.method.method.params.len(),
                found: self.args.len(),
            })?;
        T::from_value(value).ok_or_else(|| InterposeError::ArgumentMismatch {
            method: self.method.to_string(),
            index,
            expected: T::KIND,
            found: value.kind(),
        })
    }

    /// Replace one argument.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::ArityMismatch`] if `index` is out of range.
    pub fn set_arg(&mut self, index: usize, value: impl Arg) -> InterposeResult<()> {
        let found = self.args.len();
        let slot = self
            .args
            .get_mut(index)
            .ok_or_else(|| InterposeError::ArityMismatch {
                method: self.method.to_string(),
                expected: self.method.method.params.len(),
                found,
            })?;
        *slot = value.into_value();
        Ok(())
    }

    /// Run the real method with the current arguments.
    ///
    /// The arguments are checked against the declared parameters first, so a
    /// bad edit through [`args_mut`](Self::args_mut) never reaches the target.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::ArityMismatch`] or
    /// [`InterposeError::ArgumentMismatch`] for arguments that no longer fit,
    /// otherwise the underlying error unchanged.
    pub fn proceed(&self) -> InterposeResult<Value> {
        self.method.check_args(&self.args)?;
        self.target.invoke(self.method, &self.args)
    }

    /// [`proceed`](Self::proceed), then convert the result to `T`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error unchanged, or
    /// [`InterposeError::ReturnMismatch`] if the result is not a `T`.
    pub fn proceed_as<T: Arg>(&self) -> InterposeResult<T> {
        let value = self.proceed()?;
        returned(self.method, &value)
    }
}

impl std::fmt::Debug for Invocation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("target", &self.target.name())
            .field("method", &self.method.to_string())
            .field("args", &self.args)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use interpose_core::{InterposeResult, capability, component};

    use super::*;

    capability! {
        /// Test interface.
        pub interface Echo: EchoApi {
            fn echo(text: String) -> String;
        }
    }

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl EchoApi for Recorder {
        fn echo(&self, text: String) -> InterposeResult<String> {
            self.seen.lock().unwrap().push(text.clone());
            Ok(text)
        }
    }

    component!(Recorder: Echo);

    fn echo_method() -> MethodRef {
        MethodRef::by_key(Echo::INTERFACE, "echo").unwrap()
    }

    #[test]
    fn test_proceed_twice_sees_mutation() {
        let target = Recorder::default();
        let mut invocation = Invocation::new(&target, echo_method(), vec![Value::from("a")]);

        assert_eq!(invocation.proceed().unwrap(), Value::from("a"));
        invocation.set_arg(0, "b".to_owned()).unwrap();
        assert_eq!(invocation.proceed_as::<String>().unwrap(), "b");

        assert_eq!(*target.seen.lock().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_typed_arg_access() {
        let target = Recorder::default();
        let invocation = Invocation::new(&target, echo_method(), vec![Value::from("x")]);
        assert_eq!(invocation.arg::<String>(0).unwrap(), "x");
        assert!(matches!(
            invocation.arg::<i64>(0),
            Err(InterposeError::ArgumentMismatch { .. })
        ));
        assert!(matches!(
            invocation.arg::<String>(3),
            Err(InterposeError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn test_args_mut_with_wrong_kind_never_reaches_target() {
        let target = Recorder::default();
        let mut invocation = Invocation::new(&target, echo_method(), vec![Value::from("x")]);
        invocation.args_mut()[0] = Value::Int(1);
        assert!(matches!(
            invocation.proceed(),
            Err(InterposeError::ArgumentMismatch { index: 0, .. })
        ));

        invocation.args_mut().push(Value::from("extra"));
        assert!(matches!(
            invocation.proceed(),
            Err(InterposeError::ArityMismatch {
                expected: 1,
                found: 2,
                ..
            })
        ));
        assert!(target.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_typed_call_on_target() {
        let target = Recorder::default();
        let invocation = Invocation::new(&target, echo_method(), vec![Value::from("x")]);
        assert_eq!(invocation.target().echo("side".into()).unwrap(), "side");
        assert_eq!(*target.seen.lock().unwrap(), vec!["side"]);
    }

    #[test]
    fn test_never_proceeding_never_runs() {
        let target = Recorder::default();
        let invocation = Invocation::new(&target, echo_method(), vec![Value::from("x")]);
        drop(invocation);
        assert!(target.seen.lock().unwrap().is_empty());
    }
}
