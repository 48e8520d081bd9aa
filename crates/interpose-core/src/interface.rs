//! Static descriptions of capability interfaces.
//!
//! An [`Interface`] is generated at compile time by
//! [`capability!`](crate::capability) and lists every method a component can
//! be called with. Interceptor signatures are checked against these
//! descriptions instead of inspecting components at runtime.

use std::fmt;

use crate::error::{InterposeError, InterposeResult};
use crate::value::{ArgKind, Value};

/// One method of a capability interface.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Method {
    /// Name the method is matched by. Overloads share it.
    pub name: &'static str,
    /// Unique Rust-level key (the generated trait method's identifier).
    pub key: &'static str,
    /// Ordered parameter kinds.
    pub params: &'static [ArgKind],
    /// Kind of the returned value.
    pub returns: ArgKind,
}

/// A capability interface: a named, ordered set of methods.
///
/// Identity is the pair of declaring module path and name, so same-named
/// interfaces declared in different modules stay distinct.
#[derive(Debug)]
pub struct Interface {
    /// Module path of the declaration.
    pub path: &'static str,
    /// Interface name.
    pub name: &'static str,
    /// Methods, in declaration order.
    pub methods: &'static [Method],
}

impl Interface {
    /// Find the overload with exactly this name and these parameter kinds.
    #[must_use]
    pub fn find(&self, name: &str, params: &[ArgKind]) -> Option<&'static Method> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.params == params)
    }

    /// Find a method by its unique key.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<&'static Method> {
        self.methods.iter().find(|m| m.key == key)
    }

    /// Whether two descriptions denote the same interface.
    #[must_use]
    pub fn same_as(&self, other: &Interface) -> bool {
        self.name == other.name && self.path == other.path
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Hashable identity of one method overload: interface, name, parameter kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodId {
    /// Module path of the interface.
    pub path: &'static str,
    /// Interface name.
    pub interface: &'static str,
    /// Method name.
    pub name: &'static str,
    /// Ordered parameter kinds.
    pub params: &'static [ArgKind],
}

/// A resolved method: enough identity to invoke it on a component.
#[derive(Debug, Clone, Copy)]
pub struct MethodRef {
    /// Declaring interface.
    pub interface: &'static Interface,
    /// The method itself.
    pub method: &'static Method,
}

impl MethodRef {
    /// Pair an interface with one of its methods.
    #[must_use]
    pub const fn new(interface: &'static Interface, method: &'static Method) -> Self {
        Self { interface, method }
    }

    /// Look a method up by its unique key.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::UnknownMethod`] if the interface has no such key.
    pub fn by_key(interface: &'static Interface, key: &str) -> InterposeResult<Self> {
        interface
            .by_key(key)
            .map(|method| Self::new(interface, method))
            .ok_or_else(|| InterposeError::UnknownMethod {
                interface: interface.name.to_owned(),
                method: key.to_owned(),
                params: String::new(),
            })
    }

    /// The matching identity of this method.
    #[must_use]
    pub fn id(&self) -> MethodId {
        MethodId {
            path: self.interface.path,
            interface: self.interface.name,
            name: self.method.name,
            params: self.method.params,
        }
    }

    /// Check an argument list against the declared parameters.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::ArityMismatch`] or
    /// [`InterposeError::ArgumentMismatch`] on the first disagreement.
    pub fn check_args(&self, args: &[Value]) -> InterposeResult<()> {
        let params = self.method.params;
        if params.len() != args.len() {
            return Err(InterposeError::ArityMismatch {
                method: self.to_string(),
                expected: params.len(),
                found: args.len(),
            });
        }
        for (index, (param, arg)) in params.iter().zip(args).enumerate() {
            if !param.accepts(arg.kind()) {
                return Err(InterposeError::ArgumentMismatch {
                    method: self.to_string(),
                    index,
                    expected: *param,
                    found: arg.kind(),
                });
            }
        }
        Ok(())
    }
}

impl PartialEq for MethodRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for MethodRef {}

impl fmt::Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({})",
            self.interface.name,
            self.method.name,
            join_kinds(self.method.params)
        )
    }
}

/// Render parameter kinds as `a, b, c`.
#[must_use]
pub fn join_kinds(params: &[ArgKind]) -> String {
    params
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
