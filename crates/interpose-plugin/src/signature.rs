//! Signature declarations: which exact method shapes an interceptor diverts.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use interpose_core::{ArgKind, Interface, InterposeError, InterposeResult, MethodRef, join_kinds};

/// One exact method overload on one capability interface.
///
/// Equality and hashing use the whole `(interface, method, params)` tuple, so
/// overloads sharing a name are distinct signatures.
#[derive(Debug, Clone)]
pub struct Signature {
    interface: &'static Interface,
    method: Cow<'static, str>,
    params: Vec<ArgKind>,
}

impl Signature {
    /// Declare a signature.
    #[must_use]
    pub fn new(
        interface: &'static Interface,
        method: impl Into<Cow<'static, str>>,
        params: impl Into<Vec<ArgKind>>,
    ) -> Self {
        Self {
            interface,
            method: method.into(),
            params: params.into(),
        }
    }

    /// The signature of an already resolved method.
    #[must_use]
    pub fn of(method: MethodRef) -> Self {
        Self::new(method.interface, method.method.name, method.method.params)
    }

    /// One signature per method of `interface`.
    #[must_use]
    pub fn every(interface: &'static Interface) -> Vec<Self> {
        interface
            .methods
            .iter()
            .map(|method| Self::of(MethodRef::new(interface, method)))
            .collect()
    }

    /// Declaring interface.
    #[must_use]
    pub fn interface(&self) -> &'static Interface {
        self.interface
    }

    /// Method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Ordered parameter kinds.
    #[must_use]
    pub fn params(&self) -> &[ArgKind] {
        &self.params
    }

    /// Resolve against the interface description.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::UnknownMethod`] if the interface declares no
    /// method with this name and exactly these parameter kinds.
    pub fn resolve(&self) -> InterposeResult<MethodRef> {
        self.interface
            .find(&self.method, &self.params)
            .map(|method| MethodRef::new(self.interface, method))
            .ok_or_else(|| InterposeError::UnknownMethod {
                interface: self.interface.name.to_owned(),
                method: self.method.to_string(),
                params: join_kinds(&self.params),
            })
    }

    /// Whether a call to `method` is the one this signature names.
    #[must_use]
    pub fn matches(&self, method: MethodRef) -> bool {
        self.interface.same_as(method.interface)
            && self.method == method.method.name
            && self.params == method.method.params
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.interface.same_as(other.interface)
            && self.method == other.method
            && self.params == other.params
    }
}

impl Eq for Signature {}

impl Hash for Signature {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.interface.path.hash(state);
        self.interface.name.hash(state);
        self.method.hash(state);
        self.params.hash(state);
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}({})",
            self.interface.name,
            self.method,
            join_kinds(&self.params)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use interpose_core::capability;

    use super::*;

    capability! {
        /// Test interface.
        pub interface Store: StoreApi {
            fn put(key: String, value: String) -> ();
            fn put_count as "put"(key: String, value: i64) -> ();
            fn get(key: String) -> String;
        }
    }

    #[test]
    fn test_resolve_exact_overload() {
        let sig = Signature::new(Store::INTERFACE, "put", [ArgKind::Str, ArgKind::Int]);
        let method = sig.resolve().unwrap();
        assert_eq!(method.method.key, "put_count");
        assert!(sig.matches(method));
    }

    #[test]
    fn test_resolve_unknown_method() {
        let sig = Signature::new(Store::INTERFACE, "delete", [ArgKind::Str]);
        let err = sig.resolve().unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "interface Store declares no method delete(string)"
        );
    }

    #[test]
    fn test_resolve_wrong_params() {
        let sig = Signature::new(Store::INTERFACE, "get", [ArgKind::Int]);
        assert!(matches!(
            sig.resolve(),
            Err(InterposeError::UnknownMethod { .. })
        ));
    }

    #[test]
    fn test_uniqueness_is_by_tuple() {
        let mut set = HashSet::new();
        set.insert(Signature::new(Store::INTERFACE, "put", [ArgKind::Str, ArgKind::Str]));
        set.insert(Signature::new(Store::INTERFACE, "put", [ArgKind::Str, ArgKind::Int]));
        set.insert(Signature::new(Store::INTERFACE, "put", [ArgKind::Str, ArgKind::Str]));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_every_covers_interface() {
        let all = Signature::every(Store::INTERFACE);
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|s| s.resolve().is_ok()));
        assert_eq!(all[2].to_string(), "Store.get(string)");
    }
}
