//! The dispatch wrapper placed around a target for one interceptor.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};

use interpose_core::{
    Component, Interface, InterposeResult, MethodId, MethodRef, Target, Value,
};

use crate::interceptor::Interceptor;
use crate::invocation::Invocation;
use crate::signature::Signature;

/// A stand-in for a target that diverts matched calls to one interceptor.
///
/// It exposes the same interfaces as the target. Calls whose method matches
/// one of the interceptor's signatures become an [`Invocation`]; every other
/// call, including `name` and `interfaces`, goes straight to the target.
pub struct Plugin {
    target: Target,
    interceptor: Arc<dyn Interceptor>,
    matched: HashSet<MethodId>,
    intercepted: Vec<&'static Interface>,
}

impl Plugin {
    /// Wrap `target` for `interceptor`, or return it unchanged.
    ///
    /// Every declared signature is resolved first, so a signature naming a
    /// method that does not exist fails here rather than at call time. If no
    /// signature names an interface the target implements, the very same
    /// `Arc` comes back.
    ///
    /// # Errors
    ///
    /// Returns [`InterposeError::UnknownMethod`](interpose_core::InterposeError::UnknownMethod)
    /// for an unresolvable signature.
    pub fn wrap(target: Target, interceptor: Arc<dyn Interceptor>) -> InterposeResult<Target> {
        match Self::matching(&target, &interceptor)? {
            Some(plugin) => Ok(Arc::new(plugin)),
            None => Ok(target),
        }
    }

    fn matching(target: &Target, interceptor: &Arc<dyn Interceptor>) -> InterposeResult<Option<Self>> {
        let matched: Vec<MethodRef> = resolve_signatures(interceptor.signatures())?
            .into_iter()
            .filter(|method| target.implements(method.interface))
            .collect();

        if matched.is_empty() {
            debug!(
                interceptor = interceptor.name(),
                target = target.name(),
                "no signature matches target, leaving it unwrapped"
            );
            return Ok(None);
        }

        let mut intercepted: Vec<&'static Interface> = Vec::new();
        for method in &matched {
            if !intercepted.iter().any(|i| i.same_as(method.interface)) {
                intercepted.push(method.interface);
            }
        }

        debug!(
            interceptor = interceptor.name(),
            target = target.name(),
            methods = matched.len(),
            "wrapping target"
        );

        Ok(Some(Self {
            target: Arc::clone(target),
            interceptor: Arc::clone(interceptor),
            matched: matched.iter().map(MethodRef::id).collect(),
            intercepted,
        }))
    }

    /// The wrapped target (possibly another wrapper).
    #[must_use]
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// The interceptor this wrapper diverts to.
    #[must_use]
    pub fn interceptor(&self) -> &Arc<dyn Interceptor> {
        &self.interceptor
    }

    /// Interfaces touched by at least one matched signature.
    #[must_use]
    pub fn intercepted_interfaces(&self) -> &[&'static Interface] {
        &self.intercepted
    }

    /// Whether calls to `method` are diverted.
    #[must_use]
    pub fn intercepts(&self, method: MethodRef) -> bool {
        self.matched.contains(&method.id())
    }
}

impl Component for Plugin {
    fn interfaces(&self) -> &[&'static Interface] {
        self.target.interfaces()
    }

    fn invoke(&self, method: MethodRef, args: &[Value]) -> InterposeResult<Value> {
        if !self.intercepts(method) {
            return self.target.invoke(method, args);
        }

        trace!(
            interceptor = self.interceptor.name(),
            method = %method,
            "diverting call"
        );
        let mut invocation = Invocation::new(self.target.as_ref(), method, args.to_vec());
        self.interceptor.intercept(&mut invocation)
    }

    fn name(&self) -> &str {
        self.target.name()
    }
}

impl std::fmt::Debug for Plugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plugin")
            .field("target", &self.target.name())
            .field("interceptor", &self.interceptor.name())
            .field("methods", &self.matched.len())
            .finish()
    }
}

/// Resolve signatures against their interface descriptions.
///
/// # Errors
///
/// Returns [`InterposeError::UnknownMethod`](interpose_core::InterposeError::UnknownMethod)
/// for the first signature that names a method its interface lacks.
pub fn resolve_signatures(signatures: &[Signature]) -> InterposeResult<Vec<MethodRef>> {
    signatures.iter().map(Signature::resolve).collect()
}
