//! Prelude module - commonly used types for convenient import.
//!
//! Use `use interpose_plugin::prelude::*;` to import all essential types.

// Core surface
pub use interpose_core::prelude::*;

// Interceptors
pub use crate::{Interceptor, Invocation, Signature, WrapContext};

// Wrapping
pub use crate::{InterceptorChain, InterceptorChainBuilder, Plugin};

// Settings
pub use crate::{Properties, PropertyError};
