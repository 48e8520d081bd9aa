//! Prelude module - commonly used types for convenient import.
//!
//! Use `use interpose_core::prelude::*;` to import all essential types.

// Declaration macros
pub use crate::{capability, component};

// Values
pub use crate::{Arg, ArgKind, Value};

// Interfaces
pub use crate::{Interface, Method, MethodId, MethodRef};

// Components
pub use crate::{Component, Target};

// Errors
pub use crate::{InterposeError, InterposeResult};
