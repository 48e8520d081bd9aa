//! Interpose Core - value model and component surface for the Interpose plugin system.
//!
//! This crate provides the pieces every other Interpose crate builds on:
//! - [`Value`] / [`ArgKind`] / [`Arg`]: type-erased call arguments that stay
//!   checkable without reflection
//! - [`Interface`] / [`Method`]: static descriptions of capability interfaces
//! - [`Component`]: the object-safe call surface of an interceptable object
//! - [`capability!`] and [`component!`]: declaration macros tying typed traits
//!   to that surface
//!
//! # Example
//!
//! ```rust
//! use interpose_core::prelude::*;
//! use std::sync::Arc;
//!
//! capability! {
//!     /// A key/value lookup.
//!     pub interface Lookup: LookupApi {
//!         /// Fetch a value by key.
//!         fn get(key: String) -> String;
//!     }
//! }
//!
//! struct Upper;
//!
//! impl LookupApi for Upper {
//!     fn get(&self, key: String) -> InterposeResult<String> {
//!         Ok(key.to_uppercase())
//!     }
//! }
//!
//! component!(Upper: Lookup);
//!
//! let target: Target = Arc::new(Upper);
//! assert!(target.implements(Lookup::INTERFACE));
//! assert_eq!(target.get("k".into()).unwrap(), "K");
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod component;
pub mod error;
pub mod interface;
mod macros;
pub mod value;

pub use component::{ArgReader, Component, Target, returned, same_target, unsupported};
pub use error::{InterposeError, InterposeResult};
pub use interface::{Interface, Method, MethodId, MethodRef, join_kinds};
pub use value::{Arg, ArgKind, Value};
