//! Interpose Plugin - interceptors and the chains that apply them.
//!
//! Builds on [`interpose_core`] to provide:
//!
//! - [`Interceptor`]: the extension contract (signatures, intercept, wrapping
//!   decision, configuration)
//! - [`Signature`]: an exact method shape an interceptor subscribes to
//! - [`Invocation`]: one diverted call, able to [`proceed`](Invocation::proceed)
//!   any number of times
//! - [`Plugin`]: the wrapper that diverts matched calls and forwards the rest
//! - [`InterceptorChainBuilder`] / [`InterceptorChain`]: ordered registration
//!   and whole-stack wrapping via [`InterceptorChain::plugin_all`]
//! - [`Properties`]: flat string settings for [`Interceptor::configure`]
//!
//! # Ordering
//!
//! `plugin_all` offers the target to interceptors in registration order, each
//! wrapping the previous result. The last registered interceptor is therefore
//! the outermost layer and runs first when a call arrives.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use interpose_plugin::prelude::*;
//!
//! capability! {
//!     /// Says hello.
//!     pub interface Greeter: GreeterApi {
//!         fn greet(name: String) -> String;
//!     }
//! }
//!
//! struct Plain;
//!
//! impl GreeterApi for Plain {
//!     fn greet(&self, name: String) -> InterposeResult<String> {
//!         Ok(format!("hello {name}"))
//!     }
//! }
//!
//! component!(Plain: Greeter);
//!
//! struct Shout(Vec<Signature>);
//!
//! impl Interceptor for Shout {
//!     fn signatures(&self) -> &[Signature] {
//!         &self.0
//!     }
//!
//!     fn intercept(&self, invocation: &mut Invocation<'_>) -> InterposeResult<Value> {
//!         let text: String = invocation.proceed_as()?;
//!         Ok(Value::from(text.to_uppercase()))
//!     }
//! }
//!
//! let shout = Shout(vec![Signature::new(Greeter::INTERFACE, "greet", [ArgKind::Str])]);
//! let chain = InterceptorChain::builder()
//!     .with_interceptor(Arc::new(shout))?
//!     .build();
//!
//! let greeter = chain.plugin_all(Arc::new(Plain))?;
//! assert_eq!(greeter.greet("ada".into())?, "HELLO ADA");
//! # Ok::<(), InterposeError>(())
//! ```

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod prelude;

pub mod chain;
pub mod interceptor;
pub mod invocation;
pub mod plugin;
pub mod properties;
pub mod signature;

pub use chain::{InterceptorChain, InterceptorChainBuilder};
pub use interceptor::{Interceptor, WrapContext};
pub use invocation::Invocation;
pub use plugin::{Plugin, resolve_signatures};
pub use properties::{Properties, PropertyError};
pub use signature::Signature;
