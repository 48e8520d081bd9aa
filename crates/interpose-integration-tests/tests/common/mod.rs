//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use interpose_plugin::{Interceptor, InterceptorChain};

/// Seal a chain from interceptors in registration order.
pub fn chain_of(interceptors: Vec<Arc<dyn Interceptor>>) -> InterceptorChain {
    let mut builder = InterceptorChain::builder();
    for interceptor in interceptors {
        builder.add_interceptor(interceptor).unwrap();
    }
    builder.build()
}
