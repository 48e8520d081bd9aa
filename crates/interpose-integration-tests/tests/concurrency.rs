//! Integration tests for sharing sealed chains and wrapped targets across
//! threads.

mod common;

use std::sync::Arc;

use interpose_core::Target;
use interpose_test::prelude::*;

use common::chain_of;

const THREADS: usize = 8;
const CALLS: usize = 25;

#[test]
fn test_wrapped_target_is_callable_from_many_threads() {
    let log = CallLog::new();
    let chain = chain_of(vec![
        Arc::new(RecordingInterceptor::new("A", vec![update_signature()], &log)),
        Arc::new(RetryInterceptor::new(vec![update_signature()])),
    ]);
    let executor: Target = chain.plugin_all(Arc::new(MockExecutor::new(&log))).unwrap();

    std::thread::scope(|scope| {
        for t in 0..THREADS {
            let executor = Arc::clone(&executor);
            scope.spawn(move || {
                for c in 0..CALLS {
                    assert_eq!(executor.update(format!("{t}-{c}")).unwrap(), 1);
                }
            });
        }
    });

    assert_eq!(log.count_prefix("update("), THREADS * CALLS);
    assert_eq!(log.count_prefix("A:before"), THREADS * CALLS);
    assert_eq!(log.count_prefix("A:after"), THREADS * CALLS);
}

#[test]
fn test_plugin_all_concurrently_on_shared_chain() {
    let log = CallLog::new();
    let chain = chain_of(vec![Arc::new(RecordingInterceptor::new(
        "W",
        vec![do_work_string_signature()],
        &log,
    ))]);

    std::thread::scope(|scope| {
        for t in 0..THREADS {
            let chain = chain.clone();
            let log = log.clone();
            scope.spawn(move || {
                let worker = chain.plugin_all(Arc::new(MockWorker::new(&log))).unwrap();
                worker.do_work(t.to_string()).unwrap();
            });
        }
    });

    assert_eq!(log.count_prefix("W:before"), THREADS);
    assert_eq!(log.count_prefix("do_work("), THREADS);
    assert_eq!(chain.len(), 1);
}
