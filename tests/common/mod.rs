//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
///
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=eagerseq=trace`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Iterator that yields `items` and panics if pulled beyond them.
///
/// Stands in for an input that fails after its Nth element: an operation
/// that short-circuits correctly never reaches the panic.
#[derive(Debug)]
pub struct Poisoned<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Poisoned<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }
}

impl<T> Iterator for Poisoned<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.items.next() {
            Some(item) => Some(item),
            None => panic!("poisoned iterator pulled past its last element"),
        }
    }
}

/// Shorthand for `Poisoned::new(items.to_vec())`.
pub fn poisoned<T: Clone>(items: &[T]) -> Poisoned<T> {
    Poisoned::new(items.to_vec())
}
