//! Structural reshaping: reverse, chunk, window, dedup, chain, repeat.

mod chunk;
mod dedup;
mod window;

pub use chunk::{chunk, chunk_padded};
pub use dedup::{dedup, dedup_by, try_dedup_by};
pub use window::window;

use crate::cursor::open;

/// All elements in reverse traversal order.
pub fn reverse<I: IntoIterator>(source: I) -> Vec<I::Item> {
    let mut reversed: Vec<I::Item> = open(source).map(|(_, item)| item).collect();
    reversed.reverse();
    reversed
}

/// Concatenate `sources` in order, draining each before moving to the next.
pub fn chain<S, J>(sources: S) -> Vec<J::Item>
where
    S: IntoIterator<Item = J>,
    J: IntoIterator,
{
    let mut joined = Vec::new();
    for (_, source) in open(sources) {
        joined.extend(source);
    }
    joined
}

/// `value` repeated `times` times. Each copy is a `clone` of `value`.
pub fn repeat<T: Clone>(value: T, times: usize) -> Vec<T> {
    vec![value; times]
}
