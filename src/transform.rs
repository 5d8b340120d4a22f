//! Element-wise transformations. Each drains its input.

use std::convert::Infallible;

use crate::cursor::open;
use crate::infallible;

/// Apply `mapper` to every `(element, index)`, preserving order and length.
pub fn map<I, F, U>(source: I, mut mapper: F) -> Vec<U>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> U,
{
    infallible(try_map(source, |item, index| {
        Ok::<_, Infallible>(mapper(item, index))
    }))
}

/// Fallible [`map`].
pub fn try_map<I, F, U, E>(source: I, mut mapper: F) -> Result<Vec<U>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Result<U, E>,
{
    let mut cursor = open(source);
    let mut mapped = Vec::with_capacity(cursor.remaining_hint());
    while let Some((index, item)) = cursor.next_indexed() {
        mapped.push(mapper(item, index)?);
    }
    Ok(mapped)
}

/// Keep the elements for which `predicate` holds, in their original order.
pub fn filter<I, P>(source: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    infallible(try_filter(source, |item, index| {
        Ok::<_, Infallible>(predicate(item, index))
    }))
}

/// Fallible [`filter`].
pub fn try_filter<I, P, E>(source: I, mut predicate: P) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> Result<bool, E>,
{
    let mut kept = Vec::new();
    for (index, item) in open(source) {
        if predicate(&item, index)? {
            kept.push(item);
        }
    }
    Ok(kept)
}

/// Map every element to an iterable and concatenate the results.
///
/// Nested iterables are drained in traversal order; an empty one contributes
/// nothing.
pub fn flat_map<I, F, J>(source: I, mut mapper: F) -> Vec<J::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> J,
    J: IntoIterator,
{
    infallible(try_flat_map(source, |item, index| {
        Ok::<_, Infallible>(mapper(item, index))
    }))
}

/// Fallible [`flat_map`].
pub fn try_flat_map<I, F, J, E>(source: I, mut mapper: F) -> Result<Vec<J::Item>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Result<J, E>,
    J: IntoIterator,
{
    let mut flattened = Vec::new();
    for (index, item) in open(source) {
        flattened.extend(mapper(item, index)?);
    }
    Ok(flattened)
}
