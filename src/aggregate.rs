//! Aggregation: `reduce` and `scan`, with and without a seed.
//!
//! Without a seed the first element becomes the accumulator and the callback
//! starts at index 1. With a seed the callback starts at index 0. The index is
//! always the element's position in the traversal.

use std::convert::Infallible;

use crate::cursor::open;
use crate::{infallible, SeqError, SeqResult};

/// Fold the sequence using its first element as the seed.
///
/// # Errors
///
/// [`SeqError::EmptyReduce`] when `source` is empty.
pub fn reduce<I, F>(source: I, mut reducer: F) -> SeqResult<I::Item>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item, usize) -> I::Item,
{
    try_reduce(source, |acc, item, index| {
        Ok::<_, SeqError>(reducer(acc, item, index))
    })
}

/// Fallible [`reduce`]. Callback errors are returned unchanged.
pub fn try_reduce<I, F, E>(source: I, mut reducer: F) -> Result<I::Item, E>
where
    I: IntoIterator,
    F: FnMut(I::Item, I::Item, usize) -> Result<I::Item, E>,
    E: From<SeqError>,
{
    let mut cursor = open(source);
    let Some((_, seed)) = cursor.next_indexed() else {
        tracing::debug!("reduce called on an empty sequence without a seed");
        return Err(SeqError::EmptyReduce.into());
    };
    let mut acc = seed;
    while let Some((index, item)) = cursor.next_indexed() {
        acc = reducer(acc, item, index)?;
    }
    Ok(acc)
}

/// Fold the sequence starting from `initial`. Empty input returns `initial`.
pub fn reduce_with<I, A, F>(source: I, initial: A, mut reducer: F) -> A
where
    I: IntoIterator,
    F: FnMut(A, I::Item, usize) -> A,
{
    infallible(try_reduce_with(source, initial, |acc, item, index| {
        Ok::<_, Infallible>(reducer(acc, item, index))
    }))
}

/// Fallible [`reduce_with`].
pub fn try_reduce_with<I, A, F, E>(source: I, initial: A, mut reducer: F) -> Result<A, E>
where
    I: IntoIterator,
    F: FnMut(A, I::Item, usize) -> Result<A, E>,
{
    let mut acc = initial;
    for (index, item) in open(source) {
        acc = reducer(acc, item, index)?;
    }
    Ok(acc)
}

/// Running accumulation using the first element as the seed.
///
/// The first element is emitted unchanged; every later element yields
/// `accumulator(&previous, element, index)`. Empty input yields an empty
/// result.
pub fn scan<I, F>(source: I, mut accumulator: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, I::Item, usize) -> I::Item,
{
    infallible(try_scan(source, |acc, item, index| {
        Ok::<_, Infallible>(accumulator(acc, item, index))
    }))
}

/// Fallible [`scan`].
pub fn try_scan<I, F, E>(source: I, mut accumulator: F) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    F: FnMut(&I::Item, I::Item, usize) -> Result<I::Item, E>,
{
    let mut cursor = open(source);
    let mut steps = Vec::with_capacity(cursor.remaining_hint());
    let Some((_, seed)) = cursor.next_indexed() else {
        return Ok(steps);
    };
    steps.push(seed);
    while let Some((index, item)) = cursor.next_indexed() {
        let next = match steps.last() {
            Some(previous) => accumulator(previous, item, index)?,
            None => item,
        };
        steps.push(next);
    }
    Ok(steps)
}

/// Running accumulation starting from `initial`, which is not emitted.
///
/// Produces one value per element; empty input yields an empty result.
pub fn scan_with<I, A, F>(source: I, initial: A, mut accumulator: F) -> Vec<A>
where
    I: IntoIterator,
    F: FnMut(&A, I::Item, usize) -> A,
{
    infallible(try_scan_with(source, initial, |acc, item, index| {
        Ok::<_, Infallible>(accumulator(acc, item, index))
    }))
}

/// Fallible [`scan_with`].
pub fn try_scan_with<I, A, F, E>(source: I, initial: A, mut accumulator: F) -> Result<Vec<A>, E>
where
    I: IntoIterator,
    F: FnMut(&A, I::Item, usize) -> Result<A, E>,
{
    let mut cursor = open(source);
    let mut steps: Vec<A> = Vec::with_capacity(cursor.remaining_hint());
    while let Some((index, item)) = cursor.next_indexed() {
        let previous = steps.last().unwrap_or(&initial);
        let next = accumulator(previous, item, index)?;
        steps.push(next);
    }
    Ok(steps)
}
