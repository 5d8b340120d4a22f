//! Predicate and plain traversals.
//!
//! `all`, `any`, `find` and `find_index` short-circuit: they stop pulling the
//! moment the answer is known. `consume`, `for_each` and `length` always
//! drain their input.

use std::convert::Infallible;

use crate::cursor::open;
use crate::infallible;

/// Whether `predicate` holds for every element. Vacuously `true` when empty.
pub fn all<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    infallible(try_all(source, |item, index| {
        Ok::<_, Infallible>(predicate(item, index))
    }))
}

/// Fallible [`all`]; stops at the first failing element or callback error.
pub fn try_all<I, P, E>(source: I, mut predicate: P) -> Result<bool, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> Result<bool, E>,
{
    let mut cursor = open(source);
    while let Some((index, item)) = cursor.next_indexed() {
        if !predicate(&item, index)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether `predicate` holds for at least one element. `false` when empty.
pub fn any<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    infallible(try_any(source, |item, index| {
        Ok::<_, Infallible>(predicate(item, index))
    }))
}

/// Fallible [`any`]; stops at the first satisfying element or callback error.
pub fn try_any<I, P, E>(source: I, predicate: P) -> Result<bool, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> Result<bool, E>,
{
    Ok(try_find_index(source, predicate)?.is_some())
}

/// First element satisfying `predicate`, or `None`.
pub fn find<I, P>(source: I, mut predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    infallible(try_find(source, |item, index| {
        Ok::<_, Infallible>(predicate(item, index))
    }))
}

/// Fallible [`find`].
pub fn try_find<I, P, E>(source: I, mut predicate: P) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> Result<bool, E>,
{
    let mut cursor = open(source);
    while let Some((index, item)) = cursor.next_indexed() {
        if predicate(&item, index)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// Index of the first element satisfying `predicate`, or `None`.
pub fn find_index<I, P>(source: I, mut predicate: P) -> Option<usize>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    infallible(try_find_index(source, |item, index| {
        Ok::<_, Infallible>(predicate(item, index))
    }))
}

/// Fallible [`find_index`].
pub fn try_find_index<I, P, E>(source: I, mut predicate: P) -> Result<Option<usize>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> Result<bool, E>,
{
    let mut cursor = open(source);
    while let Some((index, item)) = cursor.next_indexed() {
        if predicate(&item, index)? {
            return Ok(Some(index));
        }
    }
    Ok(None)
}

/// Drain `source`, discarding every element.
pub fn consume<I: IntoIterator>(source: I) {
    open(source).drain();
}

/// Call `consumer` with every `(element, index)` in order.
pub fn for_each<I, F>(source: I, mut consumer: F)
where
    I: IntoIterator,
    F: FnMut(I::Item, usize),
{
    infallible(try_for_each(source, |item, index| {
        consumer(item, index);
        Ok::<_, Infallible>(())
    }))
}

/// Fallible [`for_each`]; the first error abandons the traversal.
pub fn try_for_each<I, F, E>(source: I, mut consumer: F) -> Result<(), E>
where
    I: IntoIterator,
    F: FnMut(I::Item, usize) -> Result<(), E>,
{
    for (index, item) in open(source) {
        consumer(item, index)?;
    }
    Ok(())
}

/// Number of elements in `source`, draining it.
pub fn length<I: IntoIterator>(source: I) -> usize {
    open(source).drain()
}
