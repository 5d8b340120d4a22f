//! Positional slicing: `take`, `drop`, `take_while`, `drop_while`.

use std::convert::Infallible;

use crate::cursor::open;
use crate::infallible;

/// First `count` elements (all of them if the input is shorter).
///
/// Pulls at most `count` elements; `take(source, 0)` pulls nothing.
pub fn take<I: IntoIterator>(source: I, count: usize) -> Vec<I::Item> {
    if count == 0 {
        return Vec::new();
    }
    let mut cursor = open(source);
    let mut taken = Vec::with_capacity(count.min(cursor.remaining_hint()));
    while let Some((index, item)) = cursor.next_indexed() {
        taken.push(item);
        if index + 1 == count {
            break;
        }
    }
    taken
}

/// Everything after the first `count` elements, draining the input.
pub fn drop<I: IntoIterator>(source: I, count: usize) -> Vec<I::Item> {
    open(source)
        .filter(|(index, _)| *index >= count)
        .map(|(_, item)| item)
        .collect()
}

/// Longest prefix whose elements satisfy `predicate`.
///
/// Stops pulling at the first failing element, which is not included.
pub fn take_while<I, P>(source: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    infallible(try_take_while(source, |item, index| {
        Ok::<_, Infallible>(predicate(item, index))
    }))
}

/// Fallible [`take_while`].
pub fn try_take_while<I, P, E>(source: I, mut predicate: P) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> Result<bool, E>,
{
    let mut cursor = open(source);
    let mut prefix = Vec::new();
    while let Some((index, item)) = cursor.next_indexed() {
        if !predicate(&item, index)? {
            break;
        }
        prefix.push(item);
    }
    Ok(prefix)
}

/// Skip the prefix satisfying `predicate`; return the first failing element
/// and everything after it.
///
/// The predicate is not consulted again once it has failed.
pub fn drop_while<I, P>(source: I, mut predicate: P) -> Vec<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> bool,
{
    infallible(try_drop_while(source, |item, index| {
        Ok::<_, Infallible>(predicate(item, index))
    }))
}

/// Fallible [`drop_while`].
pub fn try_drop_while<I, P, E>(source: I, mut predicate: P) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item, usize) -> Result<bool, E>,
{
    let mut cursor = open(source);
    while let Some((index, item)) = cursor.next_indexed() {
        if !predicate(&item, index)? {
            let mut rest = Vec::with_capacity(cursor.remaining_hint().saturating_add(1));
            rest.push(item);
            rest.extend(cursor.map(|(_, item)| item));
            return Ok(rest);
        }
    }
    Ok(Vec::new())
}
