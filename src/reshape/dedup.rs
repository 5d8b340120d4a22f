//! Collapsing runs of consecutive equal elements.

use std::convert::Infallible;

use crate::cursor::open;
use crate::infallible;

/// Collapse each run of consecutive equal elements to its first element.
///
/// Non-adjacent duplicates survive: `[1, 2, 2, 1]` becomes `[1, 2, 1]`.
pub fn dedup<I>(source: I) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    dedup_by(source, |kept, next| kept == next)
}

/// [`dedup`] with a caller-supplied equality.
///
/// `eq(kept, next)` compares the representative of the current run with the
/// next element.
pub fn dedup_by<I, F>(source: I, mut eq: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    infallible(try_dedup_by(source, |kept, next| {
        Ok::<_, Infallible>(eq(kept, next))
    }))
}

/// Fallible [`dedup_by`].
pub fn try_dedup_by<I, F, E>(source: I, mut eq: F) -> Result<Vec<I::Item>, E>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Result<bool, E>,
{
    let mut kept: Vec<I::Item> = Vec::new();
    for (_, item) in open(source) {
        let duplicate = match kept.last() {
            Some(representative) => eq(representative, &item)?,
            None => false,
        };
        if !duplicate {
            kept.push(item);
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_only_adjacent_runs() {
        let input = [1, 2, 2, 3, 3, 3, 4, 4, 4, 4, 3, 3, 3, 2, 2, 1];
        assert_eq!(dedup(input), vec![1, 2, 3, 4, 3, 2, 1]);
        assert_eq!(dedup([1, 2, 2, 1]), vec![1, 2, 1]);
    }

    #[test]
    fn test_empty_and_singleton() {
        assert!(dedup(Vec::<i32>::new()).is_empty());
        assert_eq!(dedup(["x"]), vec!["x"]);
    }

    #[test]
    fn test_custom_equality_keeps_first_of_run() {
        let words = ["Apple", "apple", "APPLE", "pear", "Pear"];
        let collapsed = dedup_by(words, |a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(collapsed, vec!["Apple", "pear"]);
    }

    #[test]
    fn test_try_dedup_by_propagates() {
        let result: Result<Vec<i32>, &str> =
            try_dedup_by([1, 1, 2], |_, next| if *next == 2 { Err("bad") } else { Ok(true) });
        assert_eq!(result, Err("bad"));
    }
}
