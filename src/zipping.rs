//! Position-wise combination of several iterables.
//!
//! The options bundle is its own parameter; it is never inferred from the
//! shape of the data.

use crate::cursor::{open, Cursor};
use crate::options::{ZipOptions, ZipStrategy};
use crate::{SeqError, SeqResult};

/// Combine `sources` position-wise into rows of one element per source.
///
/// - `Shortest` stops as soon as any source is exhausted. The partially
///   built row of that round is discarded and later sources are not pulled.
/// - `Longest` continues until every source is exhausted, filling the slots
///   of exhausted sources with `options.fill_value`.
/// - `Strict` behaves like both when lengths agree and fails otherwise.
///
/// Zero sources yield an empty result.
///
/// # Errors
///
/// - [`SeqError::MissingFillValue`] for `Longest` without a fill value,
///   before any source is pulled
/// - [`SeqError::ZipLengthMismatch`] for `Strict` with unequal lengths
pub fn zip<S, J>(sources: S, options: ZipOptions<J::Item>) -> SeqResult<Vec<Vec<J::Item>>>
where
    S: IntoIterator<Item = J>,
    J: IntoIterator,
    J::Item: Clone,
{
    let ZipOptions {
        strategy,
        fill_value,
    } = options;
    if strategy == ZipStrategy::Longest && fill_value.is_none() {
        tracing::debug!(%strategy, "zip filling requested without a fill value");
        return Err(SeqError::MissingFillValue { operation: "zip" });
    }
    let cursors = open_all(sources);
    zip_cursors(cursors, strategy, || fill_value.clone())
}

/// `Longest` zip where slots of exhausted sources are `None`.
pub fn zip_longest<S, J>(sources: S) -> Vec<Vec<Option<J::Item>>>
where
    S: IntoIterator<Item = J>,
    J: IntoIterator,
{
    let mut cursors: Vec<_> = open_all(sources);
    let mut exhausted = vec![false; cursors.len()];
    let mut rows = Vec::new();
    if cursors.is_empty() {
        return rows;
    }

    loop {
        let row = pull_row(&mut cursors, &mut exhausted);
        if row.iter().all(Option::is_none) {
            break;
        }
        rows.push(row);
    }
    rows
}

fn open_all<S, J>(sources: S) -> Vec<Cursor<J::IntoIter>>
where
    S: IntoIterator<Item = J>,
    J: IntoIterator,
{
    open(sources).map(|(_, source)| open(source)).collect()
}

/// Pull one element from every source that is not yet exhausted.
fn pull_row<J: Iterator>(cursors: &mut [Cursor<J>], exhausted: &mut [bool]) -> Vec<Option<J::Item>> {
    cursors
        .iter_mut()
        .zip(exhausted.iter_mut())
        .map(|(cursor, done)| {
            if *done {
                return None;
            }
            let next = cursor.next_indexed().map(|(_, item)| item);
            *done = next.is_none();
            next
        })
        .collect()
}

fn zip_cursors<J, F>(
    mut cursors: Vec<Cursor<J>>,
    strategy: ZipStrategy,
    mut fill: F,
) -> SeqResult<Vec<Vec<J::Item>>>
where
    J: Iterator,
    F: FnMut() -> Option<J::Item>,
{
    let width = cursors.len();
    let mut rows = Vec::new();
    if width == 0 {
        return Ok(rows);
    }

    if strategy == ZipStrategy::Shortest {
        'rounds: loop {
            let mut row = Vec::with_capacity(width);
            for cursor in cursors.iter_mut() {
                match cursor.next_indexed() {
                    Some((_, item)) => row.push(item),
                    None => break 'rounds,
                }
            }
            rows.push(row);
        }
        tracing::trace!(%strategy, width, rows = rows.len(), "zipped sequences");
        return Ok(rows);
    }

    let mut exhausted = vec![false; width];
    loop {
        let slots = pull_row(&mut cursors, &mut exhausted);
        let missing = slots.iter().position(Option::is_none);
        let Some(first_missing) = missing else {
            rows.push(slots.into_iter().flatten().collect());
            continue;
        };
        if slots.iter().all(Option::is_none) {
            break;
        }
        if strategy == ZipStrategy::Strict {
            tracing::debug!(
                index = first_missing,
                length = rows.len(),
                "strict zip length mismatch"
            );
            return Err(SeqError::ZipLengthMismatch {
                index: first_missing,
                length: rows.len(),
            });
        }

        let mut row = Vec::with_capacity(width);
        for slot in slots {
            match slot.or_else(&mut fill) {
                Some(value) => row.push(value),
                None => return Err(SeqError::MissingFillValue { operation: "zip" }),
            }
        }
        rows.push(row);
    }

    tracing::trace!(%strategy, width, rows = rows.len(), "zipped sequences");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_is_default() {
        let rows = zip([vec![1, 2, 3], vec![10, 20]], ZipOptions::default()).unwrap();
        assert_eq!(rows, vec![vec![1, 10], vec![2, 20]]);
    }

    #[test]
    fn test_shortest_does_not_pull_later_sources_after_stop() {
        let mut pulled_second = 0;
        let first: Box<dyn Iterator<Item = i32> + '_> = Box::new(vec![1].into_iter());
        let second: Box<dyn Iterator<Item = i32> + '_> =
            Box::new((100..).inspect(|_| pulled_second += 1));
        let rows = zip(vec![first, second], ZipOptions::shortest()).unwrap();
        assert_eq!(rows, vec![vec![1, 100]]);
        assert_eq!(pulled_second, 1);
    }

    #[test]
    fn test_longest_fills_exhausted_sources() {
        let rows = zip([vec![1, 2, 3], vec![10]], ZipOptions::longest(0)).unwrap();
        assert_eq!(rows, vec![vec![1, 10], vec![2, 0], vec![3, 0]]);
    }

    #[test]
    fn test_longest_requires_fill() {
        let options = ZipOptions::default().with_strategy(ZipStrategy::Longest);
        assert_eq!(
            zip([vec![1]], options),
            Err(SeqError::MissingFillValue { operation: "zip" })
        );
    }

    #[test]
    fn test_strict() {
        let rows = zip([vec!['a', 'b'], vec!['x', 'y']], ZipOptions::strict()).unwrap();
        assert_eq!(rows, vec![vec!['a', 'x'], vec!['b', 'y']]);

        assert_eq!(
            zip([vec![1, 2, 3], vec![1, 2]], ZipOptions::strict()),
            Err(SeqError::ZipLengthMismatch {
                index: 1,
                length: 2
            })
        );
        assert_eq!(
            zip([vec![1], vec![1, 2]], ZipOptions::strict()),
            Err(SeqError::ZipLengthMismatch {
                index: 0,
                length: 1
            })
        );
    }

    #[test]
    fn test_zero_and_single_sources() {
        let none: Vec<Vec<i32>> = Vec::new();
        for options in [ZipOptions::shortest(), ZipOptions::longest(0), ZipOptions::strict()] {
            assert!(zip(none.clone(), options).unwrap().is_empty());
        }
        let rows = zip([vec![1, 2]], ZipOptions::strict()).unwrap();
        assert_eq!(rows, vec![vec![1], vec![2]]);
    }

    #[test]
    fn test_zip_longest_uses_absent_marker() {
        let rows = zip_longest([vec!["a"], vec!["b", "c"]]);
        assert_eq!(
            rows,
            vec![vec![Some("a"), Some("b")], vec![None, Some("c")]]
        );
        assert!(zip_longest(Vec::<Vec<u8>>::new()).is_empty());
    }
}
