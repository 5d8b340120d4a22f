//! Fixed-size, non-overlapping partitioning.

use crate::cursor::open;
use crate::options::{ChunkOptions, ChunkStrategy};
use crate::{SeqError, SeqResult};

/// Split `source` into consecutive groups of exactly `size` elements.
///
/// The trailing partial group, if any, is handled by `options.strategy`:
/// dropped (`DropEnd`), kept short (`KeepEnd`), padded with
/// `options.fill_value` (`PadEnd`) or rejected (`Strict`).
///
/// # Errors
///
/// - [`SeqError::InvalidSize`] if `size == 0`
/// - [`SeqError::MissingFillValue`] for `PadEnd` without a fill value
/// - [`SeqError::IncompleteChunk`] for `Strict` with a trailing partial group
///
/// Argument errors are raised before `source` is pulled.
pub fn chunk<I>(source: I, size: usize, options: ChunkOptions<I::Item>) -> SeqResult<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    validate_size(size)?;
    let ChunkOptions {
        strategy,
        fill_value,
    } = options;
    if strategy == ChunkStrategy::PadEnd && fill_value.is_none() {
        tracing::debug!(%strategy, "chunk padding requested without a fill value");
        return Err(SeqError::MissingFillValue { operation: "chunk" });
    }
    partition(source, size, strategy, || fill_value.clone())
}

/// [`chunk`] with `PadEnd` semantics where missing slots are `None`.
///
/// Full groups hold `Some(element)`; only the trailing group can contain
/// `None`.
pub fn chunk_padded<I: IntoIterator>(source: I, size: usize) -> SeqResult<Vec<Vec<Option<I::Item>>>> {
    validate_size(size)?;
    partition(
        open(source).map(|(_, item)| Some(item)),
        size,
        ChunkStrategy::PadEnd,
        || Some(None),
    )
}

fn validate_size(size: usize) -> SeqResult<()> {
    if size == 0 {
        tracing::debug!(size, "rejected chunk size");
        return Err(SeqError::InvalidSize {
            operation: "chunk",
            size,
        });
    }
    Ok(())
}

/// Group the elements and settle the trailing group.
///
/// `fill` is only consulted for `PadEnd`; returning `None` from it is a
/// caller bug guarded against by validation.
fn partition<I, F>(
    source: I,
    size: usize,
    strategy: ChunkStrategy,
    mut fill: F,
) -> SeqResult<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
    F: FnMut() -> Option<I::Item>,
{
    let mut cursor = open(source);
    let mut groups = Vec::with_capacity(cursor.remaining_hint() / size);
    let mut current = Vec::with_capacity(size);

    while let Some((_, item)) = cursor.next_indexed() {
        current.push(item);
        if current.len() == size {
            groups.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }

    tracing::trace!(
        %strategy,
        size,
        full_groups = groups.len(),
        remainder = current.len(),
        "partitioned sequence"
    );

    if current.is_empty() {
        return Ok(groups);
    }

    match strategy {
        ChunkStrategy::DropEnd => {}
        ChunkStrategy::KeepEnd => groups.push(current),
        ChunkStrategy::PadEnd => {
            while current.len() < size {
                match fill() {
                    Some(value) => current.push(value),
                    None => return Err(SeqError::MissingFillValue { operation: "chunk" }),
                }
            }
            groups.push(current);
        }
        ChunkStrategy::Strict => {
            tracing::debug!(size, remainder = current.len(), "strict chunking mismatch");
            return Err(SeqError::IncompleteChunk {
                size,
                remainder: current.len(),
            });
        }
    }
    Ok(groups)
}
