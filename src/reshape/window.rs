//! Sliding windows with stride 1.

use std::collections::VecDeque;

use crate::cursor::open;
use crate::{SeqError, SeqResult};

/// Every contiguous run of `size` consecutive elements, in order.
///
/// A sequence of `n >= size` elements yields `n - size + 1` windows; a
/// shorter one yields none. Only a `size`-element ring buffer is kept while
/// traversing, and every window is an independent copy.
///
/// # Errors
///
/// [`SeqError::InvalidSize`] if `size == 0`, before `source` is pulled.
pub fn window<I>(source: I, size: usize) -> SeqResult<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
    I::Item: Clone,
{
    if size == 0 {
        tracing::debug!(size, "rejected window size");
        return Err(SeqError::InvalidSize {
            operation: "window",
            size,
        });
    }

    let mut cursor = open(source);
    let mut buffer: VecDeque<I::Item> = VecDeque::with_capacity(size);
    let mut windows = Vec::with_capacity(cursor.remaining_hint().saturating_sub(size - 1));

    while let Some((_, item)) = cursor.next_indexed() {
        if buffer.len() == size {
            buffer.pop_front();
        }
        buffer.push_back(item);
        if buffer.len() == size {
            windows.push(buffer.iter().cloned().collect());
        }
    }

    tracing::trace!(size, windows = windows.len(), "collected sliding windows");
    Ok(windows)
}
