//! # Eager Sequence Operations
//!
//! Materializing counterparts of the classic functional sequence utilities:
//! map, filter, reduce, zip, chunk, window, dedup, take/drop and friends.
//!
//! ## Consumption Contract
//!
//! 1. **Single pass**: every operation takes its input by value and pulls it
//!    left to right exactly once through a [`Cursor`].
//! 2. **Indexed callbacks**: callbacks receive `(element, index)` where the
//!    index is the position within the current traversal.
//! 3. **Short-circuit**: `all`, `any`, `find`, `find_index`, `take` and
//!    `take_while` stop pulling as soon as the answer is known.
//! 4. **Atomic failure**: an operation either returns a complete result or an
//!    error; callback errors surface unchanged through the `try_` forms.
//!
//! ## Usage Example
//!
//! ```
//! use eagerseq::{chunk, map, take, take_while, ChunkOptions};
//!
//! let words = ["foo", "bar", "baz", "foobar"];
//! let short = take_while(words, |w, _| w.len() <= 3);
//! let upper = map(short, |w, _| w.to_uppercase());
//! assert_eq!(take(upper, 2), vec!["FOO", "BAR"]);
//!
//! let groups = chunk([1, 2, 3, 4, 5], 2, ChunkOptions::keep_end())?;
//! assert_eq!(groups, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! # Ok::<(), eagerseq::SeqError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod cursor;     // Indexed pull cursor shared by every operation
pub mod traverse;   // Predicates and plain traversals
pub mod transform;  // map / filter / flat_map
pub mod slicing;    // take / drop and their predicate forms
pub mod aggregate;  // reduce / scan
pub mod reshape;    // reverse, chunk, window, dedup, chain, repeat
pub mod zipping;    // N-way zip
pub mod options;    // Strategy selectors and option bundles

// Re-exports for convenience
pub use cursor::Cursor;
pub use traverse::{
    all, any, consume, find, find_index, for_each, length, try_all, try_any, try_find,
    try_find_index, try_for_each,
};
pub use transform::{filter, flat_map, map, try_filter, try_flat_map, try_map};
pub use slicing::{drop, take, take_while, drop_while, try_drop_while, try_take_while};
pub use aggregate::{
    reduce, reduce_with, scan, scan_with, try_reduce, try_reduce_with, try_scan, try_scan_with,
};
pub use reshape::{
    chain, chunk, chunk_padded, dedup, dedup_by, repeat, reverse, try_dedup_by, window,
};
pub use zipping::{zip, zip_longest};
pub use options::{ChunkOptions, ChunkStrategy, ZipOptions, ZipStrategy};

use std::convert::Infallible;

use thiserror::Error;

/// Errors raised by the sequence operations themselves.
///
/// Callback failures are never converted into this type; they are returned
/// unchanged through the `try_` forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// A size argument (chunk or window size) was zero.
    #[error("invalid {operation} size {size}: size must be > 0")]
    InvalidSize {
        /// Operation that rejected the size
        operation: &'static str,
        /// Size that was supplied
        size: usize,
    },

    /// A strategy name did not match any known strategy.
    #[error("unknown {kind} strategy {value:?}")]
    UnknownStrategy {
        /// Strategy family (`chunk` or `zip`)
        kind: &'static str,
        /// Name that failed to parse
        value: String,
    },

    /// A padding strategy was selected without a fill value.
    #[error("{operation} strategy requires a fill value")]
    MissingFillValue {
        /// Operation that needed the fill
        operation: &'static str,
    },

    /// Reducing an empty sequence without a seed.
    #[error("no elements to reduce")]
    EmptyReduce,

    /// `strict` chunking found a trailing partial group.
    #[error("strict chunking: trailing group has {remainder} of {size} elements")]
    IncompleteChunk {
        /// Requested group size
        size: usize,
        /// Elements left over in the last group
        remainder: usize,
    },

    /// `strict` zipping found iterables of different lengths.
    #[error("strict zip: iterable {index} ran out after {length} elements while others continued")]
    ZipLengthMismatch {
        /// Position (in argument order) of the first exhausted iterable
        index: usize,
        /// Number of elements it produced
        length: usize,
    },
}

/// Result alias for operations that only fail with [`SeqError`].
pub type SeqResult<T> = Result<T, SeqError>;

/// Unwrap a result whose error type cannot be constructed.
#[inline]
pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
