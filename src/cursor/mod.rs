//! Indexed pull cursor
//!
//! Every operation drives its input through a [`Cursor`]: a one-shot,
//! forward-only wrapper that hands out `(index, element)` pairs and counts
//! how many elements were pulled. Short-circuiting operations simply stop
//! calling [`Cursor::next_indexed`]; eager ones call [`Cursor::drain`] or
//! iterate to exhaustion.

/// Forward-only cursor over a single traversal.
///
/// Space: O(1) beyond the wrapped iterator (the position counter only).
#[derive(Debug, Clone)]
pub struct Cursor<I> {
    inner: I,
    position: usize,
}

impl<I: Iterator> Cursor<I> {
    /// Open a cursor at the start of `source`.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: source.into_iter(),
            position: 0,
        }
    }

    /// Pull the next element together with its traversal index.
    #[inline]
    pub fn next_indexed(&mut self) -> Option<(usize, I::Item)> {
        let item = self.inner.next()?;
        let index = self.position;
        self.position += 1;
        Some((index, item))
    }

    /// Number of elements pulled so far.
    ///
    /// This is also the index the next element will receive.
    #[inline]
    pub fn pulled(&self) -> usize {
        self.position
    }

    /// Pull and discard everything that remains, returning how many
    /// elements were discarded.
    pub fn drain(&mut self) -> usize {
        let before = self.position;
        while self.next_indexed().is_some() {}
        self.position - before
    }

    /// Lower bound on the remaining elements, used to presize results.
    #[inline]
    pub(crate) fn remaining_hint(&self) -> usize {
        self.inner.size_hint().0
    }
}

impl<I: Iterator> Iterator for Cursor<I> {
    type Item = (usize, I::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_indexed()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Open a cursor over any iterable.
#[inline]
pub(crate) fn open<S: IntoIterator>(source: S) -> Cursor<S::IntoIter> {
    Cursor::new(source)
}
