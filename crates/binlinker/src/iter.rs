//! Iteration over container entries

use crate::accessor::BinLinkerAccessor;
use std::iter::FusedIterator;

/// Iterator over the entry views of a container, in index order
///
/// Created by [`BinLinkerAccessor::iter`]. Each item borrows from the
/// container buffer, not from the iterator.
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    accessor: BinLinkerAccessor<'a>,
    front: usize,
    back: usize,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(accessor: BinLinkerAccessor<'a>) -> Self {
        Self {
            accessor,
            front: 0,
            back: accessor.length(),
        }
    }
}

impl<'a> Iterator for Entries<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let entry = self.accessor.entry(self.front);
        self.front += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Entries<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.accessor.entry(self.back))
    }
}

impl ExactSizeIterator for Entries<'_> {}

impl FusedIterator for Entries<'_> {}
