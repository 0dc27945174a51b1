//! Iterators over a sparse list

use std::iter::FusedIterator;

use super::chain::Entry;
use crate::IndexedListError;

/// Forward cursor over every position `0..length`
///
/// Gaps between populated entries yield the default value. The iterator
/// borrows its list, so the list cannot change while it is alive.
#[derive(Debug)]
pub struct Iter<'a, T> {
    /// Next position to produce
    cursor: usize,
    length: usize,
    default: &'a T,
    /// First chain entry at or after `cursor`
    pending: Option<&'a Entry<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(length: usize, default: &'a T, head: Option<&'a Entry<T>>) -> Self {
        Self {
            cursor: 0,
            length,
            default,
            pending: head,
        }
    }

    /// True while positions remain
    pub fn has_next(&self) -> bool {
        self.cursor < self.length
    }

    /// Value at the cursor, then advance by one position
    ///
    /// Fails with [`IndexedListError::ExhaustedIterator`] once all `length`
    /// values have been produced; the iterator stays exhausted afterwards.
    pub fn try_next(&mut self) -> Result<&'a T, IndexedListError> {
        if !self.has_next() {
            return Err(IndexedListError::ExhaustedIterator {
                length: self.length,
            });
        }

        let value = match self.pending {
            Some(entry) if entry.position == self.cursor => {
                self.pending = entry.next.as_deref();
                &entry.value
            }
            _ => self.default,
        };
        self.cursor += 1;
        Ok(value)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.length - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Populated `(position, value)` pairs in ascending position order
#[derive(Debug)]
pub struct Entries<'a, T> {
    pending: Option<&'a Entry<T>>,
    remaining: usize,
}

impl<'a, T> Entries<'a, T> {
    pub(super) fn new(head: Option<&'a Entry<T>>, populated: usize) -> Self {
        Self {
            pending: head,
            remaining: populated,
        }
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.pending?;
        self.pending = entry.next.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some((entry.position, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}
