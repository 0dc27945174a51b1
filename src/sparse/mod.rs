//! Sparse indexed list
//!
//! Stores only the positions whose value differs from the list's default, as
//! an ascending chain of `(position, value)` entries.
//! Space: O(k) entries for k modified positions, independent of length.
//! Time: `get` and `put` scan the chain, O(k) worst case.

mod chain;
mod iter;

pub use iter::{Entries, Iter};

use std::fmt;

use tracing::{debug, trace};

use self::chain::{Link, Placement};
use crate::indexed::{check_length, IndexedList};
use crate::IndexedListError;

/// Fixed-length list backed by a sparse chain of non-default entries
pub struct SparseIndexedList<T> {
    /// Number of positions (fixed)
    length: usize,

    /// Value of every position without an entry
    default: T,

    /// Ascending chain of non-default entries
    head: Link<T>,

    /// Entries currently in the chain
    populated: usize,
}

impl<T> SparseIndexedList<T> {
    /// Create a list of `size` positions, all equal to `default`
    ///
    /// Fails with [`IndexedListError::InvalidLength`] when `size <= 0`.
    pub fn new(size: i64, default: T) -> Result<Self, IndexedListError> {
        let length = check_length(size)?;
        debug!(length, "created sparse indexed list");

        Ok(Self {
            length,
            default,
            head: None,
            populated: 0,
        })
    }

    /// Value of every unmodified position
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Number of positions holding a non-default value
    pub fn populated(&self) -> usize {
        self.populated
    }

    /// Fraction of positions holding a non-default value
    pub fn density(&self) -> f64 {
        self.populated as f64 / self.length as f64
    }

    /// Iterate over all `length` positions in order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.length, &self.default, self.head.as_deref())
    }

    /// Iterate over populated `(position, value)` pairs in ascending order
    pub fn entries(&self) -> Entries<'_, T> {
        Entries::new(self.head.as_deref(), self.populated)
    }

    /// Revert every position to the default value
    pub fn clear(&mut self) {
        chain::unlink_all(self.head.take());
        self.populated = 0;
        trace!("cleared all entries");
    }
}

impl<T: PartialEq> IndexedList<T> for SparseIndexedList<T> {
    fn length(&self) -> usize {
        self.length
    }

    fn get(&self, position: i64) -> Result<&T, IndexedListError> {
        let idx = self.check_position(position)?;
        Ok(chain::find(&self.head, idx).map_or(&self.default, |entry| &entry.value))
    }

    fn put(&mut self, position: i64, value: T) -> Result<(), IndexedListError> {
        let idx = self.check_position(position)?;
        let is_default = value == self.default;

        match chain::place(&mut self.head, idx, value, is_default) {
            Placement::Inserted => {
                self.populated += 1;
                trace!(position = idx, populated = self.populated, "inserted entry");
            }
            Placement::Removed => {
                self.populated -= 1;
                trace!(position = idx, populated = self.populated, "removed entry");
            }
            Placement::Overwritten => trace!(position = idx, "overwrote entry"),
            Placement::Unchanged => {}
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a SparseIndexedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Drop for SparseIndexedList<T> {
    fn drop(&mut self) {
        chain::unlink_all(self.head.take());
    }
}

impl<T: Clone> Clone for SparseIndexedList<T> {
    fn clone(&self) -> Self {
        let mut head: Link<T> = None;
        let mut tail = &mut head;
        for (position, value) in self.entries() {
            let entry = tail.insert(Box::new(chain::Entry {
                position,
                value: value.clone(),
                next: None,
            }));
            tail = &mut entry.next;
        }

        Self {
            length: self.length,
            default: self.default.clone(),
            head,
            populated: self.populated,
        }
    }
}

impl<T: PartialEq> PartialEq for SparseIndexedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self.default == other.default
            && self.entries().eq(other.entries())
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseIndexedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SparseIndexedList")
            .field("length", &self.length)
            .field("default", &self.default)
            .field("entries", &EntriesDebug(self))
            .finish()
    }
}

struct EntriesDebug<'a, T>(&'a SparseIndexedList<T>);

impl<T: fmt::Debug> fmt::Debug for EntriesDebug<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.entries()).finish()
    }
}
