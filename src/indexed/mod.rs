//! The indexed list contract
//!
//! Any fixed-length list addressed by zero-based position:
//! - `length` never changes after construction
//! - every position is validated against `[0, length)` before use
//! - `put(p, v)` followed by `get(p)` observes `v`

use crate::IndexedListError;

/// Fixed-length list with random access by position
///
/// Positions are signed so that negative requests can be rejected with
/// [`IndexedListError::IndexOutOfRange`] instead of wrapping.
pub trait IndexedList<T> {
    /// Number of positions, fixed at construction
    fn length(&self) -> usize;

    /// Value at `position`
    fn get(&self, position: i64) -> Result<&T, IndexedListError>;

    /// Store `value` at `position`
    ///
    /// On error the list is left unchanged.
    fn put(&mut self, position: i64, value: T) -> Result<(), IndexedListError>;

    /// Validate `position` against `[0, length)`
    fn check_position(&self, position: i64) -> Result<usize, IndexedListError> {
        let length = self.length();
        match usize::try_from(position) {
            Ok(idx) if idx < length => Ok(idx),
            _ => Err(IndexedListError::IndexOutOfRange { position, length }),
        }
    }

    /// Copy every position, in order, into a dense vector
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        (0..self.length() as i64)
            .filter_map(|position| self.get(position).ok().cloned())
            .collect()
    }
}

/// Validate a requested length for construction
pub(crate) fn check_length(size: i64) -> Result<usize, IndexedListError> {
    match usize::try_from(size) {
        Ok(length) if length > 0 => Ok(length),
        _ => Err(IndexedListError::InvalidLength(size)),
    }
}
