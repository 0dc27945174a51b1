//! # Sparse Indexed Lists
//!
//! A fixed-length, randomly addressable list for the case where most
//! positions hold one shared default value.
//!
//! ## Core Idea
//!
//! 1. **Default value**: every position implicitly holds `default`
//! 2. **Sparse chain**: only positions that deviate from `default` are stored,
//!    as an ordered singly-linked chain of `(position, value)` entries
//! 3. **Dense facade**: `get`, `put` and full-length iteration behave exactly
//!    like a plain array of `length` elements
//!
//! Result: Space = O(k) for k modified positions, independent of `length`.
//!
//! ## Usage Example
//!
//! ```
//! use sparse_indexed::{IndexedList, SparseIndexedList};
//!
//! let mut list = SparseIndexedList::new(10, 7)?;
//! list.put(3, 9)?;
//! assert_eq!(*list.get(3)?, 9);
//! assert_eq!(list.populated(), 1);
//!
//! list.put(3, 7)?; // back to default, entry removed
//! assert_eq!(list.populated(), 0);
//! assert!(list.iter().all(|&v| v == 7));
//! # Ok::<(), sparse_indexed::IndexedListError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod indexed; // The IndexedList contract
pub mod sparse; // Sparse chain storage engine

// Re-exports for convenience
pub use indexed::IndexedList;
pub use sparse::{Entries, Iter, SparseIndexedList};

use thiserror::Error;

/// Errors reported by indexed lists and their iterators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexedListError {
    /// Requested length was zero or negative
    #[error("Invalid length {0}: length must be greater than zero")]
    InvalidLength(i64),

    /// Position outside `[0, length)`
    #[error("Index {position} out of range for length {length}")]
    IndexOutOfRange {
        /// Position that was requested
        position: i64,
        /// Length of the list
        length: usize,
    },

    /// `next` called after every position was produced
    #[error("Iterator exhausted after {length} elements")]
    ExhaustedIterator {
        /// Number of elements the iterator produced
        length: usize,
    },
}
