//! Dense oracle for cross-checking sparse lists

#![allow(dead_code)]
use sparse_indexed::{IndexedList, IndexedListError};

/// Plain array holding every position, used as a reference implementation
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayIndexedList<T> {
    data: Vec<T>,
}

impl<T: Clone> ArrayIndexedList<T> {
    pub fn new(size: i64, default: T) -> Result<Self, IndexedListError> {
        match usize::try_from(size) {
            Ok(length) if length > 0 => Ok(Self {
                data: vec![default; length],
            }),
            _ => Err(IndexedListError::InvalidLength(size)),
        }
    }
}

impl<T> IndexedList<T> for ArrayIndexedList<T> {
    fn length(&self) -> usize {
        self.data.len()
    }

    fn get(&self, position: i64) -> Result<&T, IndexedListError> {
        let idx = self.check_position(position)?;
        Ok(&self.data[idx])
    }

    fn put(&mut self, position: i64, value: T) -> Result<(), IndexedListError> {
        let idx = self.check_position(position)?;
        self.data[idx] = value;
        Ok(())
    }
}
