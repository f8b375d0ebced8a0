//! Plain vectors with an optional `names` attribute.

use std::fmt;

use vh_ir::CharId;

use crate::Heap;

/// Contiguous storage of one element type plus optional element names.
///
/// Names never influence hashing; deep identity compares them.
pub struct Vector<T> {
    data: Heap<Vec<T>>,
    names: Option<Heap<Vec<CharId>>>,
}

impl<T> Vector<T> {
    pub(crate) fn new(data: Vec<T>) -> Self {
        Vector {
            data: Heap::new(data),
            names: None,
        }
    }

    pub(crate) fn with_names(&self, names: Vec<CharId>) -> Self {
        Vector {
            data: self.data.clone(),
            names: Some(Heap::new(names)),
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    #[inline]
    pub fn names(&self) -> Option<&[CharId]> {
        self.names.as_deref().map(Vec::as_slice)
    }
}

impl<T> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Vector {
            data: self.data.clone(),
            names: self.names.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.names() {
            None => fmt::Debug::fmt(self.as_slice(), f),
            Some(names) => f
                .debug_struct("Vector")
                .field("data", &self.as_slice())
                .field("names", &names)
                .finish(),
        }
    }
}
