use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};

use num_traits::Zero;

use crate::error::IndexError;

/// Fixed-length flat sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Array1<T> {
    data: Vec<T>,
}

impl<T> Array1<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn shape(&self) -> (usize,) {
        (self.len(),)
    }

    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.data.get(index).ok_or(IndexError::OutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        let len = self.len();
        self.data
            .get_mut(index)
            .ok_or(IndexError::OutOfRange { index, len })
    }

    /// Element `offset` positions from the end, so `from_end(1)` is the last
    /// element. Resolves to `len - offset`; an offset of zero is rejected.
    pub fn from_end(&self, offset: usize) -> Result<&T, IndexError> {
        let len = self.len();
        if offset == 0 || offset > len {
            return Err(IndexError::FromEndOutOfRange { offset, len });
        }
        Ok(&self.data[len - offset])
    }

    /// The last `count` elements, in their original order.
    pub fn suffix(&self, count: usize) -> Result<Array1<T>, IndexError>
    where
        T: Clone,
    {
        let len = self.len();
        if count > len {
            return Err(IndexError::SuffixTooLong {
                requested: count,
                len,
            });
        }
        Ok(Array1::from_vec(self.data[len - count..].to_vec()))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Array1<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Array1::from_vec(vec![T::zero(); len])
    }
}

impl<T> From<Vec<T>> for Array1<T> {
    fn from(value: Vec<T>) -> Self {
        Array1::from_vec(value)
    }
}

impl<T> From<Array1<T>> for Vec<T> {
    fn from(value: Array1<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Array1<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array1::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Array1<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for Array1<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Array1<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Array1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
