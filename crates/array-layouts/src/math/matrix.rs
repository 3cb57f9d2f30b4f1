use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::error::IndexError;

/// Dimension selector for [`Array2::len_of`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

/// Rectangular grid stored as one contiguous row-major buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(ShapeError {
                rows,
                cols,
                len: Some(data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// Extent along `axis`: number of rows for [`Axis::Row`], row length for
    /// [`Axis::Column`].
    pub fn len_of(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Column => self.cols,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_offset(&self, row: usize, col: usize) -> Result<usize, IndexError> {
        if row >= self.rows || col >= self.cols {
            return Err(IndexError::GridOutOfRange {
                row,
                col,
                shape: self.shape(),
            });
        }
        Ok(self.offset(row, col))
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T, IndexError> {
        let offset = self.checked_offset(row, col)?;
        Ok(&self.data[offset])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, IndexError> {
        let offset = self.checked_offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Rows in order, each as a slice of `ncols()` cells. A grid without
    /// columns still yields `nrows()` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| self.row_slice(row))
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Array2<T>
where
    T: Clone + Zero,
{
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, ShapeError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(ShapeError { rows, cols, len: None })?;
        Ok(Array2 {
            data: vec![T::zero(); len],
            rows,
            cols,
        })
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

#[derive(Debug, Clone)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    /// Buffer length, or `None` when `rows * cols` overflows.
    len: Option<usize>,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.len {
            Some(len) => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                self.rows, self.cols, len
            ),
            None => write!(f, "shape ({}, {}) overflows usize", self.rows, self.cols),
        }
    }
}

impl Error for ShapeError {}
