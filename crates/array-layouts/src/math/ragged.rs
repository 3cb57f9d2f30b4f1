use std::slice::Iter;

use crate::error::IndexError;
use crate::math::vector::Array1;

/// Sequence of independently sized rows. Each row is owned by value, so no
/// two rows need to agree on length.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RaggedArray<T> {
    rows: Vec<Array1<T>>,
}

impl<T> RaggedArray<T> {
    /// `count` rows, each empty until replaced with [`RaggedArray::set_row`].
    pub fn with_rows(count: usize) -> Self {
        let mut rows = Vec::with_capacity(count);
        rows.resize_with(count, || Array1::from_vec(Vec::new()));
        Self { rows }
    }

    pub fn from_rows(rows: Vec<Array1<T>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_lengths(&self) -> Vec<usize> {
        self.rows.iter().map(Array1::len).collect()
    }

    pub fn rows(&self) -> Iter<'_, Array1<T>> {
        self.rows.iter()
    }

    pub fn row(&self, row: usize) -> Result<&Array1<T>, IndexError> {
        self.rows.get(row).ok_or(IndexError::RaggedOutOfRange {
            row,
            col: 0,
            row_len: None,
        })
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut Array1<T>, IndexError> {
        self.rows.get_mut(row).ok_or(IndexError::RaggedOutOfRange {
            row,
            col: 0,
            row_len: None,
        })
    }

    /// Replace row `row`, returning the previous one.
    pub fn set_row(&mut self, row: usize, values: Array1<T>) -> Result<Array1<T>, IndexError> {
        let slot = self.row_mut(row)?;
        Ok(std::mem::replace(slot, values))
    }

    pub fn get(&self, (row, col): (usize, usize)) -> Result<&T, IndexError> {
        let cells = self.row(row)?;
        cells.get(col).map_err(|_| IndexError::RaggedOutOfRange {
            row,
            col,
            row_len: Some(cells.len()),
        })
    }

    pub fn get_mut(&mut self, (row, col): (usize, usize)) -> Result<&mut T, IndexError> {
        let cells = self.row_mut(row)?;
        let row_len = cells.len();
        cells.get_mut(col).map_err(|_| IndexError::RaggedOutOfRange {
            row,
            col,
            row_len: Some(row_len),
        })
    }
}
