use std::error::Error;
use std::fmt;

/// Bounds failure raised by the containers in [`crate::math`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Forward index past the end of a flat sequence.
    OutOfRange { index: usize, len: usize },
    /// End-relative offset of zero or larger than the sequence.
    FromEndOutOfRange { offset: usize, len: usize },
    /// Suffix longer than the sequence it is taken from.
    SuffixTooLong { requested: usize, len: usize },
    /// Cell outside a rectangular grid of the given `(rows, cols)` shape.
    GridOutOfRange {
        row: usize,
        col: usize,
        shape: (usize, usize),
    },
    /// Cell outside a jagged grid; `row_len` is `None` when the row itself
    /// does not exist.
    RaggedOutOfRange {
        row: usize,
        col: usize,
        row_len: Option<usize>,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IndexError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for sequence of length {}", index, len)
            }
            IndexError::FromEndOutOfRange { offset, len } => write!(
                f,
                "offset ^{} out of range for sequence of length {}",
                offset, len
            ),
            IndexError::SuffixTooLong { requested, len } => write!(
                f,
                "suffix of {} elements requested from sequence of length {}",
                requested, len
            ),
            IndexError::GridOutOfRange { row, col, shape } => write!(
                f,
                "cell ({}, {}) out of range for grid of shape ({}, {})",
                row, col, shape.0, shape.1
            ),
            IndexError::RaggedOutOfRange {
                row,
                col,
                row_len: Some(row_len),
            } => write!(
                f,
                "column {} out of range for row {} of length {}",
                col, row, row_len
            ),
            IndexError::RaggedOutOfRange {
                row, row_len: None, ..
            } => write!(f, "row {} does not exist", row),
        }
    }
}

impl Error for IndexError {}
