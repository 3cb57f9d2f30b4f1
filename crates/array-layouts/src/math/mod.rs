//! Array containers used by the demonstrations.
//!
//! `Array1` is a flat sequence with end-relative access, `Array2` a
//! rectangular row-major grid and `RaggedArray` a sequence of independently
//! sized rows. Checked accessors return [`crate::error::IndexError`];
//! the `Index` impls panic like slices do.
pub mod matrix;
pub mod ragged;
pub mod vector;

pub use matrix::{Array2, Axis, ShapeError};
pub use ragged::RaggedArray;
pub use vector::Array1;
