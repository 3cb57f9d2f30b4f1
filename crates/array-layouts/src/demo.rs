//! The four demonstrations, in the order they are printed.
//!
//! Each `fill_*`/lookup function builds the value a step reports and is
//! usable on its own; [`run`] writes all of them to an output stream.
use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::Write;

use crate::config::DemoConfig;
use crate::error::IndexError;
use crate::math::{Array1, Array2, Axis, RaggedArray};

pub fn last_element(numbers: &Array1<i32>, offset: usize) -> Result<i32, IndexError> {
    numbers.from_end(offset).copied()
}

pub fn suffix_slice(numbers: &Array1<i32>, count: usize) -> Result<Array1<i32>, IndexError> {
    numbers.suffix(count)
}

/// `rows x cols` grid where every cell in row `i` holds `i`. Fails with a
/// `ShapeError` when the cell count does not fit in `usize`.
pub fn fill_fixed_grid(rows: usize, cols: usize) -> Result<Array2<i32>> {
    let mut grid = Array2::zeros(rows, cols)
        .with_context(|| format!("Cannot allocate a {}x{} grid", rows, cols))?;
    for i in 0..grid.len_of(Axis::Row) {
        for j in 0..grid.len_of(Axis::Column) {
            *grid.get_mut(i, j)? = i as i32;
        }
    }
    Ok(grid)
}

/// `rows` rows of `row_len` cells where cell `(i, j)` holds `i + j + 1`.
pub fn fill_ragged_grid(rows: usize, row_len: usize) -> Result<RaggedArray<i32>, IndexError> {
    let mut grid = RaggedArray::with_rows(rows);
    for i in 0..grid.len() {
        grid.set_row(i, Array1::zeros(row_len))?;
        for j in 0..grid.row(i)?.len() {
            *grid.get_mut((i, j))? = (i + j + 1) as i32;
        }
    }
    Ok(grid)
}

/// One grid line: every cell followed by a space, then a line break.
fn write_cells<'a, W, T, I>(out: &mut W, cells: I) -> std::io::Result<()>
where
    W: Write,
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for cell in cells {
        write!(out, "{} ", cell)?;
    }
    writeln!(out)
}

pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> Result<()> {
    log::info!("Running array demonstrations over {} numbers", config.numbers.len());
    let numbers = Array1::from_vec(config.numbers.clone());

    let last = last_element(&numbers, config.from_end_offset)
        .context("Last-element access failed")?;
    log::debug!("numbers[^{}] resolved to {}", config.from_end_offset, last);
    writeln!(out, "numbers[^{}]: {}", config.from_end_offset, last)?;

    let tail = suffix_slice(&numbers, config.suffix_len).context("Suffix slice failed")?;
    log::debug!("numbers[^{}..] = {}", config.suffix_len, tail);
    writeln!(out, "numbers[^{}..]:", config.suffix_len)?;
    for value in &tail {
        writeln!(out, "{}", value)?;
    }

    let grid = fill_fixed_grid(config.grid_rows, config.grid_cols)
        .context("Rectangular array fill failed")?;
    log::debug!("Rectangular array shape {:?}", grid.shape());
    writeln!(out, "Rectangular array")?;
    for row in grid.rows() {
        write_cells(out, row)?;
    }

    let jagged = fill_ragged_grid(config.ragged_rows, config.ragged_row_len)
        .context("Jagged array fill failed")?;
    log::debug!("Jagged array row lengths {:?}", jagged.row_lengths());
    writeln!(out, "Jagged array")?;
    for row in jagged.rows() {
        write_cells(out, row)?;
    }

    out.flush()?;
    log::info!("Array demonstrations complete");
    Ok(())
}
