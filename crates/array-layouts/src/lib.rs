//! array-layouts: flat, rectangular and jagged array containers.
//!
//! The `math` module holds the containers (`Array1`, `Array2`,
//! `RaggedArray`) with checked and end-relative indexing. `demo` walks
//! through the four demonstrations the `array-layouts` binary prints, and
//! `config` describes their inputs.
pub mod config;
pub mod demo;
pub mod error;
pub mod math;
