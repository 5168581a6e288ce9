//! Shared utilities for the indicator explorer crates.
//!
//! Every crate that reads cells out of a Polars frame goes through these
//! helpers so that nulls, NaN and mixed numeric types are treated the same
//! way in the pipeline, the terminal tables and the exported charts.

pub mod cell;

pub use cell::{cell_number, cell_text, cell_year, format_value, parse_number};
