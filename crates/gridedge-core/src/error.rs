//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction.
///
/// Every variant describes invalid input: the grid is rejected before any
/// edge is computed, and no partial output exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has zero rows or zero columns.
    EmptyGrid {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns supplied.
        cols: usize,
    },
    /// A row of jagged input does not have the width of the first row.
    RaggedRows {
        /// Zero-based index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A flat value buffer does not hold exactly `rows * cols` values.
    ShapeMismatch {
        /// Declared number of rows.
        rows: usize,
        /// Declared number of columns.
        cols: usize,
        /// Length of the supplied buffer.
        len: usize,
    },
    /// The edge table for this shape (`rows * cols * 8` records) cannot be
    /// indexed by `usize`.
    DimensionTooLarge {
        /// Declared number of rows.
        rows: usize,
        /// Declared number of columns.
        cols: usize,
    },
}

impl GridError {
    /// Always `true`: the only failure mode of the conversion is invalid
    /// input.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => write!(
                f,
                "invalid input: grid must have at least one cell, got {rows}x{cols}"
            ),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid input: row {row} has {found} columns, expected {expected}"
            ),
            Self::ShapeMismatch { rows, cols, len } => write!(
                f,
                "invalid input: {rows}x{cols} grid needs {} values, got {len}",
                rows.saturating_mul(*cols)
            ),
            Self::DimensionTooLarge { rows, cols } => {
                write!(f, "invalid input: {rows}x{cols} grid is too large to index")
            }
        }
    }
}

impl Error for GridError {}
