//! Reusable fixture grids.
//!
//! - [`single_cell`]: `[[5]]`, every direction missing.
//! - [`two_by_two`]: `[[1, 2], [3, 4]]`, three neighbours per cell.
//! - [`single_row`] / [`single_column`]: degenerate strips.
//! - [`ramp`]: cell `i` holds `i + 1`, so a weight names its own cell.
//! - [`with_nan_holes`]: a ramp with `NaN` on the main diagonal.

use gridedge_core::Grid;

pub fn single_cell() -> Grid {
    Grid::new(1, 1, vec![5.0]).expect("1x1 grid is valid")
}

pub fn two_by_two() -> Grid {
    Grid::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).expect("2x2 grid is valid")
}

/// A `1 x len` grid holding `1..=len`.
pub fn single_row(len: usize) -> Grid {
    ramp(1, len)
}

/// A `len x 1` grid holding `1..=len`.
pub fn single_column(len: usize) -> Grid {
    ramp(len, 1)
}

/// A `rows x cols` grid where the cell with zero-based index `i` holds
/// `i + 1`, its 1-based label.
pub fn ramp(rows: usize, cols: usize) -> Grid {
    let values = (1..=rows * cols).map(|v| v as f64).collect();
    Grid::new(rows, cols, values).expect("ramp dimensions must be non-zero")
}

/// A [`ramp`] with `NaN` wherever `row == col`.
pub fn with_nan_holes(rows: usize, cols: usize) -> Grid {
    let values = (0..rows * cols)
        .map(|i| {
            if i / cols == i % cols {
                f64::NAN
            } else {
                (i + 1) as f64
            }
        })
        .collect();
    Grid::new(rows, cols, values).expect("dimensions must be non-zero")
}
