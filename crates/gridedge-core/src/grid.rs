//! The dense raster [`Grid`].

use crate::error::GridError;

/// Number of king-move neighbour slots per cell (and edge records per cell).
pub const KING_DEGREE: usize = 8;

/// A dense, rectangular raster of `f64` cell values.
///
/// Values are stored row-major: the cell at `(row, col)` has linear index
/// `row * cols + col`. A `Grid` always has at least one row and one
/// column, and its edge table (`len() * 8` records) is indexable by
/// `usize`. Every constructor enforces this, so code holding a `Grid` never
/// re-validates its shape.
///
/// `NaN` is an ordinary cell value, not a reserved sentinel.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    values: Vec<f64>,
}

impl Grid {
    /// Build a grid from row-major `values`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if the edge table would overflow
    /// `usize`, or `Err(GridError::ShapeMismatch)` if `values.len()` is not
    /// `rows * cols`.
    pub fn new(rows: usize, cols: usize, values: Vec<f64>) -> Result<Self, GridError> {
        let len = Self::check_shape(rows, cols)?;
        if values.len() != len {
            return Err(rejected(GridError::ShapeMismatch {
                rows,
                cols,
                len: values.len(),
            }));
        }
        Ok(Self { rows, cols, values })
    }

    /// Build a grid from a slice of rows.
    ///
    /// Every row must have the width of the first one; the first row that
    /// does not is reported as `Err(GridError::RaggedRows)`.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        for (row, values) in rows.iter().enumerate() {
            let found = values.as_ref().len();
            if found != cols {
                return Err(rejected(GridError::RaggedRows {
                    row,
                    expected: cols,
                    found,
                }));
            }
        }
        let len = Self::check_shape(rows.len(), cols)?;
        let mut values = Vec::with_capacity(len);
        for row in rows {
            values.extend_from_slice(row.as_ref());
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            values,
        })
    }

    /// Build a grid from column-major `values`, the storage order used by
    /// most numeric matrix hosts.
    pub fn from_column_major(
        rows: usize,
        cols: usize,
        values: Vec<f64>,
    ) -> Result<Self, GridError> {
        let len = Self::check_shape(rows, cols)?;
        if values.len() != len {
            return Err(rejected(GridError::ShapeMismatch {
                rows,
                cols,
                len: values.len(),
            }));
        }
        let mut row_major = Vec::with_capacity(len);
        for r in 0..rows {
            for c in 0..cols {
                row_major.push(values[c * rows + r]);
            }
        }
        Ok(Self {
            rows,
            cols,
            values: row_major,
        })
    }

    /// Build a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f64) -> Result<Self, GridError> {
        let len = Self::check_shape(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            values: vec![value; len],
        })
    }

    /// Validate a `rows x cols` shape and return its cell count.
    ///
    /// This is the check every constructor runs; topology types built
    /// without a backing grid use it too.
    pub fn check_shape(rows: usize, cols: usize) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(rejected(GridError::EmptyGrid { rows, cols }));
        }
        rows.checked_mul(cols)
            .filter(|n| n.checked_mul(KING_DEGREE).is_some())
            .ok_or_else(|| rejected(GridError::DimensionTooLarge { rows, cols }))
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (the row stride of the linear index).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All cell values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of the cell at linear index `index`.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Value of the cell at `(row, col)`, or `None` if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.value(row * self.cols + col)
    }

    /// The cells of row `row`.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let start = row.checked_mul(self.cols)?;
        self.values.get(start..start.checked_add(self.cols)?)
    }
}

fn rejected(err: GridError) -> GridError {
    log::debug!("rejected grid input: {err}");
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_row_major_indexing() {
        let g = Grid::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g.get(0, 2), Some(3.0));
        assert_eq!(g.get(1, 0), Some(4.0));
        assert_eq!(g.value(5), Some(6.0));
        assert_eq!(g.row(1), Some(&[4.0, 5.0, 6.0][..]));
    }

    #[test]
    fn new_zero_rows_returns_error() {
        assert_eq!(
            Grid::new(0, 5, vec![]),
            Err(GridError::EmptyGrid { rows: 0, cols: 5 })
        );
    }

    #[test]
    fn new_zero_cols_returns_error() {
        assert_eq!(
            Grid::new(3, 0, vec![]),
            Err(GridError::EmptyGrid { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn new_wrong_len_returns_error() {
        assert_eq!(
            Grid::new(2, 2, vec![1.0, 2.0, 3.0]),
            Err(GridError::ShapeMismatch {
                rows: 2,
                cols: 2,
                len: 3
            })
        );
    }

    #[test]
    fn new_rejects_shapes_whose_edge_table_overflows() {
        let big = usize::MAX / 4;
        assert!(matches!(
            Grid::filled(big, 1, 0.0),
            Err(GridError::DimensionTooLarge { .. })
        ));
        assert!(matches!(
            Grid::new(usize::MAX, 2, vec![]),
            Err(GridError::DimensionTooLarge { .. })
        ));
    }

    #[test]
    fn from_rows_rectangular() {
        let g = Grid::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(g.values(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn from_rows_ragged_returns_error() {
        let rows = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0]];
        assert_eq!(
            Grid::from_rows(&rows),
            Err(GridError::RaggedRows {
                row: 2,
                expected: 3,
                found: 1
            })
        );
    }

    #[test]
    fn from_rows_empty_returns_error() {
        let none: Vec<Vec<f64>> = vec![];
        assert_eq!(
            Grid::from_rows(&none),
            Err(GridError::EmptyGrid { rows: 0, cols: 0 })
        );
        let blank: Vec<Vec<f64>> = vec![vec![], vec![]];
        assert_eq!(
            Grid::from_rows(&blank),
            Err(GridError::EmptyGrid { rows: 2, cols: 0 })
        );
    }

    #[test]
    fn from_column_major_matches_row_major() {
        // [[1, 2, 3],
        //  [4, 5, 6]]
        let cm = Grid::from_column_major(2, 3, vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
        let rm = Grid::new(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(cm, rm);
    }

    #[test]
    fn nan_is_an_ordinary_value() {
        let g = Grid::new(1, 2, vec![f64::NAN, 1.0]).unwrap();
        assert!(g.value(0).unwrap().is_nan());
    }

    // ── Accessor tests ──────────────────────────────────────────

    #[test]
    fn get_out_of_bounds_is_none() {
        let g = Grid::filled(2, 2, 0.5).unwrap();
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 2), None);
        assert_eq!(g.value(4), None);
        assert_eq!(g.row(2), None);
        assert!(!g.is_empty());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn get_agrees_with_linear_index(rows in 1usize..12, cols in 1usize..12) {
            let values: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
            let g = Grid::new(rows, cols, values).unwrap();
            for r in 0..rows {
                for c in 0..cols {
                    prop_assert_eq!(g.get(r, c), Some((r * cols + c) as f64));
                }
            }
        }

        #[test]
        fn column_major_transposes(rows in 1usize..8, cols in 1usize..8) {
            let cm: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
            let g = Grid::from_column_major(rows, cols, cm).unwrap();
            for r in 0..rows {
                for c in 0..cols {
                    prop_assert_eq!(g.get(r, c), Some((c * rows + r) as f64));
                }
            }
        }
    }
}
