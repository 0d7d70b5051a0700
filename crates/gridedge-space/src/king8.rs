//! 2D square lattice with 8-connected neighbourhood and absorbing edges.

use crate::direction::Direction;
use gridedge_core::{Grid, GridError};
use smallvec::SmallVec;

/// A two-dimensional lattice with king-move (8-connected) adjacency.
///
/// Cells are addressed by their row-major linear index
/// `row * cols + col`. Neighbours include the four cardinal directions
/// plus four diagonals. Boundaries absorb: a direction that leaves
/// `[0, rows) x [0, cols)` has no neighbour, so corners have 3 neighbours
/// and edge cells 5 on grids of at least 2x2.
///
/// Neighbour resolution works on explicit `(row, col)` bounds rather than
/// on modular arithmetic over the linear index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct King8 {
    rows: usize,
    cols: usize,
}

impl King8 {
    /// Create a lattice with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if `rows * cols * 8` overflows.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Grid::check_shape(rows, cols)?;
        Ok(Self { rows, cols })
    }

    /// The lattice underlying an already-validated grid.
    pub fn of(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Always returns `false`: construction rejects empty lattices.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(row, col)` of the cell at linear index `index`.
    pub fn coord(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.cell_count() {
            return None;
        }
        Some((index / self.cols, index % self.cols))
    }

    /// Linear index of `(row, col)`, or `None` if out of bounds.
    pub fn rank(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// The neighbour of `index` in direction `dir`.
    ///
    /// Returns `None` if `index` is not a cell of this lattice or the
    /// direction leaves the lattice.
    pub fn neighbour(&self, index: usize, dir: Direction) -> Option<usize> {
        let (r, c) = self.coord(index)?;
        self.step(r, c, dir)
    }

    /// Neighbour slots of `index` in [`Direction::ALL`] order, `None` where
    /// the direction leaves the lattice.
    ///
    /// An index outside the lattice yields eight `None`s.
    pub fn neighbour_slots(&self, index: usize) -> [Option<usize>; Direction::COUNT] {
        let mut slots = [None; Direction::COUNT];
        if let Some((r, c)) = self.coord(index) {
            for dir in Direction::ALL {
                slots[dir.slot()] = self.step(r, c, dir);
            }
        }
        slots
    }

    /// The neighbours of `index` that exist, in [`Direction::ALL`] order.
    pub fn neighbours(&self, index: usize) -> SmallVec<[usize; 8]> {
        self.neighbour_slots(index).into_iter().flatten().collect()
    }

    /// Number of existing neighbours of `index`.
    pub fn degree(&self, index: usize) -> usize {
        self.neighbour_slots(index).iter().flatten().count()
    }

    /// Largest degree of any cell.
    ///
    /// Along each axis the best-placed cell can move `-1`, `0` or `+1`,
    /// limited to the axis length; the degree drops the `(0, 0)` move.
    pub fn max_neighbour_degree(&self) -> usize {
        let row_moves = self.rows.min(3);
        let col_moves = self.cols.min(3);
        row_moves * col_moves - 1
    }

    /// All cells as `(index, (row, col))` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, (usize, usize))> + '_ {
        (0..self.cell_count()).map(move |i| (i, (i / self.cols, i % self.cols)))
    }

    fn step(&self, r: usize, c: usize, dir: Direction) -> Option<usize> {
        let (dr, dc) = dir.offset();
        let nr = resolve_axis(r, dr, self.rows)?;
        let nc = resolve_axis(c, dc, self.cols)?;
        Some(nr * self.cols + nc)
    }
}

/// Move `val` by `delta` along an axis of length `len`.
/// Returns `None` when the result leaves `[0, len)`.
fn resolve_axis(val: usize, delta: isize, len: usize) -> Option<usize> {
    val.checked_add_signed(delta).filter(|&v| v < len)
}
