//! The [`EdgeTable`] produced by a build.

use crate::config::IndexBase;
use crate::record::{EdgeColumns, EdgeRecord};
use gridedge_space::Direction;

/// Ordered edge list of a grid.
///
/// Holds exactly `rows * cols * 8` records. The records of the zero-based
/// cell `i` occupy rows `[i * 8, i * 8 + 8)`, one per
/// [`Direction`] in [`Direction::ALL`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeTable {
    rows: usize,
    cols: usize,
    index_base: IndexBase,
    records: Vec<EdgeRecord>,
}

impl EdgeTable {
    pub(crate) fn from_parts(
        rows: usize,
        cols: usize,
        index_base: IndexBase,
        records: Vec<EdgeRecord>,
    ) -> Self {
        debug_assert_eq!(records.len(), rows * cols * Direction::COUNT);
        Self {
            rows,
            cols,
            index_base,
            records,
        }
    }

    /// `(rows, cols)` of the source grid.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Numbering of the `from` and `to` columns.
    pub fn index_base(&self) -> IndexBase {
        self.index_base
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a built table: every grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in table order.
    pub fn records(&self) -> &[EdgeRecord] {
        &self.records
    }

    /// Iterate over records in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, EdgeRecord> {
        self.records.iter()
    }

    /// Record at table row `row` (zero-based).
    pub fn get(&self, row: usize) -> Option<&EdgeRecord> {
        self.records.get(row)
    }

    /// The eight records of the zero-based cell `cell`.
    pub fn block(&self, cell: usize) -> Option<&[EdgeRecord]> {
        let start = cell.checked_mul(Direction::COUNT)?;
        self.records.get(start..start.checked_add(Direction::COUNT)?)
    }

    /// Direction that table row `row` was produced for.
    pub fn direction_of(&self, row: usize) -> Option<Direction> {
        if row >= self.records.len() {
            return None;
        }
        Direction::from_slot(row % Direction::COUNT)
    }

    /// Records paired with their direction, in table order.
    pub fn directed(&self) -> impl Iterator<Item = (Direction, &EdgeRecord)> + '_ {
        Direction::ALL.into_iter().cycle().zip(self.records.iter())
    }

    /// Records whose neighbour exists.
    pub fn present(&self) -> impl Iterator<Item = &EdgeRecord> + '_ {
        self.records.iter().filter(|r| r.is_present())
    }

    /// Number of records whose neighbour exists.
    pub fn present_count(&self) -> usize {
        self.present().count()
    }

    /// The `from`, `to` and `weight` columns.
    pub fn columns(&self) -> EdgeColumns {
        self.records.iter().copied().collect()
    }

    /// Consume the table, returning its records.
    pub fn into_records(self) -> Vec<EdgeRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a EdgeTable {
    type Item = &'a EdgeRecord;
    type IntoIter = std::slice::Iter<'a, EdgeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
