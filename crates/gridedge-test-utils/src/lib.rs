//! Test utilities for gridedge development.
//!
//! Provides the fixture grids used across the workspace's tests
//! ([`fixtures`]) and [`assert_edge_table_invariants`], which checks every
//! structural guarantee of an edge table against the grid it came from.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use gridedge_core::Grid;
use gridedge_edgelist::EdgeTable;
use gridedge_space::{Direction, King8};
use indexmap::IndexMap;

/// Assert that `table` is the edge table of `grid`.
///
/// Checks, in order: the record count, the per-cell block layout, that a
/// neighbour is missing exactly when its offset leaves the grid, that
/// present weights equal the neighbour's value, and that every present
/// edge has its reverse in the opposite direction.
pub fn assert_edge_table_invariants(grid: &Grid, table: &EdgeTable) {
    let base = table.index_base();
    let space = King8::of(grid);
    assert_eq!(table.shape(), grid.shape(), "table shape");
    assert_eq!(table.len(), grid.len() * Direction::COUNT, "record count");

    let (rows, cols) = grid.shape();
    let mut present: IndexMap<(usize, usize), (Direction, Option<f64>)> = IndexMap::new();
    for (row, (dir, rec)) in table.directed().enumerate() {
        let cell = row / Direction::COUNT;
        assert_eq!(rec.from, base.apply(cell), "row {row}: from");

        let (dr, dc) = dir.offset();
        let nr = (cell / cols) as isize + dr;
        let nc = (cell % cols) as isize + dc;
        let inside = nr >= 0 && nc >= 0 && (nr as usize) < rows && (nc as usize) < cols;
        assert_eq!(
            rec.to.is_some(),
            inside,
            "row {row}: cell {cell} {dir} presence"
        );
        assert_eq!(
            rec.weight.is_some(),
            rec.to.is_some(),
            "row {row}: weight presence must follow to"
        );

        let Some(to) = rec.to else { continue };
        let n = base.strip(to).expect("present `to` is at least the index base");
        assert_eq!(Some(n), space.neighbour(cell, dir), "row {row}: neighbour");
        assert!(
            same_value(rec.weight, grid.value(n)),
            "row {row}: weight {:?} != grid value {:?}",
            rec.weight,
            grid.value(n)
        );
        present.insert((cell, n), (dir, rec.weight));
    }

    for (&(a, b), &(dir, _)) in &present {
        let back = present.get(&(b, a));
        assert!(
            back.is_some_and(|&(back_dir, w)| {
                back_dir == dir.opposite() && same_value(w, grid.value(a))
            }),
            "edge {a} -> {b} ({dir}) has no matching reverse edge"
        );
    }
}

/// Equality that treats two `NaN`s as the same cell value.
fn same_value(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
        (None, None) => true,
        _ => false,
    }
}
