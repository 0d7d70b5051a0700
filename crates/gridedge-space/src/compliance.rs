//! King8 compliance test helpers.
//!
//! These functions verify that a lattice satisfies the invariants the edge
//! list relies on. Reused across the shape-specific test cases in
//! `king8.rs`.

use crate::direction::Direction;
use crate::king8::King8;
use indexmap::IndexSet;

/// Assert that `b = neighbour(a, d)` implies `a = neighbour(b, d.opposite())`.
pub fn assert_neighbours_symmetric(space: &King8) {
    for (i, _) in space.cells() {
        for dir in Direction::ALL {
            if let Some(n) = space.neighbour(i, dir) {
                assert_eq!(
                    space.neighbour(n, dir.opposite()),
                    Some(i),
                    "neighbour symmetry violated: {n} is {dir} of {i} but {i} is not {} of {n}",
                    dir.opposite()
                );
            }
        }
    }
}

/// Assert that a neighbour is missing exactly when the offset leaves the
/// lattice.
pub fn assert_missing_iff_out_of_bounds(space: &King8) {
    let rows = space.rows() as isize;
    let cols = space.cols() as isize;
    for (i, (r, c)) in space.cells() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.offset();
            let nr = r as isize + dr;
            let nc = c as isize + dc;
            let inside = (0..rows).contains(&nr) && (0..cols).contains(&nc);
            let got = space.neighbour(i, dir);
            assert_eq!(
                got.is_some(),
                inside,
                "cell {i} ({r},{c}) {dir}: neighbour {got:?}, inside = {inside}"
            );
            if let Some(n) = got {
                assert_eq!(n as isize, nr * cols + nc);
            }
        }
    }
}

/// Assert that the flat-index boundary rules (`i < C`, `i % C == 0`,
/// `(i + 1) % C == 0`, `i >= (R - 1) * C`) give the same neighbours as the
/// row/col resolution.
pub fn assert_linear_rules_agree(space: &King8) {
    let r = space.rows();
    let c = space.cols();
    for (i, _) in space.cells() {
        let first_row = i < c;
        let last_row = i >= (r - 1) * c;
        let first_col = i % c == 0;
        let last_col = (i + 1) % c == 0;
        let expected = [
            (!(first_row || first_col)).then(|| i - c - 1),
            (!first_row).then(|| i - c),
            (!(first_row || last_col)).then(|| i - c + 1),
            (!first_col).then(|| i - 1),
            (!last_col).then(|| i + 1),
            (!(first_col || last_row)).then(|| i + c - 1),
            (!last_row).then(|| i + c),
            (!(last_col || last_row)).then(|| i + c + 1),
        ];
        assert_eq!(
            space.neighbour_slots(i),
            expected,
            "linear-index rules disagree at cell {i} of {r}x{c}"
        );
    }
}

/// Assert that `coord` and `rank` invert each other and enumerate every
/// cell exactly once.
pub fn assert_coords_complete(space: &King8) {
    let coords: IndexSet<(usize, usize)> = space.cells().map(|(_, rc)| rc).collect();
    assert_eq!(
        coords.len(),
        space.cell_count(),
        "cells() has duplicates or gaps"
    );
    for (i, (r, c)) in space.cells() {
        assert_eq!(space.coord(i), Some((r, c)));
        assert_eq!(space.rank(r, c), Some(i));
    }
}

/// Assert that `degree`, `neighbours` and `max_neighbour_degree` agree.
pub fn assert_degree_consistent(space: &King8) {
    let mut max = 0;
    for (i, _) in space.cells() {
        let d = space.degree(i);
        assert_eq!(d, space.neighbours(i).len());
        max = max.max(d);
    }
    assert_eq!(
        max,
        space.max_neighbour_degree(),
        "max_neighbour_degree for {}x{}",
        space.rows(),
        space.cols()
    );
}

/// Run all compliance checks on a lattice.
pub fn run_full_compliance(space: &King8) {
    assert_neighbours_symmetric(space);
    assert_missing_iff_out_of_bounds(space);
    assert_linear_rules_agree(space);
    assert_coords_complete(space);
    assert_degree_consistent(space);
}
