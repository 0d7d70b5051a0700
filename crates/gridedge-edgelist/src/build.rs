//! Building an [`EdgeTable`] from a [`Grid`].

use crate::config::EdgeListConfig;
use crate::record::EdgeRecord;
use crate::table::EdgeTable;
use gridedge_core::{Grid, GridError};
use gridedge_space::{Direction, King8};

/// Build the 1-based edge table of `grid`.
///
/// Equivalent to [`build_edge_list_with`] and the default
/// [`EdgeListConfig`].
pub fn build_edge_list(grid: &Grid) -> EdgeTable {
    build_edge_list_with(grid, &EdgeListConfig::default())
}

/// Build the edge table of `grid`.
///
/// Cells are visited in row-major order; each contributes one record per
/// direction of [`Direction::ALL`]. The neighbour and its value are looked
/// up only when the direction stays inside the grid.
pub fn build_edge_list_with(grid: &Grid, config: &EdgeListConfig) -> EdgeTable {
    let space = King8::of(grid);
    let base = config.index_base;
    let values = grid.values();
    log::debug!(
        "building edge list for {}x{} grid ({base})",
        grid.rows(),
        grid.cols()
    );

    let mut records = Vec::with_capacity(grid.len() * Direction::COUNT);
    for cell in 0..grid.len() {
        let from = base.apply(cell);
        for slot in space.neighbour_slots(cell) {
            records.push(match slot {
                Some(n) => EdgeRecord {
                    from,
                    to: Some(base.apply(n)),
                    weight: Some(values[n]),
                },
                None => EdgeRecord {
                    from,
                    to: None,
                    weight: None,
                },
            });
        }
    }

    let table = EdgeTable::from_parts(grid.rows(), grid.cols(), base, records);
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "built edge list: {} records, {} present",
            table.len(),
            table.present_count()
        );
    }
    table
}

/// Validate jagged `rows` and build their 1-based edge table.
///
/// Fails with the grid's construction error before any edge is computed.
pub fn edge_list_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<EdgeTable, GridError> {
    let grid = Grid::from_rows(rows)?;
    Ok(build_edge_list(&grid))
}
