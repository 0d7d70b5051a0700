//! gridedge: turn a 2D raster into a graph edge list.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridedge sub-crates. For most users, adding `gridedge` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gridedge::prelude::*;
//!
//! // A 2x3 elevation raster.
//! let grid = Grid::from_rows(&[[10.0, 12.0, 15.0], [11.0, 14.0, 19.0]]).unwrap();
//! let table = build_edge_list(&grid);
//!
//! // Eight records per cell, 1-based labels, row-major cell order.
//! assert_eq!(table.len(), 6 * 8);
//!
//! // The centre-top cell (label 2) sees label 6 to its bottom-right.
//! let rec = table.block(1).unwrap()[Direction::BottomRight.slot()];
//! assert_eq!((rec.from, rec.to, rec.weight), (2, Some(6), Some(19.0)));
//!
//! // Directions that leave the raster are missing, not NaN.
//! let rec = table.block(1).unwrap()[Direction::Top.slot()];
//! assert_eq!((rec.to, rec.weight), (None, None));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridedge-core` | `Grid`, `GridError` |
//! | [`space`] | `gridedge-space` | `Direction`, `King8` topology |
//! | [`edgelist`] | `gridedge-edgelist` | Edge table building and views |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Raster grid and error types (`gridedge-core`).
pub use gridedge_core as types;

/// King-move topology (`gridedge-space`).
///
/// [`space::Direction`] fixes the order of a cell's eight records;
/// [`space::King8`] resolves neighbours with absorbing boundaries.
pub use gridedge_space as space;

/// Edge-list construction (`gridedge-edgelist`).
///
/// [`edgelist::build_edge_list`] and [`edgelist::EdgeTable`] are also
/// available in the [`prelude`].
pub use gridedge_edgelist as edgelist;

/// Common imports for typical gridedge usage.
///
/// ```rust
/// use gridedge::prelude::*;
/// ```
pub mod prelude {
    // Input
    pub use gridedge_core::{Grid, GridError};

    // Topology
    pub use gridedge_space::{Direction, King8};

    // Output
    pub use gridedge_edgelist::{
        build_edge_list, build_edge_list_with, edge_list_from_rows, EdgeColumns, EdgeListConfig,
        EdgeRecord, EdgeTable, IndexBase,
    };
}
