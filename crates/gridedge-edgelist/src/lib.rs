//! Raster-to-edge-list conversion.
//!
//! [`build_edge_list`] turns a [`Grid`](gridedge_core::Grid) into an
//! [`EdgeTable`]: for every cell, in row-major order, eight
//! `(from, to, weight)` records, one per [`Direction`](gridedge_space::Direction)
//! in fixed order. A direction that leaves the grid has no `to` and no
//! `weight`. `from` and `to` are 1-based unless the
//! [`EdgeListConfig`] says otherwise.
//!
//! ```
//! use gridedge_edgelist::edge_list_from_rows;
//!
//! let table = edge_list_from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(table.len(), 32);
//!
//! // Cell 1's right-hand neighbour is cell 2, weighted by its value.
//! let right = table.records()[4];
//! assert_eq!((right.from, right.to, right.weight), (1, Some(2), Some(2.0)));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod build;
pub mod config;
pub mod record;
pub mod table;

pub use build::{build_edge_list, build_edge_list_with, edge_list_from_rows};
pub use config::{EdgeListConfig, IndexBase};
pub use record::{EdgeColumns, EdgeRecord};
pub use table::EdgeTable;
