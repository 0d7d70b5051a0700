//! Core types for the gridedge workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! validated raster [`Grid`] that every edge-list build starts from, and
//! the [`GridError`] taxonomy for rejected input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::{Grid, KING_DEGREE};
