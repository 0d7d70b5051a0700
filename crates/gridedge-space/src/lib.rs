//! Lattice topology for gridedge.
//!
//! This crate defines the king-move neighbourhood used to turn a raster
//! into a graph: the eight [`Direction`]s in their fixed output order, and
//! the [`King8`] topology that resolves a cell's neighbour in each
//! direction with absorbing boundaries.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod king8;

#[cfg(test)]
pub(crate) mod compliance;

pub use direction::Direction;
pub use king8::King8;
