//!
//! # Grids
//!
//! Every raster produced by the engine (the boundary mask, the distance field and the region labels) is a dense
//! row-major grid with the same dimensions as the image being generated. `Grid<T>` is the shared storage for all
//! of these, and provides the windowing operation used to cut the per-tile data out of the full-resolution grids.
//!

mod grid;

pub use grid::*;
