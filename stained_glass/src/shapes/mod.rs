//!
//! # Shapes
//!
//! Stained-glass images are generated from a small set of straight lines and circles. The shapes are described in
//! normalized coordinates (0..1 across the canvas) so the same shape set can be rasterized at any output size, or
//! evaluated for any tile of a larger image without changing its coordinates.
//!

mod shape_set;
mod stroke_distance;
mod rasterize;

pub use shape_set::*;
pub use stroke_distance::*;
pub use rasterize::*;
