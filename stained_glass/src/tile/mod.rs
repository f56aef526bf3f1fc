//!
//! # Tiles
//!
//! Images that are larger than a single rendering surface can safely hold are rendered as a grid of tiles. Every
//! tile is rendered independently using global coordinates (only the label and distance data are cut down to the
//! tile's window), and the results are then copied into a single full-resolution image.
//!

mod tile_grid;
mod surface_limits;
mod tile_compositor;

pub use tile_grid::*;
pub use surface_limits::*;
pub use tile_compositor::*;
