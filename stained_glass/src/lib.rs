//!
//! # flo_stained_glass
//!
//! Generates 'stained-glass' images: a few lines and circles are drawn across a canvas, the closed regions between
//! them are found and coloured, and the pixels of each region are shaded according to how close they are to the
//! leading (the strokes that separate the regions).
//!
//! The data flows through the crate in this order:
//!
//! ```text
//! ShapeSet -> rasterize_boundaries() -> BoundaryMask -> distance_transform() -> segment_regions()
//!          -> RegionShader (per tile) -> TileCompositor -> RgbaImage (-> PNG)
//! ```
//!
//! `StainedGlassRenderer` runs the whole pipeline.
//!

mod error;

/// Dense row-major grids shared by the masks, distance fields and label maps
pub mod grid;

/// Extracting the boundary mask from rasterized strokes
pub mod boundary;

/// Exact Euclidean distance transform
pub mod distance;

/// Region segmentation, colouring and edge shading
pub mod region;

/// Line and circle primitives, and the rasterizer that turns them into boundary strokes
pub mod shapes;

/// Splitting large images into tiles and compositing them back together
pub mod tile;

/// Strategies for shading the regions of an image
pub mod shader;

/// Generation of complete images
pub mod render;

/// Settings for the generator
pub mod config;

pub use error::*;
pub use config::*;
pub use render::{StainedGlassRenderer, GlassRender, RgbaImage};
