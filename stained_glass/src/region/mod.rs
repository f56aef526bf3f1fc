//!
//! # Regions
//!
//! The strokes in a boundary mask divide the image into a set of closed regions (the 'panes' of the stained glass).
//! Segmentation finds every maximal 4-connected set of non-boundary pixels using a span-based flood fill, numbering
//! the regions in the order that a left-to-right, top-to-bottom scan first reaches them.
//!
//! Each region is given a colour from a palette that steps around the hue circle by the golden ratio, and the
//! pixels are shaded using the distance field so that they change colour as they approach the leading.
//!

mod hsb;
mod region_palette;
mod edge_shading;
mod region_labels;
mod span_fill;
mod segmentation;

pub use hsb::*;
pub use region_palette::*;
pub use edge_shading::*;
pub use region_labels::*;
pub use span_fill::*;
pub use segmentation::*;
