use super::shader_uniforms::*;
use super::tile_config::*;

use crate::config::*;
use crate::distance::*;
use crate::error::*;
use crate::region::*;
use crate::render::*;
use crate::shapes::*;

///
/// The region data that a shader reads when rendering an image
///
/// The labels (and distance field, if there is one) cover exactly the pixels being rendered: when rendering a tile
/// they have been cropped to the tile's window.
///
#[derive(Clone, Copy, Debug)]
pub struct RegionData<'a> {
    pub labels:     &'a RegionLabels,
    pub colors:     &'a RegionColorTable,
    pub distance:   Option<&'a DistanceField>,
}

///
/// Identifies the shading strategy used by a region shader
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderKind {
    /// Pixels are shaded on the CPU using a precomputed distance field
    DistanceField,

    /// Pixels are shaded by evaluating the distance to the shape primitives in a fragment program
    Analytic,
}

///
/// A strategy for turning region data into the final shaded pixels of an image
///
pub trait RegionShader {
    ///
    /// The shading strategy that this shader implements
    ///
    fn kind(&self) -> ShaderKind;

    ///
    /// True if this shader reads the `distance` field of the region data (so a distance field must be computed)
    ///
    fn needs_distance_field(&self) -> bool;

    ///
    /// Renders the region data
    ///
    /// The result is the same size as the labels in `data`. `tile` gives the position of the data within the full
    /// image (None if the whole image is being rendered at once), so effects can be evaluated in global coordinates
    /// and give the same result whichever tile a pixel is in.
    ///
    fn render(&mut self, data: &RegionData<'_>, config: &GlassConfig, shapes: &ShapeSet, preview_scale: f64, tile: Option<&TileConfig>) -> Result<RgbaImage>;

    ///
    /// If the last call to `render()` couldn't use every shape, describes the shapes that were dropped
    ///
    fn last_truncation(&self) -> Option<ShapeTruncation> {
        None
    }
}

impl<'a> RegionData<'a> {
    ///
    /// The base colour of a region, falling back to the palette if the table has no entry for it
    ///
    #[inline]
    pub fn region_color(&self, region: usize, palette: &RegionPalette) -> Hsb {
        self.colors.get(region).unwrap_or_else(|| palette.region_color(region))
    }
}
