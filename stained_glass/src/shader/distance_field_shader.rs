use super::region_shader::*;
use super::tile_config::*;

use crate::config::*;
use crate::error::*;
use crate::render::*;
use crate::shapes::*;

///
/// Shades regions on the CPU, using the precomputed distance field for the edge falloff
///
/// This produces the same pixels as `segment_and_shade()`, so it can be used to render the image a tile at a time.
///
#[derive(Clone, Copy, Debug, Default)]
pub struct DistanceFieldShader;

impl DistanceFieldShader {
    ///
    /// Creates a new CPU region shader
    ///
    pub fn new() -> Self {
        DistanceFieldShader
    }
}

impl RegionShader for DistanceFieldShader {
    fn kind(&self) -> ShaderKind { ShaderKind::DistanceField }

    fn needs_distance_field(&self) -> bool { true }

    fn render(&mut self, data: &RegionData<'_>, config: &GlassConfig, _shapes: &ShapeSet, preview_scale: f64, _tile: Option<&TileConfig>) -> Result<RgbaImage> {
        let distance    = data.distance.ok_or(GlassError::MissingDistanceField)?;
        let labels      = data.labels;

        labels.grid().check_same_size(distance.squared_distances())?;

        let width       = labels.width();
        let height      = labels.height();
        let squared     = distance.squared_distances().cells();
        let mut image   = RgbaImage::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let pixel = match labels.region_at(x, y) {
                    None            => config.leading_color,
                    Some(region)    => {
                        let base_color = data.region_color(region, &config.palette);
                        config.edge.shade_pixel(base_color, squared[y*width + x], preview_scale, config.region_alpha)
                    }
                };

                image.set_pixel(x, y, pixel);
            }
        }

        Ok(image)
    }
}
