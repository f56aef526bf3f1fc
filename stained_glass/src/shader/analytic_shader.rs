use super::glass_noise::*;
use super::region_shader::*;
use super::shader_context::*;
use super::shader_uniforms::*;
use super::tile_config::*;

use crate::config::*;
use crate::error::*;
use crate::region::*;
use crate::render::*;
use crate::shapes::*;

use std::sync::*;

///
/// Shades regions by evaluating the distance to the line and circle primitives for every pixel
///
/// The shapes are packed into fixed-size uniform arrays, so no distance field is needed. Pixels on a stroke are
/// drawn in the stroke's colour. Region pixels get the edge shading plus a glow towards the middle of each pane
/// and some noise, both evaluated in global coordinates.
///
pub struct AnalyticShader {
    /// The context that runs the fragment program
    context: Arc<dyn ShaderContext>,

    /// The surface from the last render (kept until a render with a different size is requested)
    surface: Option<RgbaImage>,

    /// Shapes that didn't fit in the uniforms during the last render
    last_truncation: Option<ShapeTruncation>,
}

impl AnalyticShader {
    ///
    /// Creates an analytic shader that renders using a shader context
    ///
    /// Returns `NoGpuContext` if there's no context: callers should fall back to the `DistanceFieldShader`.
    ///
    pub fn with_context(context: Option<Arc<dyn ShaderContext>>) -> Result<Self> {
        let context = context.ok_or(GlassError::NoGpuContext)?;

        Ok(AnalyticShader {
            context:            context,
            surface:            None,
            last_truncation:    None,
        })
    }

    ///
    /// Returns the render surface, creating a new one if the size has changed
    ///
    fn surface_for_size(&mut self, width: usize, height: usize) -> &mut RgbaImage {
        let needs_new_surface = match &self.surface {
            Some(surface)   => surface.width() != width || surface.height() != height,
            None            => true,
        };

        if needs_new_surface {
            log::trace!("Creating {}x{} shader surface", width, height);
        }

        let surface = self.surface.take().filter(|_| !needs_new_surface).unwrap_or_else(|| RgbaImage::new(width, height));
        self.surface.get_or_insert(surface)
    }
}

///
/// Works out the colour of a single pixel
///
fn shade_fragment(data: &RegionData<'_>, config: &GlassConfig, uniforms: &ShaderUniforms, tile: &TileConfig, preview_scale: f64, x: usize, y: usize) -> [u8; 4] {
    let (global_x, global_y)    = tile.global_pixel_center(x, y);
    let nearest                 = uniforms.nearest_stroke(global_x, global_y);

    // Pixels on a stroke are leading
    if let Some((distance, stroke_color)) = nearest {
        if distance <= 0.0 {
            return stroke_color;
        }
    }

    let region = match data.labels.region_at(x, y) {
        Some(region)    => region,
        None            => { return config.leading_color; }
    };

    let distance        = nearest.map(|(distance, _)| distance).unwrap_or(f64::INFINITY);
    let base_color      = data.region_color(region, &config.palette);
    let shaded          = config.edge.shade(base_color, distance * distance, preview_scale);

    // Glow brightens the pane as it gets further from the leading
    let glow_distance   = config.edge.falloff * preview_scale * 2.0;
    let glow_amount     = if glow_distance > 0.0 { (distance / glow_distance).min(1.0) } else { 1.0 };
    let brightness      = shaded.brightness + (1.0 - shaded.brightness) * config.glow.glow * glow_amount;

    // Noise imitates the uneven surface of the glass
    let noise           = glass_noise(tile.offset_x + x, tile.offset_y + y, config.glow.noise_seed);
    let brightness      = brightness * (1.0 + noise * config.glow.noise);

    let [r, g, b]       = Hsb::new(shaded.hue, shaded.saturation, brightness).to_rgb();
    [r, g, b, config.region_alpha]
}

impl RegionShader for AnalyticShader {
    fn kind(&self) -> ShaderKind { ShaderKind::Analytic }

    fn needs_distance_field(&self) -> bool { false }

    fn render(&mut self, data: &RegionData<'_>, config: &GlassConfig, shapes: &ShapeSet, preview_scale: f64, tile: Option<&TileConfig>) -> Result<RgbaImage> {
        let width       = data.labels.width();
        let height      = data.labels.height();
        let tile        = tile.copied().unwrap_or_else(|| TileConfig::full_image(width, height));
        let uniforms    = ShaderUniforms::pack(shapes, &config.shader_capacity, &tile, preview_scale);

        self.last_truncation = uniforms.truncation;

        let context     = Arc::clone(&self.context);
        let surface     = self.surface_for_size(width, height);

        context.run_fragments(surface, &|x, y| shade_fragment(data, config, &uniforms, &tile, preview_scale, x, y));

        Ok(surface.clone())
    }

    fn last_truncation(&self) -> Option<ShapeTruncation> {
        self.last_truncation
    }
}
