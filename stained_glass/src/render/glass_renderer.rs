use super::generation_guard::*;
use super::rgba_image::*;

use crate::boundary::*;
use crate::config::*;
use crate::distance::*;
use crate::error::*;
use crate::region::*;
use crate::shader::*;
use crate::shapes::*;
use crate::tile::*;

use std::sync::*;

///
/// The result of generating a stained-glass image
///
#[derive(Clone, Debug)]
pub struct GlassRender {
    /// The final, full-size image
    pub image: RgbaImage,

    /// The number of regions the shapes divided the image into
    pub region_count: usize,

    /// The number of tiles that were rendered to make the image (1 if it was rendered in one go)
    pub tile_count: usize,

    /// The strategy used to shade the regions
    pub shader: ShaderKind,

    /// Set if the shader could not use all of the shapes
    pub truncation: Option<ShapeTruncation>,
}

///
/// Generates stained-glass images from sets of shapes
///
/// Generation runs through these steps: the shapes are rasterized, the boundary mask is extracted, the distance
/// field is computed (if the shader needs it), the regions are labelled and coloured, and then the image is shaded
/// either in one go or a tile at a time before being composited into the final image.
///
pub struct StainedGlassRenderer {
    config:     GlassConfig,
    context:    Option<Arc<dyn ShaderContext>>,
    shader:     Box<dyn RegionShader>,
    guard:      Arc<GenerationGuard>,
}

impl StainedGlassRenderer {
    ///
    /// Creates a renderer, choosing the shader based on whether or not a shader context is available
    ///
    pub fn new(config: GlassConfig, context: Option<Arc<dyn ShaderContext>>) -> Self {
        let shader = select_region_shader(context.clone());

        Self::with_shader(config, context, shader)
    }

    ///
    /// Creates a renderer that uses a specific shader
    ///
    /// Renderers share the process-wide generation guard, so only one of them can be generating an image at any
    /// one time.
    ///
    pub fn with_shader(config: GlassConfig, context: Option<Arc<dyn ShaderContext>>, shader: Box<dyn RegionShader>) -> Self {
        StainedGlassRenderer {
            config:     config,
            context:    context,
            shader:     shader,
            guard:      GenerationGuard::process_wide(),
        }
    }

    ///
    /// Replaces the generation guard used by this renderer (`Arc::new(GenerationGuard::new())` gives the renderer a
    /// guard of its own that doesn't block other renderers)
    ///
    pub fn with_generation_guard(mut self, guard: Arc<GenerationGuard>) -> Self {
        self.guard = guard;
        self
    }

    /// The configuration used by this renderer
    #[inline] pub fn config(&self) -> &GlassConfig { &self.config }

    /// Replaces the configuration used by this renderer
    #[inline] pub fn set_config(&mut self, config: GlassConfig) { self.config = config; }

    /// The shading strategy used by this renderer
    #[inline] pub fn shader_kind(&self) -> ShaderKind { self.shader.kind() }

    /// The guard that stops more than one generation from running at once
    #[inline] pub fn generation_guard(&self) -> &Arc<GenerationGuard> { &self.guard }

    ///
    /// Renders a set of shapes at the specified size, tiling the image if it's too large for the shader context
    ///
    /// `preview_scale` multiplies the stroke weights and the shading distances.
    ///
    pub fn render(&mut self, shapes: &ShapeSet, width: usize, height: usize, preview_scale: f64) -> Result<GlassRender> {
        let max_tile_size   = self.config.max_tile_size;
        let context         = self.context.as_deref();

        let tile_size = if needs_tiled_rendering(width, height, context, max_tile_size) {
            Some(usable_surface_dimension(context, max_tile_size).unwrap_or(max_tile_size))
        } else {
            None
        };

        self.generate(shapes, width, height, preview_scale, tile_size)
    }

    ///
    /// Renders a set of shapes as a grid of tiles no larger than `max_tile_size` pixels across
    ///
    pub fn render_with_tile_size(&mut self, shapes: &ShapeSet, width: usize, height: usize, preview_scale: f64, max_tile_size: usize) -> Result<GlassRender> {
        self.generate(shapes, width, height, preview_scale, Some(max_tile_size))
    }

    ///
    /// Runs a generation from start to finish
    ///
    fn generate(&mut self, shapes: &ShapeSet, width: usize, height: usize, preview_scale: f64, tile_size: Option<usize>) -> Result<GlassRender> {
        let guard       = Arc::clone(&self.guard);
        let _ticket     = guard.begin()?;

        // Boundary mask from the rasterized strokes
        let strokes     = rasterize_boundaries(shapes, width, height, preview_scale);
        let mask        = BoundaryMask::from_rgba(width, height, strokes.as_bytes(), self.config.boundary_threshold)?;

        // Distance field and regions
        let distance    = if self.shader.needs_distance_field() { Some(distance_transform(&mask)) } else { None };
        let labels      = segment_regions(&mask)?;
        let colors      = RegionColorTable::generate(&self.config.palette, labels.region_count());

        // Only shaders that ran during this generation can report truncation
        let mut truncation = None;

        let (image, tile_count) = match tile_size {
            None            => {
                let data    = RegionData { labels: &labels, colors: &colors, distance: distance.as_ref() };
                let image   = self.shader.render(&data, &self.config, shapes, preview_scale, None)?;
                truncation  = self.shader.last_truncation();

                (image, 1)
            }

            Some(tile_size) => {
                let grid            = calculate_tile_grid(width, height, tile_size)?;
                let mut compositor  = TileCompositor::new(width, height);

                log::debug!("Rendering {}x{} image as {} tiles ({}x{})", width, height, grid.len(), grid.columns, grid.rows);

                for tile in grid.iter() {
                    let tile_labels     = labels.crop(tile.x, tile.y, tile.width, tile.height)?;
                    let tile_distance   = distance.as_ref()
                        .map(|distance| distance.crop(tile.x, tile.y, tile.width, tile.height))
                        .transpose()?;

                    let data            = RegionData { labels: &tile_labels, colors: &colors, distance: tile_distance.as_ref() };
                    let tile_config     = TileConfig::for_tile(&grid, tile);
                    let tile_image      = self.shader.render(&data, &self.config, shapes, preview_scale, Some(&tile_config))?;
                    truncation          = truncation.or(self.shader.last_truncation());

                    compositor.draw_tile(tile, &tile_image)?;
                }

                (compositor.finish(), grid.len())
            }
        };

        if let Some(truncation) = truncation {
            log::warn!("Shader capacity exceeded: dropped {} of {} lines and {} of {} circles",
                truncation.lines_dropped, truncation.lines_supplied, truncation.circles_dropped, truncation.circles_supplied);
        }

        Ok(GlassRender {
            image:          image,
            region_count:   labels.region_count(),
            tile_count:     tile_count,
            shader:         self.shader.kind(),
            truncation:     truncation,
        })
    }
}
