use super::shader_capacity::*;
use super::tile_config::*;

use crate::shapes::*;

///
/// A line primitive as passed to the analytic shader
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct LineUniform {
    pub start:  [f32; 2],
    pub end:    [f32; 2],
    pub weight: f32,
    pub color:  [f32; 4],
}

///
/// A circle primitive as passed to the analytic shader
///
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct CircleUniform {
    pub center: [f32; 2],
    pub radius: f32,
    pub weight: f32,
    pub color:  [f32; 4],
}

///
/// Reports the shapes that didn't fit in the shader's uniform arrays
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeTruncation {
    pub lines_supplied:     usize,
    pub lines_dropped:      usize,
    pub circles_supplied:   usize,
    pub circles_dropped:    usize,
}

///
/// The uniform values for the analytic shader
///
/// The line and circle arrays always have exactly the length set by the shader capacity: entries beyond
/// `line_count` and `circle_count` are zero-filled padding.
///
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderUniforms {
    pub lines:          Vec<LineUniform>,
    pub line_count:     usize,
    pub circles:        Vec<CircleUniform>,
    pub circle_count:   usize,

    /// Size of the full image in pixels
    pub full_size:      [f32; 2],

    /// Offset of the tile being rendered within the full image
    pub tile_offset:    [f32; 2],

    /// Multiplier applied to the stroke weights
    pub weight_scale:   f32,

    /// Set if some of the shapes didn't fit in the uniform arrays
    pub truncation:     Option<ShapeTruncation>,
}

#[inline]
fn color_uniform(color: [u8; 4]) -> [f32; 4] {
    [color[0] as f32 / 255.0, color[1] as f32 / 255.0, color[2] as f32 / 255.0, color[3] as f32 / 255.0]
}

#[inline]
fn color_from_uniform(color: [f32; 4]) -> [u8; 4] {
    let to_byte = |component: f32| (component * 255.0).round().max(0.0).min(255.0) as u8;
    [to_byte(color[0]), to_byte(color[1]), to_byte(color[2]), to_byte(color[3])]
}

impl ShaderUniforms {
    ///
    /// Packs a set of shapes into uniform arrays of a fixed capacity
    ///
    /// Shapes are kept in order: if there are more shapes than will fit, the ones at the end are dropped and the
    /// `truncation` field describes what was lost.
    ///
    pub fn pack(shapes: &ShapeSet, capacity: &ShaderCapacity, tile: &TileConfig, weight_scale: f64) -> Self {
        let line_count      = shapes.lines.len().min(capacity.max_lines);
        let circle_count    = shapes.circles.len().min(capacity.max_circles);

        let mut lines       = vec![LineUniform::default(); capacity.max_lines];
        let mut circles     = vec![CircleUniform::default(); capacity.max_circles];

        for (uniform, line) in lines.iter_mut().zip(shapes.lines.iter()) {
            *uniform = LineUniform {
                start:  [line.start.0 as f32, line.start.1 as f32],
                end:    [line.end.0 as f32, line.end.1 as f32],
                weight: line.weight as f32,
                color:  color_uniform(line.color),
            };
        }

        for (uniform, circle) in circles.iter_mut().zip(shapes.circles.iter()) {
            *uniform = CircleUniform {
                center: [circle.center.0 as f32, circle.center.1 as f32],
                radius: circle.radius as f32,
                weight: circle.weight as f32,
                color:  color_uniform(circle.color),
            };
        }

        let truncation = if line_count < shapes.lines.len() || circle_count < shapes.circles.len() {
            Some(ShapeTruncation {
                lines_supplied:     shapes.lines.len(),
                lines_dropped:      shapes.lines.len() - line_count,
                circles_supplied:   shapes.circles.len(),
                circles_dropped:    shapes.circles.len() - circle_count,
            })
        } else {
            None
        };

        ShaderUniforms {
            lines:          lines,
            line_count:     line_count,
            circles:        circles,
            circle_count:   circle_count,
            full_size:      [tile.full_width as f32, tile.full_height as f32],
            tile_offset:    [tile.offset_x as f32, tile.offset_y as f32],
            weight_scale:   weight_scale as f32,
            truncation:     truncation,
        }
    }

    /// The lines that are in use
    #[inline] pub fn active_lines(&self) -> &[LineUniform] { &self.lines[0..self.line_count] }

    /// The circles that are in use
    #[inline] pub fn active_circles(&self) -> &[CircleUniform] { &self.circles[0..self.circle_count] }

    ///
    /// Finds the distance from a point in the full image (in pixels) to the outside edge of the nearest stroke
    ///
    /// Returns the distance (0 or less if the point is on a stroke) and the colour of that stroke, or None if there
    /// are no shapes.
    ///
    pub fn nearest_stroke(&self, global_x: f64, global_y: f64) -> Option<(f64, [u8; 4])> {
        let width           = self.full_size[0] as f64;
        let height          = self.full_size[1] as f64;
        let min_dimension   = width.min(height);
        let weight_scale    = self.weight_scale as f64;

        let line_distances = self.active_lines().iter().map(|line| {
            let distance = segment_distance(global_x, global_y,
                line.start[0] as f64 * width, line.start[1] as f64 * height,
                line.end[0] as f64 * width, line.end[1] as f64 * height);

            (distance - line.weight as f64 * weight_scale * 0.5, line.color)
        });

        let circle_distances = self.active_circles().iter().map(|circle| {
            let distance = circle_outline_distance(global_x, global_y,
                circle.center[0] as f64 * width, circle.center[1] as f64 * height,
                circle.radius as f64 * min_dimension);

            (distance - circle.weight as f64 * weight_scale * 0.5, circle.color)
        });

        line_distances.chain(circle_distances)
            .fold(None, |nearest: Option<(f64, [f32; 4])>, (distance, color)| {
                match nearest {
                    Some((nearest_distance, _)) if nearest_distance <= distance => nearest,
                    _                                                           => Some((distance, color)),
                }
            })
            .map(|(distance, color)| (distance, color_from_uniform(color)))
    }
}
