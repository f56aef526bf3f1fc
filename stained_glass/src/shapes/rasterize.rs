use super::shape_set::*;
use super::stroke_distance::*;

use crate::render::*;

use itertools::*;

const BACKGROUND: [u8; 4]   = [255, 255, 255, 255];
const STROKE: [u8; 4]       = [0, 0, 0, 255];

///
/// Converts a pixel bounding box into the range of pixel indexes it covers in an image of the specified size
///
#[inline]
fn pixel_range(min: f64, max: f64, size: usize) -> std::ops::Range<usize> {
    let start   = min.floor().max(0.0) as usize;
    let end     = (max.ceil() + 1.0).max(0.0) as usize;

    start.min(size)..end.min(size)
}

///
/// Draws a stroke into an image by testing the centre of every pixel in its bounding box
///
fn draw_stroke(image: &mut RgbaImage, bounds: (f64, f64, f64, f64), stroke_distance: impl Fn(f64, f64) -> f64) {
    let (min_x, min_y, max_x, max_y) = bounds;
    let x_range = pixel_range(min_x, max_x, image.width());
    let y_range = pixel_range(min_y, max_y, image.height());

    for (y, x) in iproduct!(y_range, x_range) {
        if stroke_distance(x as f64 + 0.5, y as f64 + 0.5) <= 0.0 {
            image.set_pixel(x, y, STROKE);
        }
    }
}

///
/// Rasterizes a set of shapes as black strokes on a white background
///
/// A pixel is part of a stroke if its centre lies within half the stroke weight of the line or circle. Stroke
/// weights are multiplied by `weight_scale`.
///
pub fn rasterize_boundaries(shapes: &ShapeSet, width: usize, height: usize, weight_scale: f64) -> RgbaImage {
    let space       = CanvasSpace::new(width, height);
    let mut image   = RgbaImage::filled(width, height, BACKGROUND);

    for line in shapes.lines.iter() {
        draw_stroke(&mut image, line.pixel_bounds(&space, weight_scale), |x, y| line.stroke_distance(&space, x, y, weight_scale));
    }

    for circle in shapes.circles.iter() {
        draw_stroke(&mut image, circle.pixel_bounds(&space, weight_scale), |x, y| circle.stroke_distance(&space, x, y, weight_scale));
    }

    image
}
