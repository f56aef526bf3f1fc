use super::shape_set::*;

///
/// Maps normalized shape coordinates onto the pixels of a full-size image
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSpace {
    pub width:  f64,
    pub height: f64,
}

impl CanvasSpace {
    ///
    /// The canvas space for an image of the specified size
    ///
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        CanvasSpace { width: width as f64, height: height as f64 }
    }

    ///
    /// Converts a normalized point to pixel coordinates
    ///
    #[inline]
    pub fn to_pixels(&self, point: (f64, f64)) -> (f64, f64) {
        (point.0 * self.width, point.1 * self.height)
    }

    ///
    /// Converts a radius (as a fraction of the smaller canvas dimension) to pixels
    ///
    #[inline]
    pub fn radius_to_pixels(&self, radius: f64) -> f64 {
        radius * self.width.min(self.height)
    }
}

///
/// Distance from (px, py) to the line segment from (ax, ay) to (bx, by)
///
#[inline]
pub fn segment_distance(px: f64, py: f64, ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    let (abx, aby)  = (bx - ax, by - ay);
    let (apx, apy)  = (px - ax, py - ay);
    let length_sq   = abx*abx + aby*aby;

    let t = if length_sq > 0.0 {
        ((apx*abx + apy*aby) / length_sq).max(0.0).min(1.0)
    } else {
        0.0
    };

    let (dx, dy) = (apx - abx*t, apy - aby*t);
    (dx*dx + dy*dy).sqrt()
}

///
/// Distance from (px, py) to the outline of the circle centred at (cx, cy)
///
#[inline]
pub fn circle_outline_distance(px: f64, py: f64, cx: f64, cy: f64, radius: f64) -> f64 {
    let (dx, dy) = (px - cx, py - cy);
    ((dx*dx + dy*dy).sqrt() - radius).abs()
}

impl LinePrimitive {
    ///
    /// Distance in pixels from a point to the outside edge of this stroke (0 or less for points on the stroke)
    ///
    /// `weight_scale` multiplies the stroke weight.
    ///
    #[inline]
    pub fn stroke_distance(&self, space: &CanvasSpace, px: f64, py: f64, weight_scale: f64) -> f64 {
        let (ax, ay) = space.to_pixels(self.start);
        let (bx, by) = space.to_pixels(self.end);

        segment_distance(px, py, ax, ay, bx, by) - self.weight * weight_scale * 0.5
    }

    ///
    /// The pixel bounding box (min x, min y, max x, max y) of this stroke
    ///
    pub fn pixel_bounds(&self, space: &CanvasSpace, weight_scale: f64) -> (f64, f64, f64, f64) {
        let (ax, ay)    = space.to_pixels(self.start);
        let (bx, by)    = space.to_pixels(self.end);
        let half_weight = self.weight * weight_scale * 0.5;

        (ax.min(bx) - half_weight, ay.min(by) - half_weight, ax.max(bx) + half_weight, ay.max(by) + half_weight)
    }
}

impl CirclePrimitive {
    ///
    /// Distance in pixels from a point to the outside edge of this stroke (0 or less for points on the stroke)
    ///
    #[inline]
    pub fn stroke_distance(&self, space: &CanvasSpace, px: f64, py: f64, weight_scale: f64) -> f64 {
        let (cx, cy)    = space.to_pixels(self.center);
        let radius      = space.radius_to_pixels(self.radius);

        circle_outline_distance(px, py, cx, cy, radius) - self.weight * weight_scale * 0.5
    }

    ///
    /// The pixel bounding box (min x, min y, max x, max y) of this stroke
    ///
    pub fn pixel_bounds(&self, space: &CanvasSpace, weight_scale: f64) -> (f64, f64, f64, f64) {
        let (cx, cy)    = space.to_pixels(self.center);
        let extent      = space.radius_to_pixels(self.radius) + self.weight * weight_scale * 0.5;

        (cx - extent, cy - extent, cx + extent, cy + extent)
    }
}
