use serde_derive::{Serialize, Deserialize};

///
/// A straight stroke between two points
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    /// Start point, in normalized coordinates
    pub start: (f64, f64),

    /// End point, in normalized coordinates
    pub end: (f64, f64),

    /// Width of the stroke in pixels
    pub weight: f64,

    /// Colour of the stroke when it's drawn as leading
    pub color: [u8; 4],
}

///
/// A circular stroke
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CirclePrimitive {
    /// Centre of the circle, in normalized coordinates
    pub center: (f64, f64),

    /// Radius of the circle, as a fraction of the smaller of the canvas width and height
    pub radius: f64,

    /// Width of the stroke in pixels
    pub weight: f64,

    /// Colour of the stroke when it's drawn as leading
    pub color: [u8; 4],
}

///
/// The set of strokes that divide a canvas into regions
///
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct ShapeSet {
    pub lines:      Vec<LinePrimitive>,
    pub circles:    Vec<CirclePrimitive>,
}

impl LinePrimitive {
    ///
    /// Creates a black line primitive
    ///
    pub fn new(start: (f64, f64), end: (f64, f64), weight: f64) -> Self {
        LinePrimitive { start, end, weight, color: [0, 0, 0, 255] }
    }
}

impl CirclePrimitive {
    ///
    /// Creates a black circle primitive
    ///
    pub fn new(center: (f64, f64), radius: f64, weight: f64) -> Self {
        CirclePrimitive { center, radius, weight, color: [0, 0, 0, 255] }
    }
}

impl ShapeSet {
    ///
    /// Creates an empty shape set
    ///
    pub fn new() -> Self {
        ShapeSet { lines: vec![], circles: vec![] }
    }

    ///
    /// Adds a line to this shape set
    ///
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    ///
    /// Adds a circle to this shape set
    ///
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    /// True if there are no shapes in this set
    #[inline] pub fn is_empty(&self) -> bool { self.lines.is_empty() && self.circles.is_empty() }
}
