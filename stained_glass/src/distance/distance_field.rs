use crate::error::*;
use crate::grid::*;

///
/// The distance used for pixels in a column with no boundary pixels (effectively infinite)
///
pub const INFINITE_DISTANCE: f64 = 1e10;

///
/// The squared form of `INFINITE_DISTANCE`: any squared distance at least this large is treated as infinite
///
pub const INFINITE_SQUARED_DISTANCE: f64 = INFINITE_DISTANCE * INFINITE_DISTANCE;

///
/// The squared Euclidean distance from every pixel of an image to the nearest boundary pixel
///
/// Boundary pixels always have a distance of 0. The field is read-only once it has been computed.
///
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceField {
    squared: Grid<f64>,
}

impl DistanceField {
    ///
    /// Creates a distance field from a grid of squared distances
    ///
    #[inline]
    pub fn from_squared_distances(squared: Grid<f64>) -> Self {
        DistanceField { squared }
    }

    /// The width of the field in pixels
    #[inline] pub fn width(&self) -> usize { self.squared.width() }

    /// The height of the field in pixels
    #[inline] pub fn height(&self) -> usize { self.squared.height() }

    /// The grid of squared distances
    #[inline] pub fn squared_distances(&self) -> &Grid<f64> { &self.squared }

    ///
    /// True if a squared distance value represents the 'infinite' sentinel
    ///
    #[inline]
    pub fn is_infinite(squared_distance: f64) -> bool {
        squared_distance >= INFINITE_SQUARED_DISTANCE
    }

    ///
    /// The squared distance from a pixel to the nearest boundary (0 for positions outside of the field)
    ///
    #[inline]
    pub fn squared_distance(&self, x: isize, y: isize) -> f64 {
        if self.squared.contains(x, y) {
            self.squared.cells()[self.squared.index_of(x as usize, y as usize)]
        } else {
            0.0
        }
    }

    ///
    /// The distance from a pixel to the nearest boundary (0 for positions outside of the field)
    ///
    #[inline]
    pub fn distance(&self, x: isize, y: isize) -> f64 {
        self.squared_distance(x, y).sqrt()
    }

    ///
    /// The largest distance in the field, ignoring any pixels that are infinitely far from a boundary
    ///
    /// This is 0 if the field is empty or if it has no boundary pixels at all.
    ///
    pub fn max_finite_distance(&self) -> f64 {
        self.squared.cells().iter()
            .copied()
            .filter(|squared| !Self::is_infinite(*squared))
            .fold(0.0, f64::max)
            .sqrt()
    }

    ///
    /// Creates a copy of this field with the distances scaled to the range 0..1 using `max_finite_distance()`
    ///
    /// If the maximum distance is 0, every value in the result is 0.
    ///
    pub fn normalized(&self) -> Grid<f32> {
        let max_distance = self.max_finite_distance();

        if max_distance <= 0.0 {
            return Grid::filled(self.width(), self.height(), 0.0);
        }

        self.squared.map(|squared| {
            if Self::is_infinite(*squared) {
                1.0
            } else {
                (squared.sqrt() / max_distance).min(1.0) as f32
            }
        })
    }

    ///
    /// Copies the part of this field covered by a rectangular window
    ///
    pub fn crop(&self, offset_x: usize, offset_y: usize, width: usize, height: usize) -> Result<DistanceField> {
        Ok(DistanceField { squared: self.squared.crop(offset_x, offset_y, width, height)? })
    }
}
