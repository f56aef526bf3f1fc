use crate::error::*;
use crate::grid::*;

///
/// Pixels whose average brightness is below this value are treated as boundary pixels by default
///
pub const DEFAULT_BOUNDARY_THRESHOLD: u8 = 50;

///
/// A binary mask indicating which pixels of an image are part of a boundary stroke
///
/// `true` cells are boundary pixels. The mask is immutable once it has been extracted from the rasterized strokes.
///
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryMask {
    grid: Grid<bool>,
}

impl BoundaryMask {
    ///
    /// Creates a 0x0 boundary mask
    ///
    pub fn empty() -> Self {
        BoundaryMask { grid: Grid::filled(0, 0, false) }
    }

    ///
    /// Creates a boundary mask from a grid of booleans
    ///
    #[inline]
    pub fn from_grid(grid: Grid<bool>) -> Self {
        BoundaryMask { grid }
    }

    ///
    /// Creates a boundary mask by calling a function for each pixel
    ///
    pub fn from_fn(width: usize, height: usize, is_boundary: impl FnMut(usize, usize) -> bool) -> Self {
        BoundaryMask { grid: Grid::from_fn(width, height, is_boundary) }
    }

    ///
    /// Extracts the boundary mask from a row-major RGBA buffer (4 bytes per pixel)
    ///
    /// A pixel is a boundary pixel if the average of its red, green and blue components is strictly below the
    /// threshold. The alpha component is ignored. Images with no pixels produce an empty mask.
    ///
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8], threshold: u8) -> Result<Self> {
        let expected = width * height * 4;
        if rgba.len() != expected {
            return Err(GlassError::BufferSizeMismatch { width, height, expected, actual: rgba.len() });
        }

        if expected == 0 {
            return Ok(BoundaryMask { grid: Grid::filled(width, height, false) });
        }

        // avg < threshold  <=>  r+g+b < 3*threshold, which avoids any rounding
        let threshold_sum   = (threshold as u32) * 3;
        let cells           = rgba.chunks_exact(4)
            .map(|pixel| (pixel[0] as u32) + (pixel[1] as u32) + (pixel[2] as u32) < threshold_sum)
            .collect();

        Ok(BoundaryMask { grid: Grid::from_cells(width, height, cells)? })
    }

    /// The width of the mask in pixels
    #[inline] pub fn width(&self) -> usize { self.grid.width() }

    /// The height of the mask in pixels
    #[inline] pub fn height(&self) -> usize { self.grid.height() }

    /// The underlying grid of boundary flags
    #[inline] pub fn grid(&self) -> &Grid<bool> { &self.grid }

    ///
    /// True if the specified pixel is a boundary pixel (pixels outside of the mask are never boundary pixels)
    ///
    #[inline]
    pub fn is_boundary(&self, x: usize, y: usize) -> bool {
        self.grid.get(x, y).copied().unwrap_or(false)
    }

    ///
    /// The number of boundary pixels in this mask
    ///
    pub fn boundary_count(&self) -> usize {
        self.grid.cells().iter().filter(|is_boundary| **is_boundary).count()
    }
}
