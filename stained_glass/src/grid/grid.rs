use crate::error::*;

use itertools::*;

///
/// A dense, row-major grid of values covering a `width`x`height` image
///
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width:  usize,
    height: usize,
    cells:  Vec<T>,
}

impl<T> Grid<T> {
    ///
    /// Creates a grid from a list of cells stored in row-major order
    ///
    /// The number of cells must be exactly `width * height`
    ///
    pub fn from_cells(width: usize, height: usize, cells: Vec<T>) -> Result<Self> {
        let expected = width * height;

        if cells.len() != expected {
            Err(GlassError::BufferSizeMismatch { width, height, expected, actual: cells.len() })
        } else {
            Ok(Grid { width, height, cells })
        }
    }

    ///
    /// Creates a grid by calling a function for every (x, y) position
    ///
    pub fn from_fn(width: usize, height: usize, mut cell_fn: impl FnMut(usize, usize) -> T) -> Self {
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| cell_fn(x, y))
            .collect();

        Grid { width, height, cells }
    }

    /// The width of this grid in cells
    #[inline] pub fn width(&self) -> usize { self.width }

    /// The height of this grid in cells
    #[inline] pub fn height(&self) -> usize { self.height }

    /// True if this grid contains no cells
    #[inline] pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    ///
    /// Returns the index into the cell list of a particular position
    ///
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    ///
    /// True if the specified signed position lies within this grid
    ///
    #[inline]
    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    ///
    /// Retrieves the cell at a position, or None if the position is outside of the grid
    ///
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index_of(x, y)])
        } else {
            None
        }
    }

    ///
    /// Updates the cell at a position (positions outside of the grid are ignored)
    ///
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        if x < self.width && y < self.height {
            let idx         = self.index_of(x, y);
            self.cells[idx] = value;
        }
    }

    ///
    /// The cells making up a single row of the grid
    ///
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.cells[start..(start + self.width)]
    }

    /// All of the cells in this grid, in row-major order
    #[inline] pub fn cells(&self) -> &[T] { &self.cells }

    /// All of the cells in this grid, in row-major order
    #[inline] pub fn cells_mut(&mut self) -> &mut [T] { &mut self.cells }

    /// Converts this grid into its list of cells
    #[inline] pub fn into_cells(self) -> Vec<T> { self.cells }

    ///
    /// Creates a new grid of the same size by transforming every cell of this one
    ///
    pub fn map<TOut>(&self, cell_fn: impl FnMut(&T) -> TOut) -> Grid<TOut> {
        Grid {
            width:  self.width,
            height: self.height,
            cells:  self.cells.iter().map(cell_fn).collect(),
        }
    }

    ///
    /// Returns an error if another grid does not have the same dimensions as this one
    ///
    pub fn check_same_size<TOther>(&self, other: &Grid<TOther>) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            Err(GlassError::GridSizeMismatch {
                expected_width:     self.width,
                expected_height:    self.height,
                actual_width:       other.width,
                actual_height:      other.height,
            })
        } else {
            Ok(())
        }
    }
}

impl<T: Clone> Grid<T> {
    ///
    /// Creates a grid where every cell has the same value
    ///
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Grid { width, height, cells: vec![value; width * height] }
    }

    ///
    /// Copies a rectangular window out of this grid
    ///
    /// Cell `(x, y)` of the result is the cell at `(offset_x + x, offset_y + y)` in this grid. The window must lie
    /// entirely inside the grid.
    ///
    pub fn crop(&self, offset_x: usize, offset_y: usize, width: usize, height: usize) -> Result<Grid<T>> {
        let fits_x = offset_x.checked_add(width).map(|end| end <= self.width).unwrap_or(false);
        let fits_y = offset_y.checked_add(height).map(|end| end <= self.height).unwrap_or(false);

        if !fits_x || !fits_y {
            return Err(GlassError::TileOutOfBounds {
                x:              offset_x,
                y:              offset_y,
                width:          width,
                height:         height,
                full_width:     self.width,
                full_height:    self.height,
            });
        }

        let mut cells = Vec::with_capacity(width * height);
        for local_y in 0..height {
            let global_start = self.index_of(offset_x, offset_y + local_y);
            cells.extend_from_slice(&self.cells[global_start..(global_start + width)]);
        }

        Ok(Grid { width, height, cells })
    }
}
