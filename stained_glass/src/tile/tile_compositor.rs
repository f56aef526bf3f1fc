use super::tile_grid::*;

use crate::error::*;
use crate::render::*;

///
/// Assembles rendered tiles into a single full-size image
///
/// Tiles don't overlap, so they can be drawn in any order.
///
pub struct TileCompositor {
    image:          RgbaImage,
    tiles_drawn:    usize,
}

impl TileCompositor {
    ///
    /// Creates a compositor for an image of the specified size
    ///
    pub fn new(full_width: usize, full_height: usize) -> Self {
        TileCompositor {
            image:          RgbaImage::new(full_width, full_height),
            tiles_drawn:    0,
        }
    }

    ///
    /// Copies the rendered image for a tile into place
    ///
    /// The image must be the same size as the tile.
    ///
    pub fn draw_tile(&mut self, tile: &Tile, tile_image: &RgbaImage) -> Result<()> {
        if tile_image.width() != tile.width || tile_image.height() != tile.height {
            return Err(GlassError::GridSizeMismatch {
                expected_width:     tile.width,
                expected_height:    tile.height,
                actual_width:       tile_image.width(),
                actual_height:      tile_image.height(),
            });
        }

        self.image.draw_image(tile.x, tile.y, tile_image)?;
        self.tiles_drawn += 1;

        Ok(())
    }

    /// The number of tiles that have been drawn so far
    #[inline] pub fn tiles_drawn(&self) -> usize { self.tiles_drawn }

    ///
    /// Returns the composited image
    ///
    pub fn finish(self) -> RgbaImage {
        self.image
    }
}
