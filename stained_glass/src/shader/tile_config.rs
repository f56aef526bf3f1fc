use crate::tile::*;

///
/// Tells a shader where the image it's rendering sits within the full-size image
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileConfig {
    /// Width of the full-size image
    pub full_width: usize,

    /// Height of the full-size image
    pub full_height: usize,

    /// X offset of the rendered image within the full-size image
    pub offset_x: usize,

    /// Y offset of the rendered image within the full-size image
    pub offset_y: usize,
}

impl TileConfig {
    ///
    /// The tile configuration for rendering an entire image in one go
    ///
    pub fn full_image(width: usize, height: usize) -> Self {
        TileConfig { full_width: width, full_height: height, offset_x: 0, offset_y: 0 }
    }

    ///
    /// The tile configuration for one tile of a tile grid
    ///
    pub fn for_tile(grid: &TileGrid, tile: &Tile) -> Self {
        TileConfig {
            full_width:     grid.full_width,
            full_height:    grid.full_height,
            offset_x:       tile.x,
            offset_y:       tile.y,
        }
    }

    ///
    /// Converts a pixel position in the rendered image to the position of its centre in the full-size image
    ///
    #[inline]
    pub fn global_pixel_center(&self, local_x: usize, local_y: usize) -> (f64, f64) {
        ((self.offset_x + local_x) as f64 + 0.5, (self.offset_y + local_y) as f64 + 0.5)
    }
}
