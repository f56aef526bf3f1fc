use crate::error::*;

///
/// A rectangular window onto a full-size image
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// The column of this tile in the tile grid
    pub tile_x: usize,

    /// The row of this tile in the tile grid
    pub tile_y: usize,

    /// The x offset of the tile's left edge in the full image
    pub x: usize,

    /// The y offset of the tile's top edge in the full image
    pub y: usize,

    /// Width of the tile in pixels
    pub width: usize,

    /// Height of the tile in pixels
    pub height: usize,
}

///
/// A set of tiles that exactly covers a full-size image
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub full_width:     usize,
    pub full_height:    usize,
    pub max_tile_size:  usize,
    pub columns:        usize,
    pub rows:           usize,

    /// The tiles, in row-major order
    pub tiles:          Vec<Tile>,
}

impl Tile {
    ///
    /// Converts a position within this tile to a position in the full image
    ///
    #[inline]
    pub fn to_global(&self, local_x: usize, local_y: usize) -> (usize, usize) {
        (self.x + local_x, self.y + local_y)
    }
}

impl TileGrid {
    /// The number of tiles in this grid
    #[inline] pub fn len(&self) -> usize { self.tiles.len() }

    /// True if this grid has no tiles (the image has no pixels)
    #[inline] pub fn is_empty(&self) -> bool { self.tiles.is_empty() }

    /// Iterates over the tiles in this grid
    #[inline] pub fn iter(&self) -> impl '_ + Iterator<Item=&Tile> { self.tiles.iter() }
}

///
/// Divides a full-size image into tiles that are no more than `max_tile_size` pixels across in either direction
///
/// Tiles are laid out in row-major order. Tiles along the right and bottom edges are smaller if the image size
/// is not a multiple of the tile size.
///
pub fn calculate_tile_grid(full_width: usize, full_height: usize, max_tile_size: usize) -> Result<TileGrid> {
    if max_tile_size == 0 {
        return Err(GlassError::InvalidTileSize);
    }

    let columns     = (full_width + max_tile_size - 1) / max_tile_size;
    let rows        = (full_height + max_tile_size - 1) / max_tile_size;
    let mut tiles   = Vec::with_capacity(columns * rows);

    for tile_y in 0..rows {
        for tile_x in 0..columns {
            let x = tile_x * max_tile_size;
            let y = tile_y * max_tile_size;

            tiles.push(Tile {
                tile_x: tile_x,
                tile_y: tile_y,
                x:      x,
                y:      y,
                width:  max_tile_size.min(full_width - x),
                height: max_tile_size.min(full_height - y),
            });
        }
    }

    Ok(TileGrid { full_width, full_height, max_tile_size, columns, rows, tiles })
}
