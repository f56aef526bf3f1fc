use crate::error::*;

///
/// An image stored as straight (non-premultiplied) RGBA bytes, in row-major order
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaImage {
    width:  usize,
    height: usize,
    pixels: Vec<u8>,
}

impl RgbaImage {
    ///
    /// Creates a fully transparent image
    ///
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, [0, 0, 0, 0])
    }

    ///
    /// Creates an image where every pixel is the same colour
    ///
    pub fn filled(width: usize, height: usize, color: [u8; 4]) -> Self {
        let pixels = color.iter().copied().cycle().take(width * height * 4).collect();

        RgbaImage { width, height, pixels }
    }

    ///
    /// Creates an image from a buffer of RGBA bytes (returns an error if the buffer is the wrong size)
    ///
    pub fn from_bytes(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        let expected = width * height * 4;

        if pixels.len() != expected {
            Err(GlassError::BufferSizeMismatch { width, height, expected, actual: pixels.len() })
        } else {
            Ok(RgbaImage { width, height, pixels })
        }
    }

    /// The width of the image in pixels
    #[inline] pub fn width(&self) -> usize { self.width }

    /// The height of the image in pixels
    #[inline] pub fn height(&self) -> usize { self.height }

    /// The RGBA bytes making up this image
    #[inline] pub fn as_bytes(&self) -> &[u8] { &self.pixels }

    /// The RGBA bytes making up this image
    #[inline] pub fn as_bytes_mut(&mut self) -> &mut [u8] { &mut self.pixels }

    /// Converts this image into its RGBA bytes
    #[inline] pub fn into_bytes(self) -> Vec<u8> { self.pixels }

    ///
    /// Reads the pixel at a particular position
    ///
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            Some([self.pixels[idx], self.pixels[idx+1], self.pixels[idx+2], self.pixels[idx+3]])
        } else {
            None
        }
    }

    ///
    /// Writes the pixel at a particular position (pixels outside of the image are ignored)
    ///
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: [u8; 4]) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..(idx+4)].copy_from_slice(&color);
        }
    }

    ///
    /// The bytes making up a single row of this image
    ///
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let stride = self.width * 4;
        &mut self.pixels[(y*stride)..((y+1)*stride)]
    }

    ///
    /// Copies another image into this one with its top-left corner at the specified position
    ///
    /// The source image replaces the pixels underneath it (it's not blended). The source image must fit entirely
    /// within this one.
    ///
    pub fn draw_image(&mut self, x: usize, y: usize, source: &RgbaImage) -> Result<()> {
        let fits_x = x.checked_add(source.width).map(|end| end <= self.width).unwrap_or(false);
        let fits_y = y.checked_add(source.height).map(|end| end <= self.height).unwrap_or(false);

        if !fits_x || !fits_y {
            return Err(GlassError::TileOutOfBounds {
                x:              x,
                y:              y,
                width:          source.width,
                height:         source.height,
                full_width:     self.width,
                full_height:    self.height,
            });
        }

        let source_stride   = source.width * 4;
        let target_stride   = self.width * 4;

        for source_y in 0..source.height {
            let source_start    = source_y * source_stride;
            let target_start    = (y + source_y) * target_stride + x * 4;

            self.pixels[target_start..(target_start + source_stride)]
                .copy_from_slice(&source.pixels[source_start..(source_start + source_stride)]);
        }

        Ok(())
    }
}
