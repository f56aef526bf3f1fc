#[cfg(feature="render_png")]
mod render_png {
    use super::super::rgba_image::*;

    use crate::error::*;

    use std::io::{Write, BufWriter};

    impl RgbaImage {
        ///
        /// Writes this image to a stream as an 8-bit RGBA PNG file
        ///
        pub fn write_png<TStream: Write>(&self, target: TStream) -> Result<()> {
            let mut encoder = png::Encoder::new(BufWriter::new(target), self.width() as u32, self.height() as u32);

            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(self.as_bytes())?;
            writer.finish()?;

            Ok(())
        }

        ///
        /// Encodes this image as the bytes of a PNG file
        ///
        pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
            let mut png_data = vec![];
            self.write_png(&mut png_data)?;

            Ok(png_data)
        }
    }
}
