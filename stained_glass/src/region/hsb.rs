use serde_derive::{Serialize, Deserialize};

///
/// A colour specified as hue (in degrees), saturation and brightness (both 0..1)
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsb {
    pub hue:        f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    ///
    /// Creates a new HSB colour (the hue wraps around, saturation and brightness are clamped to 0..1)
    ///
    #[inline]
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Hsb {
        Hsb {
            hue:        hue.rem_euclid(360.0),
            saturation: saturation.max(0.0).min(1.0),
            brightness: brightness.max(0.0).min(1.0),
        }
    }

    ///
    /// Converts this colour to 8-bit RGB components
    ///
    pub fn to_rgb(&self) -> [u8; 3] {
        let hue         = self.hue.rem_euclid(360.0) / 60.0;
        let saturation  = self.saturation.max(0.0).min(1.0);
        let brightness  = self.brightness.max(0.0).min(1.0);

        let chroma      = brightness * saturation;
        let secondary   = chroma * (1.0 - ((hue % 2.0) - 1.0).abs());
        let offset      = brightness - chroma;

        let (r, g, b)   = match hue as u32 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };

        let to_byte = |component: f64| ((component + offset) * 255.0).round().max(0.0).min(255.0) as u8;

        [to_byte(r), to_byte(g), to_byte(b)]
    }
}
