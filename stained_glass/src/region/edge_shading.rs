use super::hsb::*;

use serde_derive::{Serialize, Deserialize};

///
/// How a region's colour changes as its pixels approach the leading
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// Pixels get darker and slightly more saturated near the edge
    Darken,

    /// Pixels get brighter and less saturated near the edge
    Lighten,

    /// Pixels only get more saturated near the edge
    Saturate,
}

///
/// Settings for the distance-based shading applied to the pixels of each region
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeShading {
    /// The way the colour changes near the edges
    pub mode: EdgeMode,

    /// Strength of the effect at the edge itself (0 disables edge shading)
    pub intensity: f64,

    /// Distance in pixels over which the effect fades out
    pub falloff: f64,
}

impl Default for EdgeShading {
    fn default() -> Self {
        EdgeShading {
            mode:       EdgeMode::Darken,
            intensity:  0.5,
            falloff:    12.0,
        }
    }
}

impl EdgeShading {
    ///
    /// Returns the strength of the edge effect for a pixel, given its squared distance to the nearest boundary
    ///
    /// `scale` multiplies the falloff distance (it's the preview scale when rendering reduced-size images)
    ///
    #[inline]
    pub fn edge_effect(&self, squared_distance: f64, scale: f64) -> f64 {
        let falloff     = self.falloff * scale;
        let edge_factor = if falloff > 0.0 {
            (squared_distance / (falloff * falloff)).min(1.0)
        } else {
            1.0
        };

        (1.0 - edge_factor) * self.intensity
    }

    ///
    /// Applies the edge effect to the base colour of a region
    ///
    pub fn shade(&self, base: Hsb, squared_distance: f64, scale: f64) -> Hsb {
        let edge_effect = self.edge_effect(squared_distance, scale);
        let Hsb { hue, saturation, brightness } = base;

        match self.mode {
            EdgeMode::Darken    => Hsb::new(hue, saturation + 0.2 * edge_effect, brightness * (1.0 - 0.6 * edge_effect)),
            EdgeMode::Lighten   => Hsb::new(hue, saturation * (1.0 - 0.5 * edge_effect), brightness + (1.0 - brightness) * 0.6 * edge_effect),
            EdgeMode::Saturate  => Hsb::new(hue, saturation + (1.0 - saturation) * edge_effect, brightness),
        }
    }

    ///
    /// Shades a region pixel and converts it to RGBA with the specified alpha value
    ///
    #[inline]
    pub fn shade_pixel(&self, base: Hsb, squared_distance: f64, scale: f64, alpha: u8) -> [u8; 4] {
        let [r, g, b] = self.shade(base, squared_distance, scale).to_rgb();
        [r, g, b, alpha]
    }
}
