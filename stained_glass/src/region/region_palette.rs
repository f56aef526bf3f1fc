use super::hsb::*;

use serde_derive::{Serialize, Deserialize};

/// Hue stride between consecutive regions, as a fraction of the hue circle
const GOLDEN_RATIO_CONJUGATE: f64 = 0.618033988749895;

///
/// Describes how colours are picked for the regions of an image
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionPalette {
    /// Hue of region 0, in degrees
    pub base_hue: f64,

    /// Average saturation of the region colours
    pub saturation: f64,

    /// Average brightness of the region colours
    pub brightness: f64,

    /// How far the saturation and brightness can vary either side of the average
    pub variation: f64,
}

impl Default for RegionPalette {
    fn default() -> Self {
        RegionPalette {
            base_hue:   210.0,
            saturation: 0.65,
            brightness: 0.8,
            variation:  0.12,
        }
    }
}

impl RegionPalette {
    ///
    /// The colour for a particular region ID
    ///
    /// Each region's hue is offset from the last by the golden ratio, which keeps neighbouring IDs visually distinct
    /// however many regions there are.
    ///
    pub fn region_color(&self, region: usize) -> Hsb {
        let step    = (region as f64) * GOLDEN_RATIO_CONJUGATE;
        let hue     = (self.base_hue / 360.0 + step).fract() * 360.0;
        let wobble  = (step * 3.0).fract() * 2.0 - 1.0;

        Hsb::new(hue, self.saturation + wobble * self.variation, self.brightness - wobble * self.variation * 0.5)
    }
}

///
/// The colours assigned to each region discovered in an image
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct RegionColorTable {
    colors: Vec<Hsb>,
}

impl RegionColorTable {
    ///
    /// Creates an empty colour table
    ///
    pub fn empty() -> Self {
        RegionColorTable { colors: vec![] }
    }

    ///
    /// Generates the colours for `region_count` regions from a palette
    ///
    pub fn generate(palette: &RegionPalette, region_count: usize) -> Self {
        RegionColorTable {
            colors: (0..region_count).map(|region| palette.region_color(region)).collect()
        }
    }

    ///
    /// Adds the colour for the next region, returning its ID
    ///
    pub fn push(&mut self, color: Hsb) -> usize {
        self.colors.push(color);
        self.colors.len() - 1
    }

    /// The colour of a region, if it exists
    #[inline] pub fn get(&self, region: usize) -> Option<Hsb> { self.colors.get(region).copied() }

    /// The number of regions with colours
    #[inline] pub fn len(&self) -> usize { self.colors.len() }

    /// True if there are no colours in this table
    #[inline] pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// The colours in this table, in region ID order
    #[inline] pub fn colors(&self) -> &[Hsb] { &self.colors }
}
