use super::glow_config::*;

use crate::boundary::*;
use crate::error::*;
use crate::region::*;
use crate::shader::*;

use serde_derive::{Serialize, Deserialize};

///
/// The default size limit for a single rendering surface, chosen to stay clear of driver problems on constrained devices
///
pub const DEFAULT_MAX_TILE_SIZE: usize = 2048;

///
/// Settings that control how a stained-glass image is segmented and shaded
///
/// The default value is a neutral set of parameters that can always be rendered, so a failure to work out better
/// parameters never prevents an image from being generated.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassConfig {
    /// Pixels of the rasterized strokes darker than this (average of R, G and B) are boundary pixels
    pub boundary_threshold: u8,

    /// How the colours of the regions are picked
    pub palette: RegionPalette,

    /// The distance-based shading near the edges of each region
    pub edge: EdgeShading,

    /// Glow and noise (used by the analytic shader)
    pub glow: GlowConfig,

    /// The alpha value for region pixels
    pub region_alpha: u8,

    /// The colour of the leading (the boundary pixels)
    pub leading_color: [u8; 4],

    /// The largest width or height of a single rendered tile
    pub max_tile_size: usize,

    /// Number of shapes that can be passed to the analytic shader
    pub shader_capacity: ShaderCapacity,
}

impl Default for GlassConfig {
    fn default() -> Self {
        GlassConfig {
            boundary_threshold: DEFAULT_BOUNDARY_THRESHOLD,
            palette:            RegionPalette::default(),
            edge:               EdgeShading::default(),
            glow:               GlowConfig::default(),
            region_alpha:       220,
            leading_color:      [24, 22, 20, 255],
            max_tile_size:      DEFAULT_MAX_TILE_SIZE,
            shader_capacity:    ShaderCapacity::default(),
        }
    }
}

impl GlassConfig {
    ///
    /// Reads a configuration from a JSON document (any fields that are missing take their default values)
    ///
    pub fn from_json(json: &str) -> Result<GlassConfig> {
        Ok(serde_json::from_str(json)?)
    }

    ///
    /// Writes this configuration as a JSON document
    ///
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
