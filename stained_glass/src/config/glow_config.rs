use serde_derive::{Serialize, Deserialize};

///
/// Settings for the stained-glass glow and surface noise applied by the analytic shader
///
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    /// How much the centre of each pane is brightened (0 for no glow)
    pub glow: f64,

    /// Amplitude of the per-pixel brightness noise that imitates the texture of the glass (0 for no noise)
    pub noise: f64,

    /// Seed for the noise pattern
    pub noise_seed: u32,
}

impl Default for GlowConfig {
    fn default() -> Self {
        GlowConfig {
            glow:       0.15,
            noise:      0.04,
            noise_seed: 0,
        }
    }
}
