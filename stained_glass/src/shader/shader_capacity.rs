use serde_derive::{Serialize, Deserialize};

///
/// The number of shapes that can be passed to the analytic shader
///
/// Shader uniform arrays have a fixed size, so any shapes beyond these counts are dropped (and reported) when the
/// uniforms are packed.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderCapacity {
    pub max_lines:      usize,
    pub max_circles:    usize,
}

impl Default for ShaderCapacity {
    fn default() -> Self {
        ShaderCapacity {
            max_lines:      40,
            max_circles:    10,
        }
    }
}
