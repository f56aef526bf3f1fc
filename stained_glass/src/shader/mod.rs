//!
//! # Shaders
//!
//! The final colour of every pixel is worked out by a `RegionShader`. There are two implementations of this:
//!
//! * `DistanceFieldShader` shades pixels on the CPU from the region labels and a precomputed distance field.
//! * `AnalyticShader` packs the line and circle primitives into fixed-size uniform arrays and evaluates the
//!   distance to the nearest stroke for each pixel in a fragment program run by a `ShaderContext`, so it never
//!   needs a distance field.
//!
//! `select_region_shader()` picks the analytic shader when a context is available and falls back to the CPU
//! shader otherwise.
//!

mod shader_capacity;
mod tile_config;
mod shader_uniforms;
mod shader_context;
mod region_shader;
mod glass_noise;
mod distance_field_shader;
mod analytic_shader;
mod shader_selection;

pub use shader_capacity::*;
pub use tile_config::*;
pub use shader_uniforms::*;
pub use shader_context::*;
pub use region_shader::*;
pub use glass_noise::*;
pub use distance_field_shader::*;
pub use analytic_shader::*;
pub use shader_selection::*;
