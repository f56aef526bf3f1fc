mod glow_config;
mod glass_config;

pub use glow_config::*;
pub use glass_config::*;
