mod rgba_image;
mod image_render;
mod generation_guard;
mod glass_renderer;

pub use rgba_image::*;
pub use generation_guard::*;
pub use glass_renderer::*;
