use crate::render::*;
use crate::tile::*;

///
/// A fragment program: generates the colour of the pixel at a position in the render target
///
pub type FragmentProgram<'a> = dyn 'a + Fn(usize, usize) -> [u8; 4] + Sync;

///
/// A context that can run fragment programs over a render surface (typically backed by a GPU)
///
pub trait ShaderContext : Send + Sync + SurfaceLimits {
    ///
    /// Runs a fragment program for every pixel of a surface, storing the results in the surface
    ///
    fn run_fragments(&self, surface: &mut RgbaImage, fragment: &FragmentProgram<'_>);
}

///
/// A shader context that runs fragment programs on the CPU
///
/// This can stand in for a GPU context: it reports a configurable surface size limit so that tiling behaves the
/// same way as it would on real hardware.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SoftwareShaderContext {
    max_dimension: Option<usize>,
}

impl SoftwareShaderContext {
    ///
    /// Creates a software context that reports the specified maximum surface size (or None to report an unknown limit)
    ///
    pub fn with_max_dimension(max_dimension: Option<usize>) -> Self {
        SoftwareShaderContext { max_dimension }
    }
}

impl Default for SoftwareShaderContext {
    fn default() -> Self {
        SoftwareShaderContext { max_dimension: Some(8192) }
    }
}

impl SurfaceLimits for SoftwareShaderContext {
    fn max_surface_dimension(&self) -> Option<usize> {
        self.max_dimension
    }
}

impl ShaderContext for SoftwareShaderContext {
    fn run_fragments(&self, surface: &mut RgbaImage, fragment: &FragmentProgram<'_>) {
        let width   = surface.width();
        let height  = surface.height();

        if width == 0 || height == 0 {
            return;
        }

        #[cfg(feature="multithreading")]
        {
            use rayon::prelude::*;

            surface.as_bytes_mut()
                .par_chunks_mut(width * 4)
                .enumerate()
                .for_each(|(y, row)| {
                    for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
                        pixel.copy_from_slice(&fragment(x, y));
                    }
                });
        }

        #[cfg(not(feature="multithreading"))]
        {
            for y in 0..height {
                for (x, pixel) in surface.row_mut(y).chunks_exact_mut(4).enumerate() {
                    pixel.copy_from_slice(&fragment(x, y));
                }
            }
        }
    }
}
