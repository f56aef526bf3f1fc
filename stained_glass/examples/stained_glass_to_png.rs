use flo_stained_glass::shapes::*;
use flo_stained_glass::*;

use rand::prelude::*;

use std::fs::{File};
use std::io::{BufWriter};

///
/// Generates a random set of lines and circles that divide the canvas into panes
///
fn random_shapes(seed: u64) -> ShapeSet {
    let mut rng     = StdRng::seed_from_u64(seed);
    let mut shapes  = ShapeSet::new();

    // Lines run from one edge of the canvas to another
    for _ in 0..8 {
        let (start, end) = if rng.gen_bool(0.5) {
            ((0.0, rng.gen_range(0.0..1.0)), (1.0, rng.gen_range(0.0..1.0)))
        } else {
            ((rng.gen_range(0.0..1.0), 0.0), (rng.gen_range(0.0..1.0), 1.0))
        };

        shapes = shapes.with_line(LinePrimitive::new(start, end, rng.gen_range(3.0..6.0)));
    }

    for _ in 0..4 {
        let center = (rng.gen_range(0.15..0.85), rng.gen_range(0.15..0.85));
        shapes = shapes.with_circle(CirclePrimitive::new(center, rng.gen_range(0.05..0.3), 4.0));
    }

    shapes
}

///
/// Renders a stained-glass image on the CPU and writes it to stained_glass.png
///
/// Pass `RUST_LOG=debug` to see how the image is tiled and segmented.
///
pub fn main() {
    env_logger::init();

    let shapes      = random_shapes(0x57a1);
    let mut render  = StainedGlassRenderer::new(GlassConfig::default(), None);
    let result      = render.render(&shapes, 1920, 1080, 1.0).expect("Stained glass image");

    println!("{} panes, rendered as {} tiles", result.region_count, result.tile_count);

    let file        = File::create("stained_glass.png").expect("Output file");
    let mut writer  = BufWriter::new(file);
    result.image.write_png(&mut writer).expect("PNG data");
}
