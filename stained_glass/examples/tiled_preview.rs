use flo_stained_glass::shader::*;
use flo_stained_glass::shapes::*;
use flo_stained_glass::*;

use std::fs::{File};
use std::io::{BufWriter};
use std::sync::*;
use std::time::{Instant};

///
/// Renders a rose window through the analytic shader, using a software context with a small surface limit so that
/// the image has to be drawn as a set of tiles
///
pub fn main() {
    env_logger::init();

    // Spokes and rings
    let mut shapes = ShapeSet::new();
    for spoke in 0..12 {
        let angle   = (spoke as f64) * std::f64::consts::PI / 6.0;
        let end     = (0.5 + angle.cos() * 0.45, 0.5 + angle.sin() * 0.45);

        shapes = shapes.with_line(LinePrimitive::new((0.5, 0.5), end, 5.0));
    }

    for ring in 1..=4 {
        shapes = shapes.with_circle(CirclePrimitive::new((0.5, 0.5), 0.1 * ring as f64 + 0.05, 5.0));
    }

    // Settings can be loaded from JSON: anything that's left out keeps its default value
    let config = GlassConfig::from_json(r#"{ "edge": { "mode": "lighten", "falloff": 20.0 }, "glow": { "glow": 0.3 } }"#)
        .expect("Valid configuration");

    let context: Arc<dyn ShaderContext>    = Arc::new(SoftwareShaderContext::with_max_dimension(Some(512)));
    let mut render                          = StainedGlassRenderer::new(config, Some(context));

    // Render a half-size preview and then the full image
    for (size, scale, filename) in [(1024, 0.5, "rose_preview.png"), (2048, 1.0, "rose.png")].iter().copied() {
        let start   = Instant::now();
        let result  = render.render(&shapes, size, size, scale).expect("Rose window");

        println!("{}: {} panes, {} tiles, {:?} shader, {}ms", filename, result.region_count, result.tile_count, result.shader, Instant::now().duration_since(start).as_millis());

        let file        = File::create(filename).expect("Output file");
        let mut writer  = BufWriter::new(file);
        result.image.write_png(&mut writer).expect("PNG data");
    }
}
