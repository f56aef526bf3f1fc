use flo_stained_glass::boundary::*;
use flo_stained_glass::distance::*;
use flo_stained_glass::region::*;
use flo_stained_glass::render::*;
use flo_stained_glass::shader::*;
use flo_stained_glass::shapes::*;
use flo_stained_glass::*;

use rand::prelude::*;

use std::sync::*;

///
/// Picks a point on one of the edges of the canvas
///
fn edge_point(rng: &mut StdRng, edge: usize) -> (f64, f64) {
    let along = rng.gen_range(0.05..0.95);

    match edge % 4 {
        0 => (along, 0.0),
        1 => (1.0, along),
        2 => (along, 1.0),
        _ => (0.0, along),
    }
}

///
/// A random set of lines running from edge to edge, plus a few circles
///
fn random_shapes(seed: u64) -> ShapeSet {
    let mut rng     = StdRng::seed_from_u64(seed);
    let mut shapes  = ShapeSet::new();

    for _ in 0..6 {
        let start_edge  = rng.gen_range(0..4);
        let end_edge    = start_edge + rng.gen_range(1..4);
        let start       = edge_point(&mut rng, start_edge);
        let end         = edge_point(&mut rng, end_edge);
        let weight      = rng.gen_range(2.0..4.0);

        shapes = shapes.with_line(LinePrimitive::new(start, end, weight));
    }

    for _ in 0..3 {
        let center  = (rng.gen_range(0.2..0.8), rng.gen_range(0.2..0.8));
        let radius  = rng.gen_range(0.05..0.25);

        shapes = shapes.with_circle(CirclePrimitive::new(center, radius, 2.0));
    }

    shapes
}

///
/// Tests run in parallel, so each renderer gets its own guard instead of the process-wide one
///
fn isolated(render: StainedGlassRenderer) -> StainedGlassRenderer {
    render.with_generation_guard(Arc::new(GenerationGuard::new()))
}

fn cpu_renderer() -> StainedGlassRenderer {
    isolated(StainedGlassRenderer::with_shader(GlassConfig::default(), None, Box::new(DistanceFieldShader::new())))
}

fn software_renderer(max_dimension: Option<usize>) -> StainedGlassRenderer {
    let context: Arc<dyn ShaderContext> = Arc::new(SoftwareShaderContext::with_max_dimension(max_dimension));
    isolated(StainedGlassRenderer::new(GlassConfig::default(), Some(context)))
}

fn many_lines(count: usize) -> ShapeSet {
    let mut shapes = ShapeSet::new();
    for idx in 0..count {
        let x = (idx as f64 + 0.5) / (count as f64);
        shapes = shapes.with_line(LinePrimitive::new((x, 0.0), (x, 1.0), 1.0));
    }

    shapes
}

#[test]
fn distance_field_tiles_match_single_render() {
    for seed in 0..4 {
        let shapes      = random_shapes(seed);
        let mut render  = cpu_renderer();

        let whole       = render.render_with_tile_size(&shapes, 200, 150, 1.0, 1000).unwrap();
        let tiled       = render.render_with_tile_size(&shapes, 200, 150, 1.0, 37).unwrap();

        assert!(whole.tile_count == 1);
        assert!(tiled.tile_count == 6 * 5);
        assert!(whole.region_count == tiled.region_count);
        assert!(whole.image == tiled.image, "Tiled image differs from the single render for seed {}", seed);
    }
}

#[test]
fn analytic_tiles_match_single_render() {
    for seed in 0..4 {
        let shapes      = random_shapes(seed);
        let mut render  = software_renderer(Some(4096));

        let whole       = render.render_with_tile_size(&shapes, 180, 120, 1.0, 4096).unwrap();
        let tiled       = render.render_with_tile_size(&shapes, 180, 120, 1.0, 50).unwrap();

        assert!(whole.shader == ShaderKind::Analytic);
        assert!(tiled.tile_count == 4 * 3);
        assert!(whole.image == tiled.image, "Tiled image differs from the single render for seed {}", seed);
    }
}

#[test]
fn cpu_render_matches_segment_and_shade() {
    let shapes      = random_shapes(11);
    let config      = GlassConfig::default();

    let strokes     = rasterize_boundaries(&shapes, 160, 120, 1.0);
    let mask        = BoundaryMask::from_rgba(160, 120, strokes.as_bytes(), config.boundary_threshold).unwrap();
    let distance    = distance_transform(&mask);
    let shaded      = segment_and_shade(&mask, &distance, &config, 1.0).unwrap();

    let rendered    = cpu_renderer().render(&shapes, 160, 120, 1.0).unwrap();

    assert!(rendered.region_count == shaded.labels.region_count());
    assert!(rendered.image == shaded.image);
}

#[test]
fn no_context_uses_distance_field_shader_and_tiles() {
    let mut render  = isolated(StainedGlassRenderer::new(GlassConfig::default(), None));
    let result      = render.render(&random_shapes(3), 120, 80, 1.0).unwrap();

    assert!(render.shader_kind() == ShaderKind::DistanceField);
    assert!(result.shader == ShaderKind::DistanceField);
    assert!(result.tile_count == 1);
    assert!(result.image.width() == 120 && result.image.height() == 80);
    assert!(result.truncation == None);
}

#[test]
fn small_surface_limit_forces_tiles() {
    let mut render  = software_renderer(Some(64));
    let result      = render.render(&random_shapes(5), 200, 100, 1.0).unwrap();

    assert!(result.shader == ShaderKind::Analytic);
    assert!(result.tile_count == 4 * 2);
}

#[test]
fn large_surface_limit_renders_in_one_go() {
    let mut render  = software_renderer(Some(8192));
    let result      = render.render(&random_shapes(5), 200, 100, 1.0).unwrap();

    assert!(result.tile_count == 1);
}

#[test]
fn vertical_line_makes_two_panes() {
    let shapes      = ShapeSet::new().with_line(LinePrimitive::new((0.5, 0.0), (0.5, 1.0), 2.0));
    let strokes     = rasterize_boundaries(&shapes, 100, 100, 1.0);
    let mask        = BoundaryMask::from_rgba(100, 100, strokes.as_bytes(), DEFAULT_BOUNDARY_THRESHOLD).unwrap();

    for y in 0..100 {
        for x in 0..100 {
            assert!(mask.is_boundary(x, y) == (x == 49 || x == 50), "({}, {}) is wrong", x, y);
        }
    }

    let result = cpu_renderer().render(&shapes, 100, 100, 1.0).unwrap();
    assert!(result.region_count == 2);
    assert!(result.image.pixel(49, 10) == Some(GlassConfig::default().leading_color));
}

#[test]
fn preview_scale_thickens_strokes() {
    let shapes  = ShapeSet::new().with_line(LinePrimitive::new((0.5, 0.0), (0.5, 1.0), 2.0));
    let thin    = BoundaryMask::from_rgba(100, 10, rasterize_boundaries(&shapes, 100, 10, 1.0).as_bytes(), 50).unwrap();
    let thick   = BoundaryMask::from_rgba(100, 10, rasterize_boundaries(&shapes, 100, 10, 3.0).as_bytes(), 50).unwrap();

    assert!(thick.boundary_count() > thin.boundary_count());
}

#[test]
fn too_many_panes_is_an_error() {
    // 20 horizontal and 20 vertical lines divide the image into 441 panes
    let mut shapes = ShapeSet::new();
    for idx in 0..20 {
        let pos = (idx as f64 + 0.5) / 20.0 - 0.0125;
        shapes = shapes
            .with_line(LinePrimitive::new((0.0, pos), (1.0, pos), 2.0))
            .with_line(LinePrimitive::new((pos, 0.0), (pos, 1.0), 2.0));
    }

    match cpu_renderer().render(&shapes, 400, 400, 1.0) {
        Err(GlassError::TooManyRegions { limit: 255 }) => { }
        other => panic!("Expected too many regions, got {:?}", other.map(|result| result.region_count)),
    }
}

#[test]
fn truncation_is_passed_back() {
    let result = software_renderer(Some(4096)).render(&many_lines(45), 180, 20, 1.0).unwrap();

    assert!(result.tile_count == 1);
    assert!(result.truncation.map(|truncation| truncation.lines_dropped) == Some(5));
}

#[test]
fn tiled_render_reports_truncation_once() {
    let result = software_renderer(Some(64)).render(&many_lines(45), 180, 20, 1.0).unwrap();

    assert!(result.tile_count == 3);
    assert!(result.truncation == Some(ShapeTruncation { lines_supplied: 45, lines_dropped: 5, circles_supplied: 0, circles_dropped: 0 }));
}

#[test]
fn truncation_is_not_carried_over_to_the_next_render() {
    let mut render  = software_renderer(Some(64));

    let truncated   = render.render(&many_lines(45), 180, 20, 1.0).unwrap();
    assert!(truncated.truncation.is_some());

    // No pixels means no tiles, so the shader never runs
    let empty       = render.render_with_tile_size(&ShapeSet::new(), 0, 100, 1.0, 64).unwrap();
    assert!(empty.tile_count == 0);
    assert!(empty.truncation == None);

    let untruncated = render.render(&many_lines(3), 180, 20, 1.0).unwrap();
    assert!(untruncated.truncation == None);
}

#[test]
fn requests_are_dropped_while_generating() {
    let guard       = Arc::new(GenerationGuard::new());
    let mut render  = cpu_renderer().with_generation_guard(Arc::clone(&guard));
    let shapes      = random_shapes(1);

    {
        let _ticket = guard.begin().unwrap();
        assert!(guard.state() == GenerationState::Generating);

        match render.render(&shapes, 50, 50, 1.0) {
            Err(GlassError::GenerationInProgress) => { }
            other => panic!("Expected the request to be dropped, got {:?}", other.map(|result| result.region_count)),
        }
    }

    assert!(guard.state() == GenerationState::Idle);
    assert!(render.render(&shapes, 50, 50, 1.0).is_ok());
    assert!(guard.state() == GenerationState::Idle);
}

#[test]
fn guard_returns_to_idle_after_errors() {
    let guard       = Arc::new(GenerationGuard::new());
    let mut render  = cpu_renderer().with_generation_guard(Arc::clone(&guard));

    assert!(render.render_with_tile_size(&random_shapes(2), 50, 50, 1.0, 0).is_err());
    assert!(guard.state() == GenerationState::Idle);
}

#[test]
fn second_ticket_is_refused() {
    let guard   = GenerationGuard::new();
    let first   = guard.begin();

    assert!(first.is_ok());
    assert!(matches!(guard.begin(), Err(GlassError::GenerationInProgress)));

    drop(first);
    assert!(guard.begin().is_ok());
}

#[test]
fn empty_shape_set_is_one_pane() {
    let result = cpu_renderer().render(&ShapeSet::new(), 64, 64, 1.0).unwrap();

    assert!(result.region_count == 1);

    let color = GlassConfig::default().palette.region_color(0);
    let [r, g, b] = color.to_rgb();
    assert!(result.image.pixel(32, 32) == Some([r, g, b, 220]));
}

#[cfg(feature="render_png")]
#[test]
fn write_png() {
    let result  = cpu_renderer().render(&random_shapes(8), 64, 48, 1.0).unwrap();
    let png     = result.image.to_png_bytes().unwrap();

    assert!(png.len() > 8);
    assert!(png[0..8] == [137, 80, 78, 71, 13, 10, 26, 10]);
}
