use flo_stained_glass::region::*;
use flo_stained_glass::*;

#[test]
fn default_config_round_trips_through_json() {
    let config  = GlassConfig::default();
    let json    = config.to_json().unwrap();

    assert!(GlassConfig::from_json(&json).unwrap() == config);
}

#[test]
fn missing_fields_take_default_values() {
    let config = GlassConfig::from_json(r#"{
        "boundary_threshold": 80,
        "edge": { "mode": "lighten" },
        "max_tile_size": 512
    }"#).unwrap();

    assert!(config.boundary_threshold == 80);
    assert!(config.edge.mode == EdgeMode::Lighten);
    assert!(config.edge.falloff == EdgeShading::default().falloff);
    assert!(config.max_tile_size == 512);
    assert!(config.palette == RegionPalette::default());
    assert!(config.region_alpha == GlassConfig::default().region_alpha);
}

#[test]
fn empty_document_is_the_default() {
    assert!(GlassConfig::from_json("{}").unwrap() == GlassConfig::default());
}

#[test]
fn invalid_json_is_an_error() {
    match GlassConfig::from_json("{ \"boundary_threshold\": \"dark\" }") {
        Err(GlassError::Config(_)) => { }
        other => panic!("Expected a config error, got {:?}", other),
    }
}
