use super::analytic_shader::*;
use super::distance_field_shader::*;
use super::region_shader::*;
use super::shader_context::*;

use crate::error::*;

use std::sync::*;

///
/// Picks the region shader to use: the analytic shader if there's a shader context, otherwise the CPU shader
///
pub fn select_region_shader(context: Option<Arc<dyn ShaderContext>>) -> Box<dyn RegionShader> {
    match AnalyticShader::with_context(context) {
        Ok(analytic)                    => {
            log::debug!("Using the analytic region shader");
            Box::new(analytic)
        }

        Err(GlassError::NoGpuContext)   => {
            log::info!("No GPU context available: falling back to the distance field shader");
            Box::new(DistanceFieldShader::new())
        }

        Err(err)                        => {
            log::warn!("Could not create the analytic region shader ({}): falling back to the distance field shader", err);
            Box::new(DistanceFieldShader::new())
        }
    }
}
