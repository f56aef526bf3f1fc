use super::region_labels::*;
use super::region_palette::*;
use super::span_fill::*;

use crate::boundary::*;
use crate::config::*;
use crate::distance::*;
use crate::error::*;
use crate::grid::*;
use crate::render::*;

///
/// The result of segmenting and shading an image on the CPU
///
#[derive(Clone, Debug)]
pub struct ShadedRegions {
    /// The region each pixel belongs to
    pub labels: RegionLabels,

    /// The base colour of each region
    pub colors: RegionColorTable,

    /// The shaded image (boundary pixels are drawn with the leading colour)
    pub image: RgbaImage,
}

///
/// Labels every non-boundary pixel in a mask with the ID of the region it belongs to
///
pub fn segment_regions(mask: &BoundaryMask) -> Result<RegionLabels> {
    let mut labels      = Grid::filled(mask.width(), mask.height(), BOUNDARY_LABEL);
    let width           = mask.width();

    let region_count    = fill_regions(mask, |span| {
        let row_start = span.y * width;
        labels.cells_mut()[(row_start + span.x_range.start)..(row_start + span.x_range.end)]
            .iter_mut()
            .for_each(|label| *label = span.region);
    })?;

    log::debug!("Found {} regions in {}x{} mask", region_count, mask.width(), mask.height());

    Ok(RegionLabels::from_grid(labels, region_count))
}

///
/// Segments a mask into regions, assigns each region a colour and shades every pixel as it is filled
///
/// The distance field must have the same dimensions as the mask. `preview_scale` scales the falloff distance of
/// the edge shading.
///
pub fn segment_and_shade(mask: &BoundaryMask, distance: &DistanceField, config: &GlassConfig, preview_scale: f64) -> Result<ShadedRegions> {
    mask.grid().check_same_size(distance.squared_distances())?;

    let width           = mask.width();
    let height          = mask.height();
    let squared         = distance.squared_distances().cells();
    let mut labels      = Grid::filled(width, height, BOUNDARY_LABEL);
    let mut colors      = RegionColorTable::empty();
    let mut image       = RgbaImage::filled(width, height, config.leading_color);

    let region_count    = fill_regions(mask, |span| {
        let region      = span.region as usize;
        let base_color  = config.palette.region_color(region);

        if region == colors.len() {
            colors.push(base_color);
        }

        let row_start   = span.y * width;
        let label_cells = labels.cells_mut();

        for x in span.x_range.clone() {
            let idx         = row_start + x;
            label_cells[idx] = span.region;

            image.set_pixel(x, span.y, config.edge.shade_pixel(base_color, squared[idx], preview_scale, config.region_alpha));
        }
    })?;

    log::debug!("Shaded {} regions in {}x{} image", region_count, width, height);

    Ok(ShadedRegions {
        labels: RegionLabels::from_grid(labels, region_count),
        colors: colors,
        image:  image,
    })
}
