use crate::error::*;
use crate::grid::*;

///
/// Label used for boundary pixels, which don't belong to any region
///
pub const BOUNDARY_LABEL: u8 = 255;

///
/// The maximum number of regions that can be labelled (region IDs run from 0 to `MAX_REGIONS-1`)
///
pub const MAX_REGIONS: usize = BOUNDARY_LABEL as usize;

///
/// The region that each pixel of an image belongs to
///
#[derive(Clone, Debug, PartialEq)]
pub struct RegionLabels {
    labels:         Grid<u8>,
    region_count:   usize,
}

impl RegionLabels {
    ///
    /// Creates a set of region labels from a grid of labels
    ///
    pub fn from_grid(labels: Grid<u8>, region_count: usize) -> Self {
        RegionLabels { labels, region_count }
    }

    /// The width of the labelled image
    #[inline] pub fn width(&self) -> usize { self.labels.width() }

    /// The height of the labelled image
    #[inline] pub fn height(&self) -> usize { self.labels.height() }

    ///
    /// The number of regions that were found in the whole image
    ///
    /// For a cropped set of labels, this is still the count for the image it was cut from.
    ///
    #[inline] pub fn region_count(&self) -> usize { self.region_count }

    /// The grid of raw labels (`BOUNDARY_LABEL` for boundary pixels)
    #[inline] pub fn grid(&self) -> &Grid<u8> { &self.labels }

    ///
    /// The raw label of a pixel (`BOUNDARY_LABEL` for boundary pixels or positions outside of the image)
    ///
    #[inline]
    pub fn label(&self, x: usize, y: usize) -> u8 {
        self.labels.get(x, y).copied().unwrap_or(BOUNDARY_LABEL)
    }

    ///
    /// The region that a pixel belongs to, or None if it's a boundary pixel
    ///
    #[inline]
    pub fn region_at(&self, x: usize, y: usize) -> Option<usize> {
        match self.label(x, y) {
            BOUNDARY_LABEL  => None,
            region          => Some(region as usize),
        }
    }

    ///
    /// Copies the labels for a rectangular window of the image
    ///
    pub fn crop(&self, offset_x: usize, offset_y: usize, width: usize, height: usize) -> Result<RegionLabels> {
        Ok(RegionLabels {
            labels:         self.labels.crop(offset_x, offset_y, width, height)?,
            region_count:   self.region_count,
        })
    }
}
