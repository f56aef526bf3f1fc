use super::region_labels::*;

use crate::boundary::*;
use crate::error::*;

use smallvec::*;

use std::ops::{Range};

///
/// A horizontal run of pixels that belong to a single region
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionSpan {
    /// The ID of the region that this span belongs to
    pub region: u8,

    /// The row containing the span
    pub y: usize,

    /// The pixels covered by the span
    pub x_range: Range<usize>,
}

///
/// A span that has been claimed for the current region but not filled yet
///
struct PendingSpan {
    y:          usize,
    x_range:    Range<usize>,
}

///
/// Claims the maximal run of unvisited pixels containing `x` on row `y`, marking them all as visited
///
#[inline]
fn claim_span(visited: &mut [bool], width: usize, x: usize, y: usize) -> PendingSpan {
    let row         = &mut visited[(y*width)..((y+1)*width)];

    let mut start   = x;
    while start > 0 && !row[start-1] {
        start -= 1;
    }

    let mut end     = x+1;
    while end < width && !row[end] {
        end += 1;
    }

    row[start..end].iter_mut().for_each(|cell| *cell = true);

    PendingSpan { y, x_range: start..end }
}

///
/// The rows above and below a row that are inside the image
///
#[inline]
fn neighbour_rows(y: usize, height: usize) -> SmallVec<[usize; 2]> {
    let mut rows = smallvec![];

    if y > 0 { rows.push(y-1); }
    if y+1 < height { rows.push(y+1); }

    rows
}

///
/// Finds every 4-connected region of non-boundary pixels in a mask, calling `fill_span` for each span of pixels
///
/// Regions are numbered from 0 in the order their first pixel is found by a row-major scan of the image, and every
/// non-boundary pixel is passed to `fill_span` exactly once. Each region is completed before the next one is
/// started. Returns the number of regions, or `TooManyRegions` if there are more regions than there are labels.
///
/// This uses an explicit stack of spans rather than recursion, so the amount of stack space needed doesn't depend
/// on the size of the image.
///
pub fn fill_regions(mask: &BoundaryMask, mut fill_span: impl FnMut(&RegionSpan)) -> Result<usize> {
    let width               = mask.width();
    let height              = mask.height();

    // Boundary pixels start out visited so they're never claimed by a region
    let mut visited         = mask.grid().cells().to_vec();
    let mut work_stack      = vec![];
    let mut region_count    = 0;

    for y in 0..height {
        for x in 0..width {
            if visited[y*width + x] {
                continue;
            }

            // Found the first pixel of a new region
            if region_count >= MAX_REGIONS {
                log::warn!("Boundary mask contains more than {} regions", MAX_REGIONS);
                return Err(GlassError::TooManyRegions { limit: MAX_REGIONS });
            }

            let region      = region_count as u8;
            region_count    += 1;

            work_stack.push(claim_span(&mut visited, width, x, y));

            while let Some(span) = work_stack.pop() {
                fill_span(&RegionSpan { region, y: span.y, x_range: span.x_range.clone() });

                // Claim any unvisited pixels touching this span in the rows above and below
                for neighbour_y in neighbour_rows(span.y, height) {
                    let mut neighbour_x = span.x_range.start;

                    while neighbour_x < span.x_range.end {
                        if visited[neighbour_y*width + neighbour_x] {
                            neighbour_x += 1;
                        } else {
                            let neighbour   = claim_span(&mut visited, width, neighbour_x, neighbour_y);
                            neighbour_x     = neighbour.x_range.end;

                            work_stack.push(neighbour);
                        }
                    }
                }
            }
        }
    }

    Ok(region_count)
}
