use super::distance_field::*;

use crate::boundary::*;
use crate::grid::*;

///
/// Computes the squared distance from every pixel to the nearest boundary pixel in the same column
///
/// Columns without any boundary pixels are filled with the squared sentinel distance.
///
pub (super) fn vertical_squared_distances(mask: &BoundaryMask) -> Grid<f64> {
    let width       = mask.width();
    let height      = mask.height();
    let mut result  = Grid::filled(width, height, INFINITE_SQUARED_DISTANCE);
    let mut column  = vec![INFINITE_DISTANCE; height];
    let boundary    = mask.grid().cells();

    for x in 0..width {
        // Forward sweep: distance to the nearest boundary above (or on) each pixel
        let mut running = INFINITE_DISTANCE;
        for (y, is_boundary) in boundary.iter().skip(x).step_by(width).enumerate() {
            running = if *is_boundary {
                0.0
            } else if running >= INFINITE_DISTANCE {
                INFINITE_DISTANCE
            } else {
                running + 1.0
            };

            column[y] = running;
        }

        // Backward sweep: take the boundary below into account
        for y in (0..height.saturating_sub(1)).rev() {
            let below = column[y+1];

            if below < INFINITE_DISTANCE {
                column[y] = column[y].min(below + 1.0);
            }
        }

        // Store the squared result
        let cells = result.cells_mut();
        for y in 0..height {
            cells[y*width + x] = column[y] * column[y];
        }
    }

    result
}
