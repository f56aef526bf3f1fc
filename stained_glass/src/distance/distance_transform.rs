use super::column_pass::*;
use super::lower_envelope::*;
use super::distance_field::*;

use crate::boundary::*;

///
/// Computes the exact squared Euclidean distance from every pixel in a mask to the nearest boundary pixel
///
/// Runs in time and extra space proportional to the number of pixels in the mask.
///
pub fn distance_transform(mask: &BoundaryMask) -> DistanceField {
    let width       = mask.width();
    let height      = mask.height();

    // Pass 1: vertical distances in each column
    let mut squared = vertical_squared_distances(mask);

    if width == 0 || height == 0 {
        return DistanceField::from_squared_distances(squared);
    }

    // Pass 2: lower envelope of the column parabolas along each row
    #[cfg(feature="multithreading")]
    {
        use rayon::prelude::*;

        squared.cells_mut()
            .par_chunks_mut(width)
            .for_each_init(|| (LowerEnvelope::with_capacity(width), vec![0.0; width]), |(envelope, heights), row| {
                heights.copy_from_slice(row);
                envelope.build(heights);
                envelope.evaluate(heights, row);
            });
    }

    #[cfg(not(feature="multithreading"))]
    {
        let mut envelope    = LowerEnvelope::with_capacity(width);
        let mut heights     = vec![0.0; width];

        for row in squared.cells_mut().chunks_exact_mut(width) {
            heights.copy_from_slice(row);
            envelope.build(&heights);
            envelope.evaluate(&heights, row);
        }
    }

    log::trace!("Distance transform of {}x{} mask complete", width, height);

    DistanceField::from_squared_distances(squared)
}
