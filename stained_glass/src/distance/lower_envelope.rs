///
/// A column that forms part of the lower envelope, along with the x position where its parabola becomes the lowest
///
#[derive(Clone, Copy, Debug)]
struct EnvelopeSegment {
    column: usize,
    start:  f64,
}

///
/// The lower envelope of a set of parabolas `f_u(x) = (x - u)^2 + g[u]`, one rooted at each column of a row
///
/// The envelope is rebuilt for every row: the buffer is kept between rows to avoid reallocating it.
///
pub (super) struct LowerEnvelope {
    segments: Vec<EnvelopeSegment>,
}

///
/// The x position where the parabolas with apexes at (p1, v1) and (p2, v2) intersect (p1 must not equal p2)
///
#[inline]
fn parabola_intersection(p1: f64, v1: f64, p2: f64, v2: f64) -> f64 {
    ((p2*p2 - p1*p1) + (v2 - v1)) / (2.0 * (p2 - p1))
}

impl LowerEnvelope {
    ///
    /// Creates an envelope with space for rows of the specified width
    ///
    pub fn with_capacity(width: usize) -> Self {
        LowerEnvelope { segments: Vec::with_capacity(width) }
    }

    ///
    /// Builds the envelope for a row of apex heights (the squared vertical distances for each column)
    ///
    pub fn build(&mut self, heights: &[f64]) {
        self.segments.clear();

        for (column, height) in heights.iter().copied().enumerate() {
            let position    = column as f64;
            let mut start   = f64::NEG_INFINITY;

            // Pop any parabolas that the new one dominates from where they start
            while let Some(last) = self.segments.last().copied() {
                let intersection = parabola_intersection(last.column as f64, heights[last.column], position, height);

                if intersection <= last.start {
                    self.segments.pop();
                } else {
                    start = intersection;
                    break;
                }
            }

            self.segments.push(EnvelopeSegment { column, start });
        }
    }

    ///
    /// Writes the squared distance for every pixel in a row using the envelope built by `build()`
    ///
    pub fn evaluate(&self, heights: &[f64], output: &mut [f64]) {
        let mut segment_idx = 0;

        for (x, distance) in output.iter_mut().enumerate() {
            let position = x as f64;

            while segment_idx + 1 < self.segments.len() && self.segments[segment_idx+1].start < position {
                segment_idx += 1;
            }

            let column  = self.segments[segment_idx].column;
            let dx      = position - (column as f64);

            *distance   = dx*dx + heights[column];
        }
    }
}
