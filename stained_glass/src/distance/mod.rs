//!
//! # Distance fields
//!
//! The distance transform computes, for every pixel of a boundary mask, the exact squared Euclidean distance to
//! the nearest boundary pixel. It is the separable two-pass algorithm: each column is first reduced to a 1D
//! vertical distance, then each row takes the lower envelope of the parabolas `(x - u)^2 + g(u)` rooted at every
//! column `u`. Both passes are linear in the number of pixels.
//!
//! Columns with no boundary pixels in them start with a very large sentinel distance, so a mask with no boundary
//! pixels at all produces a field where every value is 'infinite'.
//!

mod column_pass;
mod lower_envelope;
mod distance_field;
mod distance_transform;

pub use distance_field::*;
pub use distance_transform::*;
