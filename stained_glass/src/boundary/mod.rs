mod boundary_mask;

pub use boundary_mask::*;
