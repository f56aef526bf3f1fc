///
/// Trait implemented by rendering contexts that can report the largest surface they can render to
///
pub trait SurfaceLimits {
    ///
    /// The largest width or height of a rendering surface, or None if the limit can't be determined
    ///
    fn max_surface_dimension(&self) -> Option<usize>;
}

///
/// The largest tile that can be rendered using a context, taking a practical ceiling into account
///
/// Returns None if there's no context or if its limit is unknown.
///
pub fn usable_surface_dimension<TLimits>(limits: Option<&TLimits>, practical_ceiling: usize) -> Option<usize>
where
    TLimits: ?Sized + SurfaceLimits,
{
    limits
        .and_then(|limits| limits.max_surface_dimension())
        .map(|hardware_limit| hardware_limit.min(practical_ceiling))
}

///
/// Decides whether an image of a particular size has to be rendered as a set of tiles
///
/// The image must be tiled if either dimension is larger than the smaller of the hardware limit and the practical
/// ceiling. If there's no rendering context, or its limit can't be determined, this always chooses tiling.
///
pub fn needs_tiled_rendering<TLimits>(width: usize, height: usize, limits: Option<&TLimits>, practical_ceiling: usize) -> bool
where
    TLimits: ?Sized + SurfaceLimits,
{
    match usable_surface_dimension(limits, practical_ceiling) {
        Some(max_dimension) => width > max_dimension || height > max_dimension,
        None                => true,
    }
}
