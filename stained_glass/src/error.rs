use thiserror::Error;

///
/// Errors that can occur while segmenting or rendering a stained-glass image
///
#[derive(Debug, Error)]
pub enum GlassError {
    /// A pixel buffer did not have the length implied by its dimensions
    #[error("pixel buffer for a {width}x{height} image should be {expected} bytes long but was {actual} bytes")]
    BufferSizeMismatch { width: usize, height: usize, expected: usize, actual: usize },

    /// Two grids that are meant to describe the same image have different dimensions
    #[error("expected a {expected_width}x{expected_height} grid but found a {actual_width}x{actual_height} grid")]
    GridSizeMismatch { expected_width: usize, expected_height: usize, actual_width: usize, actual_height: usize },

    /// The boundary mask divides the image into more regions than can be given distinct identifiers
    #[error("the image contains more than {limit} regions")]
    TooManyRegions { limit: usize },

    /// The analytic shading path needs a GPU context, but none was available
    #[error("no GPU context is available for shader rendering")]
    NoGpuContext,

    /// The shader needs a distance field but it wasn't computed
    #[error("the distance field shader was called without a distance field")]
    MissingDistanceField,

    /// Tiles must be at least one pixel wide
    #[error("the maximum tile size must be greater than 0")]
    InvalidTileSize,

    /// A tile does not lie within the image it was meant to be drawn on
    #[error("tile at ({x}, {y}) with size {width}x{height} does not fit in a {full_width}x{full_height} image")]
    TileOutOfBounds { x: usize, y: usize, width: usize, height: usize, full_width: usize, full_height: usize },

    /// A generation request arrived while another one was still running
    #[error("a generation is already in progress")]
    GenerationInProgress,

    /// The configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// The final image could not be encoded as a PNG file
    #[cfg(feature="render_png")]
    #[error("could not encode PNG: {0}")]
    Png(#[from] png::EncodingError),
}

///
/// Result of a stained-glass operation
///
pub type Result<T> = std::result::Result<T, GlassError>;
