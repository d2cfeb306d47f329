/// An error type for the grid module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Error when the grid has a zero dimension.
    #[error("Grid dimensions must be non-zero, got {0}x{1}")]
    ZeroSizedGrid(usize, usize),

    /// Error when the data length does not match the grid size.
    #[error("Data length ({0}) does not match the grid size ({1})")]
    InvalidDataLength(usize, usize),

    /// Error when source and destination sizes do not match.
    #[error("Source size ({0}x{1}) does not match destination size ({2}x{3})")]
    SizeMismatch(usize, usize, usize, usize),

    /// Error when a pixel coordinate is out of bounds.
    #[error("Pixel ({0}, {1}) is out of bounds for grid {2}x{3}")]
    PixelOutOfBounds(usize, usize, usize, usize),
}
