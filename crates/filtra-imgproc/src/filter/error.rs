use filtra_image::GridError;

/// An error type for malformed convolution kernels.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum KernelError {
    /// Error when a kernel dimension is even, so no center anchor exists.
    #[error("Kernel dimensions must be odd, got {0}x{1}")]
    EvenDimensions(usize, usize),

    /// Error when the weight data length does not match the kernel size.
    #[error("Kernel data length ({0}) does not match the kernel size ({1})")]
    InvalidDataLength(usize, usize),
}

/// An error type for convolution filter operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// Error from the underlying pixel grid.
    #[error(transparent)]
    Grid(#[from] GridError),

    /// Error from a malformed kernel.
    #[error(transparent)]
    Kernel(#[from] KernelError),
}
