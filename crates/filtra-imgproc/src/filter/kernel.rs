use super::KernelError;

/// A 2D convolution kernel.
///
/// The kernel stores a `width x height` grid of floating point weights,
/// row-major. Both dimensions must be odd so the anchor is the exact
/// center `(width / 2, height / 2)`.
///
/// # Example
///
/// ```rust
/// use filtra_imgproc::filter::Kernel;
///
/// let kernel = Kernel::new(3, 1, vec![0.25, 0.5, 0.25]).unwrap();
/// assert_eq!(kernel.anchor(), (1, 0));
/// ```
pub struct Kernel {
    data: Vec<f32>,
    width: usize,
    height: usize,
}

impl Kernel {
    /// Create a kernel from its weights.
    ///
    /// # Arguments
    ///
    /// * `width` - The width of the kernel, must be odd.
    /// * `height` - The height of the kernel, must be odd.
    /// * `data` - The weights, row-major, of length `width * height`.
    ///
    /// # Errors
    ///
    /// Returns an error if a dimension is even or the data length does not
    /// match the kernel size.
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self, KernelError> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(KernelError::EvenDimensions(width, height));
        }

        if data.len() != width * height {
            return Err(KernelError::InvalidDataLength(data.len(), width * height));
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a kernel without validation. Caller guarantees odd dimensions
    /// and a matching data length.
    pub(crate) fn from_parts(width: usize, height: usize, data: Vec<f32>) -> Self {
        debug_assert!(width % 2 == 1 && height % 2 == 1);
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
        }
    }

    /// The width of the kernel.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of the kernel.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The kernel weights as a row-major slice.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The anchor offset of the kernel center on each axis.
    pub fn anchor(&self) -> (usize, usize) {
        (self.width / 2, self.height / 2)
    }

    /// The weight at kernel position `(kx, ky)`.
    #[inline]
    pub fn weight(&self, kx: usize, ky: usize) -> f32 {
        self.data[ky * self.width + kx]
    }
}
