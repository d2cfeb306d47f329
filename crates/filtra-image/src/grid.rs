use crate::error::GridError;

/// Grid size in pixels
///
/// A struct to represent the size of a pixel grid.
///
/// # Examples
///
/// ```
/// use filtra_image::GridSize;
///
/// let grid_size = GridSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(grid_size.width, 10);
/// assert_eq!(grid_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSize {
    /// Width of the grid in pixels
    pub width: usize,
    /// Height of the grid in pixels
    pub height: usize,
}

impl From<[usize; 2]> for GridSize {
    fn from(size: [usize; 2]) -> Self {
        GridSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents a raster image as a rectangular grid of packed pixels.
///
/// Pixels are stored row-major, one packed `0xAARRGGBB` value per cell.
/// Coordinates are zero-based `(x, y)` with `x` the column and `y` the row.
#[derive(Clone)]
pub struct PixelGrid {
    size: GridSize,
    data: Vec<u32>,
}

impl PixelGrid {
    /// Create a new pixel grid from packed pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in pixels.
    /// * `data` - The packed pixel data, row-major.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero, or if the data length
    /// does not match `width * height`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtra_image::{GridSize, PixelGrid};
    ///
    /// let grid = PixelGrid::new(
    ///     GridSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u32; 10 * 20],
    /// ).unwrap();
    ///
    /// assert_eq!(grid.width(), 10);
    /// assert_eq!(grid.height(), 20);
    /// ```
    pub fn new(size: GridSize, data: Vec<u32>) -> Result<Self, GridError> {
        if size.width == 0 || size.height == 0 {
            return Err(GridError::ZeroSizedGrid(size.width, size.height));
        }

        if data.len() != size.width * size.height {
            return Err(GridError::InvalidDataLength(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new pixel grid filled with a single packed value.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the grid in pixels.
    /// * `val` - The packed pixel value to fill the grid with.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn from_size_val(size: GridSize, val: u32) -> Result<Self, GridError> {
        let data = vec![val; size.width * size.height];
        Self::new(size, data)
    }

    /// The size of the grid in pixels.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The width of the grid in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the grid in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The packed pixel data as a row-major slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    /// The packed pixel data as a mutable row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [u32] {
        &mut self.data
    }

    /// Get the packed pixel value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is out of bounds.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<u32, GridError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(GridError::PixelOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }

        Ok(self.data[y * self.size.width + x])
    }

    /// Set the packed pixel value at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinate is out of bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, val: u32) -> Result<(), GridError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(GridError::PixelOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }

        self.data[y * self.size.width + x] = val;

        Ok(())
    }
}
