use filtra_image::{pixel, GridError, PixelGrid};
use rayon::prelude::*;

use super::{kernels, FilterError, Kernel};

/// Convolve a pixel grid with a kernel.
///
/// For every pixel, computes the weighted sum of the kernel window
/// centered on it, independently for each of the four channels (alpha
/// included). Window taps that fall outside the grid are clamped to the
/// nearest edge pixel. Channel sums are rounded and clamped to 0-255
/// before repacking.
///
/// # Arguments
///
/// * `src` - The source grid.
/// * `dst` - The destination grid (will be overwritten).
/// * `kernel` - The convolution kernel.
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes do not match.
pub fn convolve(src: &PixelGrid, dst: &mut PixelGrid, kernel: &Kernel) -> Result<(), FilterError> {
    if src.size() != dst.size() {
        return Err(GridError::SizeMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )
        .into());
    }

    let width = src.width();
    let height = src.height();
    let (anchor_x, anchor_y) = kernel.anchor();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for (x, dst_pixel) in dst_row.iter_mut().enumerate() {
                let mut sum = [0.0f32; 4];
                for ky in 0..kernel.height() {
                    // clamp-to-edge: out-of-bounds taps reuse the nearest edge pixel
                    let sy = (y + ky).saturating_sub(anchor_y).min(height - 1);
                    for kx in 0..kernel.width() {
                        let sx = (x + kx).saturating_sub(anchor_x).min(width - 1);
                        let weight = kernel.weight(kx, ky);
                        let channels = pixel::unpack(src_data[sy * width + sx]);
                        for (acc, &ch) in sum.iter_mut().zip(channels.iter()) {
                            *acc += weight * f32::from(ch);
                        }
                    }
                }

                let mut out = [0u8; 4];
                for (o, &acc) in out.iter_mut().zip(sum.iter()) {
                    *o = acc.round().clamp(0.0, 255.0) as u8;
                }
                *dst_pixel = pixel::pack(out);
            }
        });

    Ok(())
}

/// Apply the fixed 3x3 vertical Sobel filter to a pixel grid.
///
/// # Arguments
///
/// * `src` - The source grid.
/// * `dst` - The destination grid (will be overwritten).
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes do not match.
pub fn sobel_y(src: &PixelGrid, dst: &mut PixelGrid) -> Result<(), FilterError> {
    convolve(src, dst, &kernels::sobel_y_kernel())
}

/// Blur a pixel grid with the fixed 5x5 Gaussian kernel.
///
/// # Arguments
///
/// * `src` - The source grid.
/// * `dst` - The destination grid (will be overwritten).
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes do not match.
pub fn gaussian_blur(src: &PixelGrid, dst: &mut PixelGrid) -> Result<(), FilterError> {
    convolve(src, dst, &kernels::gaussian_kernel())
}

#[cfg(test)]
mod tests {
    use super::*;
    use filtra_image::GridSize;

    #[test]
    fn test_convolve_size_mismatch() -> Result<(), FilterError> {
        let src = PixelGrid::from_size_val([4, 4].into(), 0)?;
        let mut dst = PixelGrid::from_size_val([4, 3].into(), 0)?;

        let res = convolve(&src, &mut dst, &kernels::gaussian_kernel());
        assert_eq!(
            res.err(),
            Some(FilterError::Grid(GridError::SizeMismatch(4, 4, 4, 3)))
        );
        Ok(())
    }

    #[test]
    fn test_gaussian_blur_uniform_identity() -> Result<(), FilterError> {
        // the kernel sums to one, so a flat image must come back unchanged
        let color = pixel::pack([0xFF, 100, 150, 200]);
        let size = GridSize {
            width: 7,
            height: 7,
        };
        let src = PixelGrid::from_size_val(size, color)?;
        let mut dst = PixelGrid::from_size_val(size, 0)?;

        gaussian_blur(&src, &mut dst)?;

        assert!(dst.as_slice().iter().all(|&p| p == color));
        Ok(())
    }

    #[test]
    fn test_gaussian_blur_averages_neighborhood() -> Result<(), FilterError> {
        let size = GridSize {
            width: 9,
            height: 9,
        };
        let mut src = PixelGrid::from_size_val(size, pixel::BLACK)?;
        src.set_pixel(4, 4, pixel::WHITE)?;
        let mut dst = PixelGrid::from_size_val(size, 0)?;

        gaussian_blur(&src, &mut dst)?;

        // center keeps the largest share of the spike: 255 * 41 / 273 = 38.3
        let [_, r, g, b] = pixel::unpack(dst.get_pixel(4, 4)?);
        assert_eq!([r, g, b], [38, 38, 38]);

        // the spike does not reach past the 5x5 window
        let [_, r, g, b] = pixel::unpack(dst.get_pixel(7, 4)?);
        assert_eq!([r, g, b], [0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_sobel_y_banded_image() -> Result<(), FilterError> {
        // top half one gray level, bottom half another
        let top = pixel::pack([0xFF, 120, 120, 120]);
        let bottom = pixel::pack([0xFF, 100, 100, 100]);
        let size = GridSize {
            width: 6,
            height: 6,
        };
        let data = (0..size.height)
            .flat_map(|y| {
                let band = if y < 3 { top } else { bottom };
                std::iter::repeat(band).take(size.width)
            })
            .collect();
        let src = PixelGrid::new(size, data)?;
        let mut dst = PixelGrid::from_size_val(size, 0)?;

        sobel_y(&src, &mut dst)?;

        for y in 0..size.height {
            for x in 0..size.width {
                // response of 4 * (120 - 100) = 80 exactly on the band
                // boundary rows, zero elsewhere; the flat alpha channel
                // always sums to zero
                let expected = if y == 2 || y == 3 {
                    pixel::pack([0, 80, 80, 80])
                } else {
                    0
                };
                assert_eq!(dst.get_pixel(x, y)?, expected, "pixel ({x}, {y})");
            }
        }
        Ok(())
    }

    #[test]
    fn test_sobel_y_clamps_response() -> Result<(), FilterError> {
        // a white over black edge saturates the channel range
        let size = GridSize {
            width: 5,
            height: 4,
        };
        let data = (0..size.height)
            .flat_map(|y| {
                let band = if y < 2 { pixel::WHITE } else { pixel::BLACK };
                std::iter::repeat(band).take(size.width)
            })
            .collect();
        let src = PixelGrid::new(size, data)?;
        let mut dst = PixelGrid::from_size_val(size, 0)?;

        sobel_y(&src, &mut dst)?;

        // 4 * 255 overflows and must clamp to 255 on the boundary rows
        assert_eq!(dst.get_pixel(2, 1)?, pixel::pack([0, 255, 255, 255]));
        assert_eq!(dst.get_pixel(2, 2)?, pixel::pack([0, 255, 255, 255]));
        Ok(())
    }
}
