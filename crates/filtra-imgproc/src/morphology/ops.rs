use filtra_image::{pixel, GridError, PixelGrid};
use rayon::prelude::*;

use crate::border::BorderPolicy;

/// Radius of the fixed 7x7 structuring element.
const RADIUS: usize = 3;

/// Iterate the 7x7 window centered on `(x, y)`.
///
/// Caller guarantees the window lies fully inside the grid.
#[inline]
fn window(src_data: &[u32], width: usize, x: usize, y: usize) -> impl Iterator<Item = u32> + '_ {
    (y - RADIUS..=y + RADIUS)
        .flat_map(move |wy| (x - RADIUS..=x + RADIUS).map(move |wx| src_data[wy * width + wx]))
}

#[inline]
fn is_lit(p: u32) -> bool {
    p != pixel::BLACK
}

/// Dilate a pixel grid over the fixed 7x7 neighborhood.
///
/// Dilation grows white regions: an interior pixel becomes white when
/// any of the 49 window pixels (center included) is lit, black
/// otherwise. Pixels within three of an edge have no full window and are
/// resolved by `border`; grids smaller than 7x7 are entirely border.
///
/// # Arguments
///
/// * `src` - The source grid.
/// * `dst` - The destination grid (will be overwritten).
/// * `border` - The policy for pixels without a full window.
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes do not match.
pub fn dilate(src: &PixelGrid, dst: &mut PixelGrid, border: BorderPolicy) -> Result<(), GridError> {
    if src.size() != dst.size() {
        return Err(GridError::SizeMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let width = src.width();
    let height = src.height();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for (x, dst_pixel) in dst_row.iter_mut().enumerate() {
                if y < RADIUS || y + RADIUS >= height || x < RADIUS || x + RADIUS >= width {
                    *dst_pixel = border.apply(src_data[y * width + x]);
                } else if window(src_data, width, x, y).any(is_lit) {
                    *dst_pixel = pixel::WHITE;
                } else {
                    *dst_pixel = pixel::BLACK;
                }
            }
        });

    Ok(())
}

/// Erode a pixel grid over the fixed 7x7 neighborhood.
///
/// Erosion shrinks white regions: an interior pixel stays white only
/// when all 49 window pixels (center included) are lit, black otherwise.
/// Pixels within three of an edge have no full window and are resolved
/// by `border`; grids smaller than 7x7 are entirely border.
///
/// # Arguments
///
/// * `src` - The source grid.
/// * `dst` - The destination grid (will be overwritten).
/// * `border` - The policy for pixels without a full window.
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes do not match.
pub fn erode(src: &PixelGrid, dst: &mut PixelGrid, border: BorderPolicy) -> Result<(), GridError> {
    if src.size() != dst.size() {
        return Err(GridError::SizeMismatch(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    let width = src.width();
    let height = src.height();
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, dst_row)| {
            for (x, dst_pixel) in dst_row.iter_mut().enumerate() {
                if y < RADIUS || y + RADIUS >= height || x < RADIUS || x + RADIUS >= width {
                    *dst_pixel = border.apply(src_data[y * width + x]);
                } else if window(src_data, width, x, y).all(is_lit) {
                    *dst_pixel = pixel::WHITE;
                } else {
                    *dst_pixel = pixel::BLACK;
                }
            }
        });

    Ok(())
}

/// Closing: dilation followed by erosion.
///
/// Fills small black gaps surrounded by white while approximately
/// preserving large-scale shape. Both passes use the same border policy.
///
/// # Arguments
///
/// * `src` - The source grid.
/// * `dst` - The destination grid (will be overwritten).
/// * `border` - The policy for pixels without a full window.
///
/// # Errors
///
/// Returns an error if `src` and `dst` sizes do not match.
pub fn close(src: &PixelGrid, dst: &mut PixelGrid, border: BorderPolicy) -> Result<(), GridError> {
    let mut dilated = PixelGrid::from_size_val(src.size(), pixel::BLACK)?;
    dilate(src, &mut dilated, border)?;
    erode(&dilated, dst, border)
}
