use filtra_image::pixel;

/// How pixels outside a filter's interior domain are written.
///
/// The median and morphology passes only compute pixels whose full
/// neighborhood lies inside the grid. Every remaining border pixel is
/// resolved by this policy instead of being left undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderPolicy {
    /// Copy the source pixel unchanged.
    #[default]
    Source,

    /// Fill with opaque black.
    Black,
}

impl BorderPolicy {
    #[inline]
    pub(crate) fn apply(self, src_pixel: u32) -> u32 {
        match self {
            BorderPolicy::Source => src_pixel,
            BorderPolicy::Black => pixel::BLACK,
        }
    }
}
