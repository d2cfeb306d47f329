use super::Kernel;

/// Create the fixed 3x3 vertical Sobel kernel.
///
/// Responds to horizontal intensity edges. The weights are not
/// normalized, so the response magnitude scales with the edge contrast.
pub fn sobel_y_kernel() -> Kernel {
    #[rustfmt::skip]
    let weights = vec![
         1.0,  2.0,  1.0,
         0.0,  0.0,  0.0,
        -1.0, -2.0, -1.0,
    ];
    Kernel::from_parts(3, 3, weights)
}

/// Create the fixed 5x5 Gaussian blur kernel.
///
/// The integer weights are divided by 273 so the kernel sums to one and
/// preserves overall image brightness.
pub fn gaussian_kernel() -> Kernel {
    #[rustfmt::skip]
    let weights = [
        1.0,  4.0,  7.0,  4.0, 1.0,
        4.0, 16.0, 26.0, 16.0, 4.0,
        7.0, 26.0, 41.0, 26.0, 7.0,
        4.0, 16.0, 26.0, 16.0, 4.0,
        1.0,  4.0,  7.0,  4.0, 1.0,
    ];
    Kernel::from_parts(5, 5, weights.iter().map(|w| w / 273.0).collect())
}
