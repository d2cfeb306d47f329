//! Helpers for packed `0xAARRGGBB` pixel values.

/// Fully opaque black.
pub const BLACK: u32 = 0xFF00_0000;

/// Fully opaque white.
pub const WHITE: u32 = 0xFFFF_FFFF;

/// Split a packed pixel into its `[A, R, G, B]` channels.
#[inline]
pub fn unpack(pixel: u32) -> [u8; 4] {
    [
        (pixel >> 24) as u8,
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
    ]
}

/// Pack `[A, R, G, B]` channels into a pixel value.
#[inline]
pub fn pack(channels: [u8; 4]) -> u32 {
    (u32::from(channels[0]) << 24)
        | (u32::from(channels[1]) << 16)
        | (u32::from(channels[2]) << 8)
        | u32::from(channels[3])
}
