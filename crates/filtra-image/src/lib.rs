#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// pixel grid representation of a raster image.
pub mod grid;

/// Error types for the grid module.
pub mod error;

/// Packed ARGB pixel helpers.
pub mod pixel;

pub use crate::error::GridError;
pub use crate::grid::{GridSize, PixelGrid};
