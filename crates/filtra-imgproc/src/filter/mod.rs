//! Convolution filter operations
//!
//! This module provides fixed-kernel 2D convolution over pixel grids.

/// Filter kernels
pub mod kernels;

/// Convolution kernel type
mod kernel;
pub use kernel::*;

/// Filter errors
mod error;
pub use error::*;

/// Filter operations
mod ops;
pub use ops::*;
