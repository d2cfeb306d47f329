//! Binary morphology operations
//!
//! Dilation, erosion and closing over a fixed 7x7 neighborhood with
//! black/white semantics: any pixel that is not opaque black counts as
//! lit.

mod ops;
pub use ops::*;
