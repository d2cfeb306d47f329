#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// border handling policies module.
pub mod border;

/// convolution filtering module.
pub mod filter;

/// median filtering module.
pub mod median;

/// binary morphology module.
pub mod morphology;
