//! # hermite-palette
//!
//! Colour gradients whose channels are monotone cubic Hermite splines.
//! Spline output is clamped to the channel range here, never inside the
//! interpolation engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// RGB gradients and the reference palette.
pub mod gradient;

pub use gradient::{Gradient, Rgb, REFERENCE_COLORS, REFERENCE_STOPS};
