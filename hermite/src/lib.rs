//! # hermite
//!
//! Piecewise cubic Hermite interpolation with monotone slopes, and the colour
//! gradients built on it.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hermite-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! hermite = "0.1"
//! ```
//!
//! ```rust
//! use hermite::math::CubicHermiteSpline;
//!
//! let xs = [0.0, 64.0, 168.0, 257.0, 343.0, 399.0];
//! let red = [0.0, 32.0, 237.0, 255.0, 0.0, 0.0];
//! let spline = CubicHermiteSpline::monotone(&xs, &red)?;
//! assert_eq!(spline.evaluate(168.0)?, 237.0);
//! assert!(spline.evaluate(400.0).is_err());
//! # Ok::<(), hermite::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use hermite_core as core;

/// Cubic Hermite and monotone cubic interpolation.
pub use hermite_math as math;

/// Colour gradients over monotone splines.
pub use hermite_palette as palette;

/// The most commonly used items.
pub mod prelude {
    pub use hermite_core::{Error, Real, Result};
    pub use hermite_math::{
        monotone_slopes, CubicHermiteSpline, Interpolation1D, MonotoneCubicBuilder, SlopeLimiter,
    };
    pub use hermite_palette::{Gradient, Rgb};
}
