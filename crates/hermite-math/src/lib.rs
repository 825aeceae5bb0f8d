//! # hermite-math
//!
//! Piecewise cubic Hermite interpolation over strictly increasing samples,
//! and a monotone slope builder that derives tangents from the data alone.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// 1D interpolation schemes.
pub mod interpolations;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use interpolations::{
    monotone_slopes, CubicHermiteSpline, Interpolation1D, MonotoneCubicBuilder, SlopeLimiter,
    DEFAULT_FLAT_TOLERANCE,
};
