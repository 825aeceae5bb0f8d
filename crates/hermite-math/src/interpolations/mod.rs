//! 1D interpolation trait and implementations.

use hermite_core::{errors::Result, Real};

/// Cubic Hermite spline over caller-supplied tangents.
pub mod hermite;

/// Monotone slope builder for cubic Hermite splines.
pub mod monotone;

pub use hermite::CubicHermiteSpline;
pub use monotone::{monotone_slopes, MonotoneCubicBuilder, SlopeLimiter, DEFAULT_FLAT_TOLERANCE};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
///
/// Queries outside `[x_min, x_max]` are errors; no implementation
/// extrapolates or clamps.
pub trait Interpolation1D: std::fmt::Debug {
    /// Evaluate the interpolation at `x`.
    fn value(&self, x: Real) -> Result<Real>;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Result<Real>;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Result<Real>;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        match (self.x_min(), self.x_max()) {
            (Ok(lo), Ok(hi)) => x >= lo && x <= hi,
            _ => false,
        }
    }
}
