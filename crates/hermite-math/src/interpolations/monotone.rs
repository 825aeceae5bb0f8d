//! Monotone-preserving slopes for cubic Hermite interpolation.
//!
//! Slopes start from the three-point estimate (mean of the adjacent secants,
//! one-sided secants at the ends).  A [`SlopeLimiter`] then corrects them:
//!
//! - **FlatOnly** (default): zero both tangents of every flat segment.
//!   Nothing else is touched, so steep neighbours can still overshoot.
//! - **FritschCarlson**: additionally zero tangents at local extrema and
//!   rescale any tangent pair outside the circle `α² + β² ≤ 9`, which makes
//!   every monotone segment monotone.
//!
//! Evaluation is delegated to [`CubicHermiteSpline`].

use hermite_core::{errors::Result, Real};

use super::hermite::{validate_samples, CubicHermiteSpline};

/// Secant slopes below this magnitude count as flat.
pub const DEFAULT_FLAT_TOLERANCE: Real = 1e-30;

/// Tangent correction applied after the three-point estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlopeLimiter {
    /// Zero the tangents of flat segments only.
    #[default]
    FlatOnly,
    /// Full Fritsch-Carlson monotonicity enforcement.
    FritschCarlson,
}

/// Builds a [`CubicHermiteSpline`] whose slopes are derived from the data.
///
/// # Example
/// ```
/// use hermite_math::{MonotoneCubicBuilder, SlopeLimiter};
///
/// let spline = MonotoneCubicBuilder::new()
///     .with_limiter(SlopeLimiter::FritschCarlson)
///     .build(&[0.0, 1.0, 2.0], &[0.0, 0.0, 1.0])
///     .unwrap();
/// assert_eq!(spline.evaluate(0.5).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonotoneCubicBuilder {
    flat_tolerance: Real,
    limiter: SlopeLimiter,
}

impl Default for MonotoneCubicBuilder {
    fn default() -> Self {
        Self {
            flat_tolerance: DEFAULT_FLAT_TOLERANCE,
            limiter: SlopeLimiter::FlatOnly,
        }
    }
}

impl MonotoneCubicBuilder {
    /// A builder with the default tolerance and the flat-only limiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the magnitude below which a secant slope counts as flat.
    pub fn with_flat_tolerance(mut self, tolerance: Real) -> Self {
        self.flat_tolerance = tolerance;
        self
    }

    /// Set the tangent correction.
    pub fn with_limiter(mut self, limiter: SlopeLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Current flat tolerance.
    pub fn flat_tolerance(&self) -> Real {
        self.flat_tolerance
    }

    /// Current limiter.
    pub fn limiter(&self) -> SlopeLimiter {
        self.limiter
    }

    /// Compute one tangent per sample.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](hermite_core::Error::InvalidArgument)
    /// on the same sample-set violations as [`CubicHermiteSpline::new`], or
    /// if the flat tolerance is negative or NaN.
    pub fn slopes(&self, xs: &[Real], ys: &[Real]) -> Result<Vec<Real>> {
        self.compute(xs, ys).map(|(ms, _)| ms)
    }

    /// Compute slopes and build the spline.
    pub fn build(&self, xs: &[Real], ys: &[Real]) -> Result<CubicHermiteSpline> {
        let (ms, flat) = self.compute(xs, ys)?;

        log::trace!(
            "monotone cubic spline ({:?}) over {} samples on [{}, {}], {} flat segments",
            self.limiter,
            xs.len(),
            xs[0],
            xs[xs.len() - 1],
            flat
        );

        Ok(CubicHermiteSpline::from_validated(xs, ys, &ms))
    }

    /// Slopes plus the number of flat segments found.
    fn compute(&self, xs: &[Real], ys: &[Real]) -> Result<(Vec<Real>, usize)> {
        validate_samples(xs, ys)?;
        hermite_core::ensure!(
            self.flat_tolerance >= 0.0,
            "flat tolerance must be non-negative, got {}",
            self.flat_tolerance
        );

        let n = xs.len();

        // Secant slopes δ_i
        let delta: Vec<Real> = xs
            .windows(2)
            .zip(ys.windows(2))
            .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
            .collect();

        // Three-point estimate, one-sided at the ends
        let mut ms = vec![0.0; n];
        for i in 1..n - 1 {
            ms[i] = (delta[i - 1] + delta[i]) / 2.0;
        }
        ms[0] = delta[0];
        ms[n - 1] = delta[n - 2];

        let flat = match self.limiter {
            SlopeLimiter::FlatOnly => self.zero_flat_segments(&delta, &mut ms),
            SlopeLimiter::FritschCarlson => self.fritsch_carlson(&delta, &mut ms),
        };
        Ok((ms, flat))
    }

    fn is_flat(&self, delta: Real) -> bool {
        delta.abs() < self.flat_tolerance
    }

    fn zero_flat_segments(&self, delta: &[Real], ms: &mut [Real]) -> usize {
        let mut flat = 0;
        for i in 0..delta.len() {
            if self.is_flat(delta[i]) {
                ms[i] = 0.0;
                ms[i + 1] = 0.0;
                flat += 1;
            }
        }
        flat
    }

    fn fritsch_carlson(&self, delta: &[Real], ms: &mut [Real]) -> usize {
        // Local extrema get a horizontal tangent
        for i in 1..delta.len() {
            if delta[i - 1] * delta[i] < 0.0 {
                ms[i] = 0.0;
            }
        }

        let mut flat = 0;
        for i in 0..delta.len() {
            if self.is_flat(delta[i]) {
                ms[i] = 0.0;
                ms[i + 1] = 0.0;
                flat += 1;
            } else {
                let alpha = ms[i] / delta[i];
                let beta = ms[i + 1] / delta[i];
                // Ensure we're inside the monotone region: α² + β² ≤ 9
                let r2 = alpha * alpha + beta * beta;
                if r2 > 9.0 {
                    let tau = 3.0 / r2.sqrt();
                    ms[i] = tau * alpha * delta[i];
                    ms[i + 1] = tau * beta * delta[i];
                }
            }
        }
        flat
    }
}

/// Slopes from the default builder: three-point estimate with flat segments
/// zeroed.
pub fn monotone_slopes(xs: &[Real], ys: &[Real]) -> Result<Vec<Real>> {
    MonotoneCubicBuilder::new().slopes(xs, ys)
}

impl CubicHermiteSpline {
    /// Build a cubic Hermite spline with slopes from [`monotone_slopes`].
    ///
    /// # Errors
    /// Same as [`CubicHermiteSpline::new`].
    pub fn monotone(xs: &[Real], ys: &[Real]) -> Result<Self> {
        MonotoneCubicBuilder::new().build(xs, ys)
    }
}
