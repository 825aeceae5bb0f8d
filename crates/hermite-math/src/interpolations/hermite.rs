//! Cubic Hermite spline with explicit tangents.
//!
//! Each segment `[x_i, x_{i+1}]` carries the cubic that matches the sample
//! values and the supplied slopes at both ends:
//!
//! ```text
//! p(x) = h00(t)*y_i + h10(t)*h*m_i + h01(t)*y_{i+1} + h11(t)*h*m_{i+1}
//!
//! where t = (x - x_i) / h, h = x_{i+1} - x_i
//!
//! h00(t) = 2t³ - 3t² + 1
//! h10(t) = t³ - 2t² + t
//! h01(t) = -2t³ + 3t²
//! h11(t) = t³ - t²
//! ```
//!
//! The resulting curve interpolates every sample and is C¹ across the knots.

use hermite_core::{
    errors::{Error, Result},
    Real, Size,
};

use super::Interpolation1D;

/// Check the sample-set preconditions shared by every constructor.
///
/// Requires equal lengths, at least two samples, finite and strictly
/// increasing positions, and a finite width for every segment.
pub(crate) fn validate_samples(xs: &[Real], ys: &[Real]) -> Result<()> {
    hermite_core::ensure!(
        xs.len() == ys.len(),
        "positions and values must have the same length ({} != {})",
        xs.len(),
        ys.len()
    );
    hermite_core::ensure!(
        xs.len() >= 2,
        "need at least 2 samples for interpolation, got {}",
        xs.len()
    );
    if let Some(i) = xs.iter().position(|x| !x.is_finite()) {
        hermite_core::fail!("positions must be finite: x[{}] = {}", i, xs[i]);
    }
    if let Some(i) = xs.windows(2).position(|w| !(w[0] < w[1])) {
        hermite_core::fail!(
            "positions must be strictly increasing: x[{}] = {} is not below x[{}] = {}",
            i,
            xs[i],
            i + 1,
            xs[i + 1]
        );
    }
    if let Some(i) = xs.windows(2).position(|w| !(w[1] - w[0]).is_finite()) {
        hermite_core::fail!(
            "segment [{}, {}] between x[{}] and x[{}] is too wide",
            xs[i],
            xs[i + 1],
            i,
            i + 1
        );
    }
    Ok(())
}

/// Piecewise cubic Hermite spline over an owned, immutable sample set.
///
/// `Default` yields an empty spline; any query against it fails with
/// [`Error::UninitializedSpline`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CubicHermiteSpline {
    xs: Vec<Real>,
    ys: Vec<Real>,
    /// Target derivative at each knot
    ms: Vec<Real>,
}

impl CubicHermiteSpline {
    /// Build a spline through `(xs[i], ys[i])` with tangent `ms[i]` at each
    /// knot.  The slices are copied.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the slices have different
    /// lengths, hold fewer than 2 points, or `xs` is not finite and strictly
    /// increasing with finite segment widths.
    pub fn new(xs: &[Real], ys: &[Real], ms: &[Real]) -> Result<Self> {
        validate_samples(xs, ys)?;
        hermite_core::ensure!(
            ms.len() == xs.len(),
            "positions and slopes must have the same length ({} != {})",
            xs.len(),
            ms.len()
        );

        log::trace!(
            "cubic Hermite spline over {} samples on [{}, {}]",
            xs.len(),
            xs[0],
            xs[xs.len() - 1]
        );

        Ok(Self::from_validated(xs, ys, ms))
    }

    /// Copy already validated samples.
    pub(crate) fn from_validated(xs: &[Real], ys: &[Real], ms: &[Real]) -> Self {
        Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            ms: ms.to_vec(),
        }
    }

    /// A spline with no samples.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sample positions.
    pub fn positions(&self) -> &[Real] {
        &self.xs
    }

    /// Sample values.
    pub fn values(&self) -> &[Real] {
        &self.ys
    }

    /// Tangent slopes at the samples.
    pub fn slopes(&self) -> &[Real] {
        &self.ms
    }

    /// Number of samples.
    pub fn len(&self) -> Size {
        self.xs.len()
    }

    /// `true` for a spline built through [`CubicHermiteSpline::empty`].
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// First sample position.
    pub fn x_min(&self) -> Result<Real> {
        self.xs.first().copied().ok_or(Error::UninitializedSpline)
    }

    /// Last sample position.
    pub fn x_max(&self) -> Result<Real> {
        self.xs.last().copied().ok_or(Error::UninitializedSpline)
    }

    /// Index of the segment containing `x`.
    ///
    /// Returns `i` with `xs[i] <= x < xs[i+1]`, or `len() - 1` when `x` is
    /// the last knot.
    ///
    /// # Errors
    /// [`Error::UninitializedSpline`] on an empty spline,
    /// [`Error::OutOfDomain`] if `x` lies outside `[x_min, x_max]` or is NaN.
    pub fn locate(&self, x: Real) -> Result<Size> {
        let min = self.x_min()?;
        let max = self.x_max()?;
        if !(x >= min && x <= max) {
            return Err(Error::OutOfDomain { x, min, max });
        }

        let n = self.xs.len();
        if x == max {
            return Ok(n - 1);
        }

        // Invariant: xs[lo] <= x < xs[hi]
        let mut lo = 0;
        let mut hi = n - 1;
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.xs[mid] <= x {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Ok(lo)
    }

    /// Evaluate the spline at `x`.
    ///
    /// Returns `ys[i]` exactly when `x == xs[i]`.
    ///
    /// # Errors
    /// Same as [`CubicHermiteSpline::locate`].
    pub fn evaluate(&self, x: Real) -> Result<Real> {
        let i = self.locate(x)?;
        if i == self.xs.len() - 1 {
            return Ok(self.ys[i]);
        }

        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        Ok(h00 * self.ys[i]
            + h10 * h * self.ms[i]
            + h01 * self.ys[i + 1]
            + h11 * h * self.ms[i + 1])
    }

    /// First derivative of the spline at `x`.
    ///
    /// At a knot this is the stored slope.
    ///
    /// # Errors
    /// Same as [`CubicHermiteSpline::locate`].
    pub fn derivative(&self, x: Real) -> Result<Real> {
        let i = self.locate(x)?;
        if i == self.xs.len() - 1 {
            return Ok(self.ms[i]);
        }

        let h = self.xs[i + 1] - self.xs[i];
        let t = (x - self.xs[i]) / h;
        let t2 = t * t;

        let dh00 = 6.0 * t2 - 6.0 * t;
        let dh10 = 3.0 * t2 - 4.0 * t + 1.0;
        let dh01 = -6.0 * t2 + 6.0 * t;
        let dh11 = 3.0 * t2 - 2.0 * t;

        Ok((dh00 * self.ys[i] + dh01 * self.ys[i + 1]) / h
            + dh10 * self.ms[i]
            + dh11 * self.ms[i + 1])
    }
}

impl Interpolation1D for CubicHermiteSpline {
    fn value(&self, x: Real) -> Result<Real> {
        self.evaluate(x)
    }

    fn x_min(&self) -> Result<Real> {
        CubicHermiteSpline::x_min(self)
    }

    fn x_max(&self) -> Result<Real> {
        CubicHermiteSpline::x_max(self)
    }
}
