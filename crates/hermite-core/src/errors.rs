//! Error types for hermite-rs.
//!
//! Every contract violation of the spline engine is reported through a
//! single `thiserror`-derived enum.  Construction preconditions go through the
//! [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros defined here.

use thiserror::Error;

use crate::Real;

/// The top-level error type used throughout hermite-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A construction precondition was violated: too few samples, sequence
    /// lengths that disagree, or positions that are not strictly increasing.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A query fell outside the closed sample domain.
    #[error("query x = {x} outside interpolation domain [{min}, {max}]")]
    OutOfDomain {
        /// The rejected query.
        x: Real,
        /// First sample position.
        min: Real,
        /// Last sample position.
        max: Real,
    },

    /// Evaluation was attempted on a spline that holds no samples.
    #[error("spline has no samples")]
    UninitializedSpline,
}

/// Shorthand `Result` type used throughout hermite-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hermite_core::{ensure, errors::Error};
/// fn positive(x: f64) -> hermite_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::InvalidArgument(...))` immediately.
///
/// # Example
/// ```
/// use hermite_core::{fail, errors::Error};
/// fn always_err() -> hermite_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidArgument(format!($($msg)*)))
    };
}
