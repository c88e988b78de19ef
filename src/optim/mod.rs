//! Bracketed one-dimensional root finding and minimization.
//!
//! Both solvers are allocation-free and generic over [`FloatScalar`]
//! (`f32`, `f64`). They take the function as an `FnMut(T) -> T` and only
//! ever keep the handful of recent points their interpolation formulas need.
//!
//! # Root finding
//!
//! - [`zeroin`] — Brent's method: bisection guarding secant and inverse
//!   quadratic interpolation. Requires a sign change over the bracket.
//!
//! # Minimization
//!
//! - [`fminbr`] — Brent's method: golden-section search guarding parabolic
//!   interpolation. Finds a local minimum inside the bracket.
//!
//! # Evaluation counting
//!
//! - [`CountedFn`] — wraps a callable and counts how often it is evaluated.
//!
//! # Tolerances
//!
//! The caller's `tol` is an absolute floor. Each iteration adds a relative
//! term scaled by the current estimate:
//!
//! | Solver     | Effective tolerance           |
//! |------------|-------------------------------|
//! | `zeroin`   | `2·eps·|x| + tol/2`           |
//! | `fminbr`   | `sqrt(eps)·|x| + tol/3`       |
//!
//! so `tol = 0` asks for the best precision the float type can resolve.

mod counted;
mod fminbr;
mod zeroin;


pub use counted::CountedFn;
pub use fminbr::{fminbr, FminbrSettings};
pub use zeroin::{zeroin, ZeroinSettings};

/// Errors from the bracketed solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimError {
    /// Maximum number of iterations exceeded.
    MaxIterations,
    /// Bracket endpoints do not have opposite signs.
    BracketInvalid,
    /// Bracket is empty or has a non-finite endpoint.
    InvalidInterval,
    /// Tolerance is negative or NaN.
    InvalidTolerance,
    /// The function returned NaN or infinity.
    NotFinite,
}

impl core::fmt::Display for OptimError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OptimError::MaxIterations => write!(f, "maximum iterations exceeded"),
            OptimError::BracketInvalid => write!(f, "bracket endpoints must have opposite signs"),
            OptimError::InvalidInterval => {
                write!(f, "bracket must be a finite interval of positive width")
            }
            OptimError::InvalidTolerance => write!(f, "tolerance must be non-negative"),
            OptimError::NotFinite => write!(f, "function value is NaN or infinity"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OptimError {}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult<T> {
    /// Approximate root.
    pub x: T,
    /// Function value at the root: `f(x)`.
    pub fx: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}

/// Result of a scalar minimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct ScalarMinResult<T> {
    /// Approximate minimizer.
    pub x: T,
    /// Function value at the minimizer: `f(x)`. Smallest value seen.
    pub fx: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
}
