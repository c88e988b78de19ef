//! # brent1d
//!
//! Brent's bracketed one-dimensional solvers, no-std compatible and
//! allocation-free:
//!
//! - [`optim::zeroin`] finds a root of `f` inside a sign-changing bracket,
//!   mixing bisection with secant and inverse quadratic interpolation.
//! - [`optim::fminbr`] finds a local minimum of `f` inside a bracket, mixing
//!   golden-section search with parabolic interpolation.
//!
//! Neither needs derivatives. Both keep the bracket valid at every step, so
//! they converge at least as fast as bisection / golden section and
//! superlinearly when `f` is smooth near the solution.
//!
//! ## Quick start
//!
//! ```
//! use brent1d::optim::{fminbr, zeroin, FminbrSettings, ZeroinSettings};
//!
//! let root = zeroin(|x: f64| x.cos() - x, 0.0, 1.0, &ZeroinSettings::default()).unwrap();
//! assert!((root.x - 0.7390851332151607).abs() < 1e-10);
//!
//! let min = fminbr(|x: f64| (x.cos() - x).powi(2) - 2.0, -1.0, 3.0, &FminbrSettings::default())
//!     .unwrap();
//! assert!((min.fx + 2.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`optim`] — the two solvers, their settings and result types,
//!   [`optim::OptimError`], and the [`optim::CountedFn`] evaluation counter.
//!
//! - [`traits`] — [`FloatScalar`], the bound on the float types the solvers
//!   accept (`f32`, `f64`).
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` for `OptimError` |
//! | `tracing` | no       | Per-iteration `trace!` and convergence `debug!` events via `tracing` |
//!
//! Without `std` the float math falls back to the pure-Rust `libm` crate,
//! which `num-traits` always pulls in; there is no separate feature for it.

#![cfg_attr(not(feature = "std"), no_std)]

/// Per-iteration event; compiled out without the `tracing` feature.
macro_rules! solver_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    }};
}

/// Convergence event; compiled out without the `tracing` feature.
macro_rules! solver_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    }};
}

pub mod optim;
pub mod traits;

pub use optim::{
    fminbr, zeroin, CountedFn, FminbrSettings, OptimError, RootResult, ScalarMinResult,
    ZeroinSettings,
};
pub use traits::FloatScalar;
