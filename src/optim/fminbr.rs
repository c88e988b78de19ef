use crate::traits::FloatScalar;

use super::{OptimError, ScalarMinResult};

/// Settings for [`fminbr`].
#[derive(Debug, Clone, Copy)]
pub struct FminbrSettings<T> {
    /// Absolute tolerance on the minimizer location. A third of it is
    /// added to the relative term `sqrt(eps)·|x|`.
    pub tol: T,
    /// Maximum number of iterations. The defaults cover golden-section
    /// search over the full exponent range of the type, so `tol = 0` still
    /// converges.
    pub max_iter: usize,
}

impl Default for FminbrSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: 3200,
        }
    }
}

impl Default for FminbrSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-5,
            max_iter: 450,
        }
    }
}

/// Brent's method for bracketed scalar minimization.
///
/// Combines golden-section search with successive parabolic interpolation.
/// Tracks `x`, the lowest point so far; `w`, the second lowest; and `v`,
/// the previous `w`. A parabola through the three is trusted only when its
/// vertex lies inside the bracket and the step is less than half the step
/// taken two iterations ago; otherwise the step is a golden-section cut of
/// the larger half of the bracket. Points closer than the effective
/// tolerance `sqrt(eps)·|x| + tol/3` to `x` are never evaluated.
///
/// A minimum on the bracket boundary is approached to within tolerance of
/// that endpoint. If `f` has several local minima in `[a, b]`, one of them
/// is returned.
///
/// # Arguments
///
/// * `f` — function to minimize
/// * `a`, `b` — bracket endpoints, in either order
/// * `settings` — tolerance and iteration limit
///
/// # Errors
///
/// Returns [`OptimError::InvalidTolerance`] if `settings.tol` is negative or NaN.
/// Returns [`OptimError::InvalidInterval`] if the bracket is empty or not finite.
/// Returns [`OptimError::NotFinite`] if a function value is NaN or infinity.
/// Returns [`OptimError::MaxIterations`] if convergence is not achieved.
///
/// # Example
///
/// ```
/// use brent1d::optim::{fminbr, FminbrSettings};
///
/// // Minimum of x³ - 2x - 5 on [0, 1] is at √(2/3)
/// let r = fminbr(|x: f64| (x * x - 2.0) * x - 5.0, 0.0, 1.0, &FminbrSettings::default()).unwrap();
/// assert!((r.x - (2.0_f64 / 3.0).sqrt()).abs() < 1e-6);
/// ```
pub fn fminbr<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    a: T,
    b: T,
    settings: &FminbrSettings<T>,
) -> Result<ScalarMinResult<T>, OptimError> {
    let tol = settings.tol;
    if !(tol >= T::zero()) {
        return Err(OptimError::InvalidTolerance);
    }
    if !a.is_finite() || !b.is_finite() {
        return Err(OptimError::InvalidInterval);
    }

    let (mut a, mut b) = if a <= b { (a, b) } else { (b, a) };
    if a >= b {
        return Err(OptimError::InvalidInterval);
    }

    let golden = T::golden_section();
    let sqrt_eps = T::sqrt_epsilon();
    let half = T::lit(0.5);
    let two = T::lit(2.0);
    let three = T::lit(3.0);

    let width = b - a;
    let mut x = if width.is_finite() {
        a + golden * width
    } else {
        a + two * golden * b.half_diff(a)
    };
    let mut fx = f(x);
    let mut evals = 1usize;
    if !fx.is_finite() {
        return Err(OptimError::NotFinite);
    }

    let mut w = x;
    let mut v = x;
    let mut fw = fx;
    let mut fv = fx;

    // d: last step, e: the step before it
    let mut d = T::zero();
    let mut e = T::zero();

    for iter in 0..settings.max_iter {
        let m = a.midpoint(b);
        let tol1 = sqrt_eps * x.abs() + tol / three;
        let tol2 = two * tol1;

        // Both ends of the bracket within tol2 of x
        if (x - m).abs() <= tol2 - b.half_diff(a) {
            solver_debug!(iterations = iter, evals, x = ?x, fx = ?fx, "fminbr converged");
            return Ok(ScalarMinResult {
                x,
                fx,
                iterations: iter,
                evals,
            });
        }

        let mut parabolic = false;

        if e.abs() > tol1 {
            // Vertex of the parabola through (x, fx), (w, fw), (v, fv) is x + p / q
            let r = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * r;
            q = two * (q - r);
            if q > T::zero() {
                p = -p;
            } else {
                q = -q;
            }

            let e_prev = e;
            e = d;

            // q == 0 fails the first test
            if p.abs() < (half * q * e_prev).abs() && p > q * (a - x) && p < q * (b - x) {
                d = p / q;
                let u = x + d;

                // Do not evaluate too close to the bracket ends
                if u - a < tol2 || b - u < tol2 {
                    d = if x < m { tol1 } else { -tol1 };
                }
                parabolic = true;
            }
        }

        if !parabolic {
            // Golden-section cut into the larger of [a, x] and [x, b]. e may
            // overflow on brackets wider than max_value(); d stays finite.
            let far = if x < m { b } else { a };
            e = far - x;
            d = if e.is_finite() {
                golden * e
            } else {
                two * golden * far.half_diff(x)
            };
        }

        let u = if d.abs() >= tol1 {
            x + d
        } else if d > T::zero() {
            x + tol1
        } else {
            x - tol1
        };

        let fu = f(u);
        evals += 1;
        if !fu.is_finite() {
            return Err(OptimError::NotFinite);
        }

        solver_trace!(
            iter,
            parabolic,
            u = ?u,
            fu = ?fu,
            tol = ?tol1,
            "fminbr step"
        );

        if fu <= fx {
            if u < x {
                b = x;
            } else {
                a = x;
            }
            v = w;
            fv = fw;
            w = x;
            fw = fx;
            x = u;
            fx = fu;
        } else {
            if u < x {
                a = u;
            } else {
                b = u;
            }
            if fu <= fw || w == x {
                v = w;
                fv = fw;
                w = u;
                fw = fu;
            } else if fu <= fv || v == x || v == w {
                v = u;
                fv = fu;
            }
        }
    }

    Err(OptimError::MaxIterations)
}
