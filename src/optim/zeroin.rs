use crate::traits::FloatScalar;

use super::{OptimError, RootResult};

/// Settings for [`zeroin`].
#[derive(Debug, Clone, Copy)]
pub struct ZeroinSettings<T> {
    /// Absolute tolerance on the root location. Added (halved) to the
    /// relative term `2·eps·|x|`; zero requests full precision.
    pub tol: T,
    /// Maximum number of iterations. The defaults cover bisection over the
    /// full exponent range of the type, so `tol = 0` still converges.
    pub max_iter: usize,
}

impl Default for ZeroinSettings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-12,
            max_iter: 2200,
        }
    }
}

impl Default for ZeroinSettings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iter: 300,
        }
    }
}

/// Brent's method for bracketed root finding.
///
/// Keeps three points: `b`, the best estimate so far (smallest `|f|`);
/// `c`, the contrapoint with `f(c)` of opposite sign, so the root is always
/// inside `[b, c]`; and `a`, the previous `b`. Each step tries inverse
/// quadratic interpolation through `a, b, c` (or the secant through `a, b`
/// when only two distinct points exist) and falls back to bisection when
/// the interpolated point leaves the bracket or fails to at least halve
/// the previous step.
///
/// The iteration stops once half the bracket is within
/// `tol_act = 2·eps·|b| + tol/2`, or an exact zero is hit.
///
/// # Arguments
///
/// * `f` — function whose root is sought
/// * `ax`, `bx` — bracket endpoints, in either order; `f(ax)` and `f(bx)`
///   must have opposite signs, or one of them be exactly zero
/// * `settings` — tolerance and iteration limit
///
/// # Errors
///
/// Returns [`OptimError::InvalidTolerance`] if `settings.tol` is negative or NaN.
/// Returns [`OptimError::NotFinite`] if an endpoint or any function value is not finite.
/// Returns [`OptimError::BracketInvalid`] if `f(ax)` and `f(bx)` have the same sign.
/// Returns [`OptimError::MaxIterations`] if convergence is not achieved.
///
/// # Example
///
/// ```
/// use brent1d::optim::{zeroin, ZeroinSettings};
///
/// // Root of x³ - 2x - 5 (Forsythe, Malcolm & Moler)
/// let settings = ZeroinSettings { tol: f64::EPSILON, ..ZeroinSettings::default() };
/// let r = zeroin(|x: f64| (x * x - 2.0) * x - 5.0, 2.0, 3.0, &settings).unwrap();
/// assert!((r.x - 2.0945514815423265).abs() < 1e-12);
/// ```
pub fn zeroin<T: FloatScalar>(
    mut f: impl FnMut(T) -> T,
    ax: T,
    bx: T,
    settings: &ZeroinSettings<T>,
) -> Result<RootResult<T>, OptimError> {
    let tol = settings.tol;
    if !(tol >= T::zero()) {
        return Err(OptimError::InvalidTolerance);
    }
    if !ax.is_finite() || !bx.is_finite() {
        return Err(OptimError::NotFinite);
    }

    let mut a = ax;
    let mut b = bx;
    let mut fa = f(a);
    let mut fb = f(b);
    let mut evals = 2usize;

    if !fa.is_finite() || !fb.is_finite() {
        return Err(OptimError::NotFinite);
    }

    // An endpoint may already be an exact root
    if fa == T::zero() {
        return Ok(RootResult {
            x: a,
            fx: fa,
            iterations: 0,
            evals,
        });
    }
    if fb == T::zero() {
        return Ok(RootResult {
            x: b,
            fx: fb,
            iterations: 0,
            evals,
        });
    }

    if fa.same_sign(fb) {
        return Err(OptimError::BracketInvalid);
    }

    let half = T::lit(0.5);
    let two = T::lit(2.0);
    let three_quarters = T::lit(0.75);

    let mut c = a;
    let mut fc = fa;

    for iter in 0..settings.max_iter {
        let prev_step = b - a;

        // Keep b the best approximation; a follows as the previous point
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol_act = two * T::epsilon() * b.abs() + half * tol;
        let mut new_step = c.half_diff(b);

        if new_step.abs() <= tol_act || fb == T::zero() {
            solver_debug!(iterations = iter, evals, x = ?b, fx = ?fb, "zeroin converged");
            return Ok(RootResult {
                x: b,
                fx: fb,
                iterations: iter,
                evals,
            });
        }

        // Interpolate only if the last step was not already at resolution
        // and moved towards the root. Brackets wider than max_value()
        // bisect until c - b is representable.
        let cb = c - b;
        if cb.is_finite() && prev_step.abs() >= tol_act && fa.abs() > fb.abs() {
            let mut p;
            let mut q;

            if a == c {
                // Secant through a and b
                let t1 = fb / fa;
                p = cb * t1;
                q = T::one() - t1;
            } else {
                // Inverse quadratic through a, b, c
                let qa = fa / fc;
                let t1 = fb / fc;
                let t2 = fb / fa;
                p = t2 * (cb * qa * (qa - t1) - (b - a) * (t1 - T::one()));
                q = (qa - T::one()) * (t1 - T::one()) * (t2 - T::one());
            }

            // Make p non-negative so the step is p / q
            if p > T::zero() {
                q = -q;
            } else {
                p = -p;
            }

            // Accept only if the new point stays well inside [b, c] and the
            // step shrinks below half the previous one
            if p < three_quarters * cb * q - (tol_act * q).abs() * half
                && p < (prev_step * q * half).abs()
            {
                new_step = p / q;
                solver_trace!(iter, x = ?b, step = ?new_step, "zeroin interpolation");
            } else {
                solver_trace!(iter, x = ?b, step = ?new_step, "zeroin bisection");
            }
        } else {
            solver_trace!(iter, x = ?b, step = ?new_step, "zeroin bisection");
        }

        // Never step by less than the tolerance, and always towards c
        if new_step.abs() < tol_act {
            new_step = if c > b { tol_act } else { -tol_act };
        }

        a = b;
        fa = fb;
        b = b + new_step;
        fb = f(b);
        evals += 1;

        if !fb.is_finite() {
            return Err(OptimError::NotFinite);
        }

        // Restore the sign change between b and c
        if fb.same_sign(fc) {
            c = a;
            fc = fa;
        }
    }

    Err(OptimError::MaxIterations)
}
