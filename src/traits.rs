use core::fmt::Debug;
use num_traits::Float;

/// Trait for the real floating-point types the solvers operate on.
///
/// Blanket-implemented for every `Float + Debug` type, which in practice
/// means `f32` and `f64`. Transcendental functions come from the system libm
/// under the `std` feature and from the pure-Rust `libm` crate otherwise.
pub trait FloatScalar: Float + Debug {
    /// Convert an `f64` literal into `Self`.
    ///
    /// Lossy for `f32`, which is fine for the small constants used here.
    #[inline]
    fn lit(v: f64) -> Self {
        <Self as num_traits::NumCast>::from(v).unwrap_or_else(Self::nan)
    }

    /// Square root of machine epsilon: the relative resolution of a
    /// minimum's location when only function values are available.
    #[inline]
    fn sqrt_epsilon() -> Self {
        Self::epsilon().sqrt()
    }

    /// Golden-section fraction `(3 - √5) / 2 ≈ 0.381966`.
    #[inline]
    fn golden_section() -> Self {
        (Self::lit(3.0) - Self::lit(5.0).sqrt()) / Self::lit(2.0)
    }

    /// `(self - other) / 2`, finite for any finite pair, including brackets
    /// wider than `max_value()`.
    #[inline]
    fn half_diff(self, other: Self) -> Self {
        let half = Self::lit(0.5);
        let d = half * (self - other);
        if d.is_finite() {
            d
        } else {
            half * self - half * other
        }
    }

    /// `(self + other) / 2`, finite for any finite pair.
    #[inline]
    fn midpoint(self, other: Self) -> Self {
        let half = Self::lit(0.5);
        let m = half * (self + other);
        if m.is_finite() {
            m
        } else {
            half * self + half * other
        }
    }

    /// True when `self` and `other` are both strictly positive or both
    /// strictly negative.
    #[inline]
    fn same_sign(self, other: Self) -> bool {
        (self > Self::zero() && other > Self::zero())
            || (self < Self::zero() && other < Self::zero())
    }
}

impl<T: Float + Debug> FloatScalar for T {}
