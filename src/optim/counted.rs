/// A scalar function that counts its own evaluations.
///
/// The solvers report their own `evals`, but a caller that shares one
/// function across several solves, or wants the count independently of the
/// solver, can wrap it here instead of keeping a global counter.
///
/// # Example
///
/// ```
/// use brent1d::optim::{fminbr, CountedFn, FminbrSettings};
///
/// let mut f = CountedFn::new(|x: f64| (x - 1.0).powi(2));
/// let r = fminbr(|x| f.call(x), 0.0, 3.0, &FminbrSettings::default()).unwrap();
/// assert_eq!(f.count(), r.evals);
/// ```
#[derive(Debug, Clone)]
pub struct CountedFn<F> {
    f: F,
    count: usize,
}

impl<F> CountedFn<F> {
    /// Wrap `f` with a zeroed counter.
    pub fn new(f: F) -> Self {
        Self { f, count: 0 }
    }

    /// Evaluate the wrapped function and bump the counter.
    #[inline]
    pub fn call<T>(&mut self, x: T) -> T
    where
        F: FnMut(T) -> T,
    {
        self.count += 1;
        (self.f)(x)
    }

    /// Number of evaluations since construction or the last [`reset`](Self::reset).
    pub fn count(&self) -> usize {
        self.count
    }

    /// Zero the counter.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Unwrap the function.
    pub fn into_inner(self) -> F {
        self.f
    }
}
