//! Counted, finiteness-checked evaluation of the caller's function.
//!
//! Every phase evaluates `f` through one [`Evaluator`] so a single call
//! reports one evaluation total across clustering and refinement.

use super::errors::RootFindingError;


pub(crate) struct Evaluator<F> {
    func: F,
    evaluations: usize,
}

impl<F> Evaluator<F>
where F: FnMut(f64) -> f64 {
    pub(crate) fn new(func: F) -> Self {
        Self { func, evaluations: 0 }
    }

    /// Evaluates `f(x)`.
    ///
    /// # Errors
    /// - [`RootFindingError::NonFiniteEvaluation`] if `f(x)` is NaN or inf.
    #[inline]
    pub(crate) fn eval(&mut self, x: f64) -> Result<f64, RootFindingError> {
        self.evaluations += 1;
        let fx = (self.func)(x);
        if !fx.is_finite() {
            return Err(RootFindingError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    }

    #[inline]
    pub(crate) fn evaluations(&self) -> usize {
        self.evaluations
    }
}
