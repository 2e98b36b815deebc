//! Phase 2 of the root scan: bracket refinement.
//!
//! False position on a sign-changing bracket, falling back to a bisection
//! step when the chord is flat or its intercept leaves the open bracket.
//! Stops once `|f(c)| < eps` or the bracket is narrower than `eps`; after
//! `max_iter` steps the bracket midpoint is returned.

use super::config::{CommonCfg, impl_common_cfg};
use super::errors::{RootFindingError, ToleranceError};
use super::eval::Evaluator;
use super::interval::Interval;
use super::report::{RefineReport, TerminationReason, ToleranceSatisfied};
use super::signs::strictly_opposite;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum RefineError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bracket: bounds must be finite with lo <= hi. got [{lo}, {hi}]")]
    InvalidBracket { lo: f64, hi: f64 },
}


/// Refinement configuration
///
/// # Fields
/// - `common` : [`CommonCfg`] with `eps` and `max_iter`.
///
/// # Construction
/// - Use [`RefineCfg::new`] then optional setters.
#[derive(Debug, Copy, Clone)]
pub struct RefineCfg {
    common: CommonCfg,
}
impl RefineCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl_common_cfg!(RefineCfg);

impl Default for RefineCfg {
    fn default() -> Self { Self::new() }
}


/// Which update produced the next estimate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Step {
    FalsePosition,
    Bisection,
}


/// False-position point of the chord through `(lo, f_lo)` and `(hi, f_hi)`.
///
/// # Returns
/// - `Some(x)` if `f_hi - f_lo` is well-scaled and `x` lies strictly inside
///   `(lo, hi)`
/// - `None` for a (near-)flat chord, a non-finite intercept, or an intercept
///   outside the bracket
#[inline]
fn false_position(
    (lo, f_lo): (f64, f64),
    (hi, f_hi): (f64, f64),
) -> Option<f64> {
    let denom  = f_hi - f_lo;
    let scale  = f_lo.abs().max(f_hi.abs()).max(1.0);
    let thresh = f64::EPSILON * scale + f64::MIN_POSITIVE;

    if denom.abs() <= thresh {
        return None;
    }

    let x = (lo * f_hi - hi * f_lo) / denom;
    if x.is_finite() && lo < x && x < hi { Some(x) } else { None }
}


/// Next estimate: false position, or the midpoint when the chord is
/// degenerate.
#[inline]
fn next_estimate(
    (lo, f_lo): (f64, f64),
    (hi, f_hi): (f64, f64),
) -> (f64, Step) {
    match false_position((lo, f_lo), (hi, f_hi)) {
        Some(x) => (x, Step::FalsePosition),
        None    => ((lo + hi) * 0.5, Step::Bisection),
    }
}


/// Refines one bracket using a shared evaluator.
///
/// Expects finite bounds with `lo <= hi`; callers validate.
pub(crate) fn refine_bracket<F>(
    ev:       &mut Evaluator<F>,
    bracket:  Interval,
    eps:      f64,
    max_iter: usize,
) -> Result<RefineReport, RootFindingError>
where F: FnMut(f64) -> f64 {
    let evals0 = ev.evaluations();
    let mut lo = bracket.lo;
    let mut hi = bracket.hi;
    let mut bisection_steps = 0;

    // collapsed bracket, e.g. an exact midpoint root from clustering
    if hi - lo < eps {
        let root   = (lo + hi) * 0.5;
        let f_root = ev.eval(root)?;
        return Ok(RefineReport {
            root,
            f_root,
            iterations          : 0,
            bisection_steps,
            evaluations         : ev.evaluations() - evals0,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
            bracket,
            stencil             : Interval::new(lo, hi),
        });
    }

    let mut f_lo = ev.eval(lo)?;
    let mut f_hi = ev.eval(hi)?;

    for iter in 1..=max_iter {
        let (x, step) = next_estimate((lo, f_lo), (hi, f_hi));
        if step == Step::Bisection {
            bisection_steps += 1;
        }
        let fx = ev.eval(x)?;

        // check for abs fx tolerance
        if fx.abs() < eps {
            return Ok(RefineReport {
                root                : x,
                f_root              : fx,
                iterations          : iter,
                bisection_steps,
                evaluations         : ev.evaluations() - evals0,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::AbsFxReached,
                bracket,
                stencil             : Interval::new(lo, hi),
            });
        }

        // shrink bracket
        if strictly_opposite(fx, f_lo) {
            hi   = x;
            f_hi = fx;
        } else {
            lo   = x;
            f_lo = fx;
        }

        // check for width tolerance
        if hi - lo < eps {
            let root   = (lo + hi) * 0.5;
            let f_root = ev.eval(root)?;
            return Ok(RefineReport {
                root,
                f_root,
                iterations          : iter,
                bisection_steps,
                evaluations         : ev.evaluations() - evals0,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::WidthTolReached,
                bracket,
                stencil             : Interval::new(lo, hi),
            });
        }
    }

    // best effort: midpoint of whatever bracket is left
    let root   = (lo + hi) * 0.5;
    let f_root = ev.eval(root)?;
    Ok(RefineReport {
        root,
        f_root,
        iterations          : max_iter,
        bisection_steps,
        evaluations         : ev.evaluations() - evals0,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        bracket,
        stencil             : Interval::new(lo, hi),
    })
}


/// Converges one candidate bracket to a single root estimate using
/// [false position](https://en.wikipedia.org/wiki/Regula_falsi) with a
/// bisection fallback.
///
/// Each iteration takes the chord intercept of `(lo, f(lo))`, `(hi, f(hi))`.
/// When the chord is (near-)flat, or its intercept is non-finite or outside
/// the open bracket, the midpoint is used instead. The endpoint sharing the
/// estimate's sign is replaced, so `f(lo) * f(hi) <= 0` is preserved if it
/// held on entry. A sign change is assumed, not checked.
///
/// # Arguments
/// - `func`    : function to evaluate
/// - `bracket` : finite bounds with `lo <= hi`
/// - `cfg`     : [`RefineCfg`] (`eps`, `max_iter`)
///
/// # Returns
/// [`RefineReport`], terminating on the first of
/// - `hi - lo < eps`    : midpoint, [`ToleranceSatisfied::WidthTolReached`]
/// - `|f(x)| < eps`     : `x`, [`ToleranceSatisfied::AbsFxReached`]
/// - `max_iter` reached : midpoint, [`TerminationReason::IterationLimit`]
///
/// Non-convergence is not an error; check [`RefineReport::converged`].
///
/// # Errors
/// - [`RefineError::InvalidBracket`] : non-finite bounds or `lo > hi`
///
/// * Propagated via [`RefineError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
pub fn refine<F>(
    func:    F,
    bracket: Interval,
    cfg:     RefineCfg,
) -> Result<RefineReport, RefineError>
where F: FnMut(f64) -> f64 {
    let Interval { lo, hi } = bracket;
    if !(lo.is_finite() && hi.is_finite()) || lo > hi {
        return Err(RefineError::InvalidBracket { lo, hi });
    }

    let mut ev = Evaluator::new(func);
    Ok(refine_bracket(&mut ev, bracket, cfg.eps(), cfg.max_iter())?)
}
