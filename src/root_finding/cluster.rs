//! Phase 1 of the root scan: adaptive clustering.
//!
//! Bisects `[a, b]` depth-first and records every half whose endpoint
//! values change sign strictly. Subdivision stops at `eps` width or at
//! `max_depth`; leaves stopped by the depth cap are counted in
//! [`ClusterReport::depth_limited`].

use super::admission::{AdmissionFilter, Probe};
use super::config::{check_eps, DEFAULT_EPS, DEFAULT_MAX_DEPTH};
use super::errors::{RootFindingError, ToleranceError};
use super::eval::Evaluator;
use super::interval::Interval;
use super::report::ClusterReport;
use super::signs::strictly_opposite;
use thiserror::Error;


#[derive(Debug, Error)]
pub enum ClusterError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },
}


/// Clustering configuration
///
/// # Fields
/// - `eps`       : intervals narrower than this are discarded
/// - `max_depth` : intervals at this depth are probed but not split
///
/// # Defaults
/// - `eps`       = 1e-10
/// - `max_depth` = 16
#[derive(Debug, Copy, Clone)]
pub struct ClusterCfg {
    eps:       f64,
    max_depth: usize,
}
impl ClusterCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            eps       : DEFAULT_EPS,
            max_depth : DEFAULT_MAX_DEPTH,
        }
    }

    pub fn set_eps(mut self, v: f64) -> Result<Self, ToleranceError> {
        self.eps = check_eps(v)?;
        Ok(self)
    }

    pub fn set_max_depth(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxDepth { got: v });
        }
        self.max_depth = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn eps(&self)       -> f64   { self.eps }
    #[inline] #[must_use] pub fn max_depth(&self) -> usize { self.max_depth }
}

impl Default for ClusterCfg {
    fn default() -> Self { Self::new() }
}


/// Work stack entry. Endpoint values ride along so each pop costs one
/// evaluation.
#[derive(Debug, Copy, Clone)]
struct Node {
    iv:    Interval,
    f_lo:  f64,
    f_hi:  f64,
    depth: usize,
}


/// Depth-first bisection over `[a, b]` collecting candidate brackets.
///
/// Expects `a < b`, both finite; callers validate.
pub(crate) fn collect_candidates<F, A>(
    ev:     &mut Evaluator<F>,
    a:      f64,
    b:      f64,
    cfg:    &ClusterCfg,
    filter: &A,
) -> Result<ClusterReport, RootFindingError>
where
    F: FnMut(f64) -> f64,
    A: AdmissionFilter + ?Sized,
{
    let evals0 = ev.evaluations();
    let eps = cfg.eps();
    let max_depth = cfg.max_depth();

    let mut report = ClusterReport::default();

    // nothing to probe below resolution
    if b - a < eps {
        return Ok(report);
    }

    let f_a = ev.eval(a)?;
    let f_b = ev.eval(b)?;

    let mut stack: Vec<Node> = Vec::with_capacity(2 * max_depth.min(64) + 2);
    stack.push(Node { iv: Interval::new(a, b), f_lo: f_a, f_hi: f_b, depth: 0 });

    while let Some(node) = stack.pop() {
        let width = node.iv.width();
        if width < eps {
            continue;
        }
        report.visited += 1;

        let (left, right) = node.iv.halves();
        let mid   = left.hi;
        let f_mid = ev.eval(mid)?;

        let probe = Probe {
            lo: node.iv.lo, mid, hi: node.iv.hi,
            f_lo: node.f_lo, f_mid, f_hi: node.f_hi,
        };
        if !filter.admit(&probe) {
            report.rejected += 1;
            continue;
        }

        if strictly_opposite(node.f_lo, f_mid) {
            report.candidates.push(left);
        }
        if strictly_opposite(f_mid, node.f_hi) {
            report.candidates.push(right);
        }
        // sign-changing root sitting exactly on the midpoint
        if f_mid == 0.0 && strictly_opposite(node.f_lo, node.f_hi) {
            report.candidates.push(Interval::point(mid));
        }

        if width > eps {
            if node.depth < max_depth {
                let depth = node.depth + 1;
                stack.push(Node { iv: right, f_lo: f_mid, f_hi: node.f_hi, depth });
                stack.push(Node { iv: left,  f_lo: node.f_lo, f_hi: f_mid, depth });
            } else {
                report.depth_limited += 1;
            }
        }
    }

    report.evaluations = ev.evaluations() - evals0;
    Ok(report)
}


/// Discovers candidate brackets of sign-changing roots of `func` on `[a, b]`
/// by adaptive bisection.
///
/// The interval is explored depth-first on an explicit stack. Each popped
/// interval of width `>= eps` is probed at its midpoint; if `filter` admits
/// the probe, a half whose endpoint values are strictly opposite in sign is
/// recorded as a candidate, and both halves are pushed for further
/// subdivision while the width exceeds `eps` and the depth is below
/// `max_depth`. Halves are re-explored even after being recorded, so one
/// root typically yields one candidate per depth level. Admitted intervals
/// still wider than `eps` at `max_depth` are counted in
/// [`ClusterReport::depth_limited`]; roots sharing one of those leaves
/// without a sign change across it are missed.
///
/// A root landing exactly on a midpoint (`f(mid) == 0` with `f(lo)`,
/// `f(hi)` strictly opposite) is recorded as the zero-width candidate
/// `[mid, mid]`. Touching roots without a sign change are never reported.
///
/// # Arguments
/// - `func`   : function to scan; assumed total and pure on `[a, b]`
/// - `a`, `b` : finite bounds with `a < b`
/// - `cfg`    : [`ClusterCfg`]
/// - `filter` : [`AdmissionFilter`] strategy, e.g. [`DeltaFilter`](super::admission::DeltaFilter)
///
/// # Returns
/// [`ClusterReport`] with the unordered candidate list and counters.
///
/// # Errors
/// - [`ClusterError::InvalidBounds`] : `a`/`b` non-finite or `a >= b`
///
/// * Propagated via [`ClusterError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
pub fn cluster<F, A>(
    func:   F,
    a:      f64,
    b:      f64,
    cfg:    ClusterCfg,
    filter: &A,
) -> Result<ClusterReport, ClusterError>
where
    F: FnMut(f64) -> f64,
    A: AdmissionFilter + ?Sized,
{
    if !(a.is_finite() && b.is_finite()) || a >= b {
        return Err(ClusterError::InvalidBounds { a, b });
    }

    let mut ev = Evaluator::new(func);
    Ok(collect_candidates(&mut ev, a, b, &cfg, filter)?)
}
