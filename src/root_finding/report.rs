//! Defines the reports returned by the root scan.
//!
//! ┌ [`ClusterReport`]   : phase 1, candidate brackets and counters
//! ├ [`RefineReport`]    : phase 2, one per candidate bracket
//! └ [`RootScanReport`]  : whole run, assembled roots plus both phases

use super::interval::Interval;


/// Reasons a refinement may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::AbsFxReached`]
///     - |f(c)| < eps at a false-position / bisection point
/// - [`ToleranceSatisfied::WidthTolReached`]
///     - [lo, hi] -> (hi - lo) < eps, root is the midpoint
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - `max_iter` exhausted, root is the midpoint of the last bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    AbsFxReached,
    WidthTolReached,
    ToleranceNotReached,
}


/// Report of one refined candidate bracket.
///
/// [`RefineReport`]
/// - `root`                : best root estimate (unrounded)
/// - `f_root`              : function value at `root`
/// - `iterations`          : false-position / bisection steps taken
/// - `bisection_steps`     : steps that fell back to bisection
/// - `evaluations`         : function evaluations spent on this bracket
/// - `termination_reason`  : why refinement stopped ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `bracket`             : candidate bracket as handed in
/// - `stencil`             : bracket at termination
#[derive(Debug, Copy, Clone)]
pub struct RefineReport {
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub bisection_steps     : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub bracket             : Interval,
    pub stencil             : Interval,
}

impl RefineReport {
    /// `false` only for the `max_iter` midpoint fallback.
    #[inline]
    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }
}


/// Report of adaptive clustering.
///
/// [`ClusterReport`]
/// - `candidates`    : brackets in discovery order, duplicates allowed
/// - `visited`       : intervals popped with width >= eps
/// - `rejected`      : visited intervals dropped by the admission filter
/// - `depth_limited` : admitted intervals wider than eps left unsplit at `max_depth`
/// - `evaluations`   : function evaluations spent clustering
///
/// A nonzero `depth_limited` means roots closer together than the leaf
/// width may have been missed; raise `max_depth` to resolve them.
#[derive(Debug, Clone, Default)]
pub struct ClusterReport {
    pub candidates    : Vec<Interval>,
    pub visited       : usize,
    pub rejected      : usize,
    pub depth_limited : usize,
    pub evaluations   : usize,
}


/// Report of a full scan.
///
/// [`RootScanReport`]
/// - `roots`       : rounded, deduplicated, strictly increasing roots
/// - `iterations`  : refinement iterations summed over all brackets
/// - `evaluations` : function evaluations over both phases
/// - `cluster`     : [`ClusterReport`] of phase 1
/// - `refinements` : one [`RefineReport`] per candidate, in candidate order
#[derive(Debug, Clone)]
pub struct RootScanReport {
    pub roots       : Vec<f64>,
    pub iterations  : usize,
    pub evaluations : usize,
    pub cluster     : ClusterReport,
    pub refinements : Vec<RefineReport>,
}

impl RootScanReport {
    /// Number of candidate brackets found by clustering.
    #[inline]
    pub fn candidates(&self) -> usize {
        self.cluster.candidates.len()
    }

    /// `true` if every bracket reached a tolerance.
    pub fn all_converged(&self) -> bool {
        self.refinements.iter().all(RefineReport::converged)
    }
}
