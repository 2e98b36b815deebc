//! Entry points of the root scan.
//!
//! Each call runs the three phases on one counted evaluator:
//! ├ clustering : candidate brackets, see [`cluster`](super::cluster)
//! ├ refinement : one estimate per bracket, see [`refine`](super::refine)
//! └ assembly   : merge, round, sort, dedupe, see [`assembly`](super::assembly)

use super::admission::{AdmissionFilter, DeltaFilter};
use super::assembly::{assemble_roots, merge_estimates};
use super::cluster::{collect_candidates, ClusterCfg};
use super::config::{CommonCfg, impl_common_cfg, DEFAULT_DECIMALS, DEFAULT_DELTA, DEFAULT_MAX_DEPTH};
use super::errors::{RootFindingError, ToleranceError, MAX_DECIMALS};
use super::eval::Evaluator;
use super::refine::refine_bracket;
use super::report::{RefineReport, RootScanReport};
use thiserror::Error;


#[derive(Debug, Error)]
pub enum FindRootsError {
    #[error(transparent)]
    RootFinding(#[from] RootFindingError),

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error("invalid bounds: a and b must be finite with a < b. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("degenerate input: zero-width interval [{a}, {b}]")]
    DegenerateInput { a: f64, b: f64 },
}


/// Root scan configuration
///
/// # Fields
/// - `common`    : [`CommonCfg`] with `eps` and `max_iter`
/// - `delta`     : threshold of the default [`DeltaFilter`]
/// - `max_depth` : clustering depth cap, see [`ClusterCfg`]
/// - `decimals`  : rounding precision of the returned roots
///
/// # Defaults
/// - `delta`     = 1e6
/// - `eps`       = 1e-10
/// - `max_iter`  = 100
/// - `max_depth` = 16
/// - `decimals`  = 10
///
/// `eps` is shared by both phases: minimum clustering width, and the
/// function-value / bracket-width stopping criterion of refinement.
#[derive(Debug, Copy, Clone)]
pub struct FindRootsCfg {
    common:    CommonCfg,
    delta:     f64,
    max_depth: usize,
    decimals:  u32,
}
impl FindRootsCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common    : CommonCfg::new(),
            delta     : DEFAULT_DELTA,
            max_depth : DEFAULT_MAX_DEPTH,
            decimals  : DEFAULT_DECIMALS,
        }
    }

    pub fn set_delta(mut self, v: f64) -> Result<Self, ToleranceError> {
        if v.is_nan() || v <= 0.0 {
            return Err(ToleranceError::InvalidDelta { got: v });
        }
        self.delta = v;
        Ok(self)
    }

    pub fn set_max_depth(mut self, v: usize) -> Result<Self, RootFindingError> {
        if v == 0 {
            return Err(RootFindingError::InvalidMaxDepth { got: v });
        }
        self.max_depth = v;
        Ok(self)
    }

    pub fn set_decimals(mut self, v: u32) -> Result<Self, ToleranceError> {
        if v > MAX_DECIMALS {
            return Err(ToleranceError::InvalidDecimals { got: v, max: MAX_DECIMALS });
        }
        self.decimals = v;
        Ok(self)
    }

    #[inline] #[must_use] pub fn delta(&self)     -> f64   { self.delta }
    #[inline] #[must_use] pub fn max_depth(&self) -> usize { self.max_depth }
    #[inline] #[must_use] pub fn decimals(&self)  -> u32   { self.decimals }

    /// Clustering half of this configuration.
    pub fn cluster_cfg(&self) -> Result<ClusterCfg, FindRootsError> {
        Ok(ClusterCfg::new()
            .set_eps(self.eps())?
            .set_max_depth(self.max_depth)?)
    }
}
impl_common_cfg!(FindRootsCfg);

impl Default for FindRootsCfg {
    fn default() -> Self { Self::new() }
}


/// Finds all sign-changing roots of `func` on `[a, b]`.
///
/// Runs adaptive clustering (see [`cluster`](super::cluster::cluster)) with
/// the default [`DeltaFilter`], refines every candidate bracket (see
/// [`refine`](super::refine::refine)), merges estimates closer than `eps`,
/// then rounds, sorts and drops exact duplicates.
///
/// `func` is assumed total and pure on `[a, b]`; it may be called many
/// times (clustering depth plus up to `max_iter + 3` calls per candidate).
///
/// # Arguments
/// - `func`   : function to scan
/// - `a`, `b` : finite bounds with `a < b`
/// - `cfg`    : [`FindRootsCfg`]
///
/// # Returns
/// Strictly increasing roots rounded to `cfg.decimals()` digits. Empty if
/// no sign change was found; that is not an error.
///
/// # Errors
/// - [`FindRootsError::DegenerateInput`] : `a == b`
/// - [`FindRootsError::InvalidBounds`]   : `a`/`b` non-finite or `a > b`
///
/// * Propagated via [`FindRootsError::RootFinding`]
/// - [`RootFindingError::NonFiniteEvaluation`] : f(x) produced NaN/inf
pub fn find_roots<F>(
    func: F,
    a:    f64,
    b:    f64,
    cfg:  FindRootsCfg,
) -> Result<Vec<f64>, FindRootsError>
where F: FnMut(f64) -> f64 {
    Ok(find_roots_report(func, a, b, cfg)?.roots)
}


/// Same as [`find_roots`], plus the total refinement iterations summed over
/// all candidate brackets.
pub fn find_roots_instrumented<F>(
    func: F,
    a:    f64,
    b:    f64,
    cfg:  FindRootsCfg,
) -> Result<(Vec<f64>, usize), FindRootsError>
where F: FnMut(f64) -> f64 {
    let report = find_roots_report(func, a, b, cfg)?;
    Ok((report.roots, report.iterations))
}


/// Same as [`find_roots`], returning the full [`RootScanReport`].
pub fn find_roots_report<F>(
    func: F,
    a:    f64,
    b:    f64,
    cfg:  FindRootsCfg,
) -> Result<RootScanReport, FindRootsError>
where F: FnMut(f64) -> f64 {
    let filter = DeltaFilter::new(cfg.delta());
    find_roots_with_filter(func, a, b, cfg, &filter)
}


/// Same as [`find_roots_report`] with a caller-supplied admission strategy.
/// `cfg.delta()` is ignored.
///
/// # Examples
/// ```
/// use rootscan::root_finding::admission::AcceptAll;
/// use rootscan::root_finding::find_roots::{find_roots_with_filter, FindRootsCfg};
///
/// # fn main() -> Result<(), rootscan::root_finding::find_roots::FindRootsError> {
/// let cfg = FindRootsCfg::new().set_max_depth(10)?;
/// let report = find_roots_with_filter(|x: f64| x * x - 2.0, -2.0, 3.0, cfg, &AcceptAll)?;
/// assert_eq!(report.roots.len(), 2);
/// # Ok(())
/// # }
/// ```
pub fn find_roots_with_filter<F, A>(
    func:   F,
    a:      f64,
    b:      f64,
    cfg:    FindRootsCfg,
    filter: &A,
) -> Result<RootScanReport, FindRootsError>
where
    F: FnMut(f64) -> f64,
    A: AdmissionFilter + ?Sized,
{
    if !(a.is_finite() && b.is_finite()) || a > b {
        return Err(FindRootsError::InvalidBounds { a, b });
    }
    if a == b {
        return Err(FindRootsError::DegenerateInput { a, b });
    }

    let cluster_cfg = cfg.cluster_cfg()?;
    let eps         = cfg.eps();
    let max_iter    = cfg.max_iter();

    let mut ev = Evaluator::new(func);

    // phase 1: candidate brackets
    let cluster = collect_candidates(&mut ev, a, b, &cluster_cfg, filter)?;

    // phase 2: one estimate per bracket
    let refinements = cluster
        .candidates
        .iter()
        .map(|&bracket| refine_bracket(&mut ev, bracket, eps, max_iter))
        .collect::<Result<Vec<RefineReport>, RootFindingError>>()?;

    // phase 3: public root list
    let roots      = assemble_roots(merge_estimates(&refinements, eps), cfg.decimals());
    let iterations: usize = refinements.iter().map(|r| r.iterations).sum();

    Ok(RootScanReport {
        roots,
        iterations,
        evaluations: ev.evaluations(),
        cluster,
        refinements,
    })
}
