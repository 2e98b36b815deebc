//! Finds every sign-changing root of a scalar function on a bounded
//! interval.
//!
//! The scan runs in three phases:
//!
//! ┌ [`cluster`](root_finding::cluster)     : adaptive bisection collects candidate brackets
//! ├ [`refine`](root_finding::refine)       : false position converges each bracket
//! └ [`assembly`](root_finding::assembly)   : round, sort and dedupe the estimates
//!
//! ```
//! use rootscan::{find_roots, FindRootsCfg};
//!
//! # fn main() -> Result<(), rootscan::FindRootsError> {
//! let roots = find_roots(|x: f64| x.powi(3) - 2.0 * x - 5.0, 2.0, 3.0, FindRootsCfg::new())?;
//! assert_eq!(roots.len(), 1);
//! assert!((roots[0] - 2.0945515).abs() < 1e-7);
//! # Ok(())
//! # }
//! ```

pub mod root_finding;

pub use root_finding::find_roots::{
    find_roots, find_roots_instrumented, find_roots_report, find_roots_with_filter,
    FindRootsCfg, FindRootsError,
};
