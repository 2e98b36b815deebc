//! Root-finding error types.
//!
//! ┌ [`RootFindingError`] : common runtime errors
//! │   ├ non-finite function evaluation
//! │   └ invalid global parameters (e.g. max_iter, max_depth)
//! │
//! └ [`ToleranceError`]   : tolerance-related errors
//!     ├ invalid `eps`
//!     ├ invalid admission `delta`
//!     └ invalid rounding precision
//!
//! Entry points wrap both in their own enum (e.g.
//! [`FindRootsError`](super::find_roots::FindRootsError)).


use thiserror::Error;


/// Largest supported rounding precision for result assembly.
pub const MAX_DECIMALS: u32 = 15;


/// Root-finding runtime errors.
///
/// ┌ Non-finite function evaluation
/// └ Invalid global configuration (e.g. max_iter < 1)
#[derive(Debug, Error)]
pub enum RootFindingError {
    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter   { got: usize },

    #[error("invalid max_depth: must be >= 1. got max_depth={got}")]
    InvalidMaxDepth  { got: usize },
}


/// Tolerance configuration errors.
///
/// ┌ `eps` must be finite and > 0
/// ├ `delta` must be > 0 (infinity disables the admission filter)
/// └ `decimals` must be <= [`MAX_DECIMALS`]
#[derive(Debug, Error)]
pub enum ToleranceError {
    #[error("invalid `eps` tolerance: must be finite and > 0. got {got}")]
    InvalidEps { got: f64 },

    #[error("invalid `delta` threshold: must be > 0 and not NaN. got {got}")]
    InvalidDelta { got: f64 },

    #[error("invalid `decimals`: must be <= {max}. got {got}")]
    InvalidDecimals { got: u32, max: u32 },
}
