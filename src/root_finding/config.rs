//! Shared configuration for the root scan.
//!
//! Provides [`CommonCfg`] with the default tolerance and iteration limit
//! shared by [`RefineCfg`](super::refine::RefineCfg) and
//! [`FindRootsCfg`](super::find_roots::FindRootsCfg).
//!
//! [`CommonCfg`] : universal fields
//! ├ `eps`      : width / function-value tolerance
//! └ `max_iter` : refinement iteration cap per bracket
//!
//! The remaining defaults are consumed by the phase configs:
//! ├ [`DEFAULT_DELTA`]     : admission threshold for clustering
//! ├ [`DEFAULT_MAX_DEPTH`] : bisection depth cap for clustering
//! └ [`DEFAULT_DECIMALS`]  : rounding precision for result assembly


pub const DEFAULT_EPS       : f64   = 1e-10;
pub const DEFAULT_MAX_ITER  : usize = 100;
pub const DEFAULT_DELTA     : f64   = 1e6;
pub const DEFAULT_MAX_DEPTH : usize = 16;
pub const DEFAULT_DECIMALS  : u32   = 10;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    eps:      f64,
    max_iter: usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            eps      : DEFAULT_EPS,
            max_iter : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn eps(&self)      -> f64   { self.eps }
    pub fn max_iter(&self) -> usize { self.max_iter }

    // setters (internal)
    pub(crate) fn with_eps      (&mut self, v: f64)   { self.eps      = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

/// Validates `eps`: finite and strictly positive.
pub(crate) fn check_eps(
    v: f64
) -> Result<f64, crate::root_finding::errors::ToleranceError> {
    if !v.is_finite() || v <= 0.0 {
        return Err(crate::root_finding::errors::ToleranceError::InvalidEps { got: v });
    }
    Ok(v)
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_eps(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                let v = $crate::root_finding::config::check_eps(v)?;
                self.common.with_eps(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn eps(&self)      -> f64   { self.common.eps() }
            #[inline] #[must_use] pub fn max_iter(&self) -> usize { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg;
