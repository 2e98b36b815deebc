//! Admission filters for adaptive clustering.
//!
//! A bisected interval is only trusted for the sign test if its
//! [`AdmissionFilter`] admits the three samples `(lo, mid, hi)`. Rejected
//! intervals are dropped whole: no candidates, no children.
//!
//! ┌ [`DeltaFilter`] : rejects jumps larger than `delta` (default)
//! ├ [`AcceptAll`]   : admits everything
//! └ any `Fn(&Probe) -> bool` closure


/// Samples of `f` at the endpoints and midpoint of a popped interval.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Probe {
    pub lo:    f64,
    pub mid:   f64,
    pub hi:    f64,
    pub f_lo:  f64,
    pub f_mid: f64,
    pub f_hi:  f64,
}

pub trait AdmissionFilter {
    /// `true` if the interval is smooth enough to record candidates from
    /// and keep subdividing.
    fn admit(&self, probe: &Probe) -> bool;
}


/// Rejects the interval when either half jumps by more than `delta`:
/// `|f(lo) - f(mid)| > delta` or `|f(hi) - f(mid)| > delta`.
///
/// Roots next to a derivative blow-up (e.g. `tan`, `1/x`) may be missed.
#[derive(Debug, Copy, Clone)]
pub struct DeltaFilter {
    delta: f64,
}

impl DeltaFilter {
    pub fn new(delta: f64) -> Self {
        Self { delta }
    }

    pub fn delta(&self) -> f64 { self.delta }
}

impl AdmissionFilter for DeltaFilter {
    #[inline]
    fn admit(&self, p: &Probe) -> bool {
        !((p.f_lo - p.f_mid).abs() > self.delta || (p.f_hi - p.f_mid).abs() > self.delta)
    }
}


#[derive(Debug, Copy, Clone, Default)]
pub struct AcceptAll;

impl AdmissionFilter for AcceptAll {
    #[inline]
    fn admit(&self, _: &Probe) -> bool { true }
}


impl<F> AdmissionFilter for F
where F: Fn(&Probe) -> bool {
    #[inline]
    fn admit(&self, probe: &Probe) -> bool { self(probe) }
}
