//! Closed interval `[lo, hi]` used for the clustering work stack and for
//! candidate brackets handed to refinement.
//!
//! The constructor does not enforce `lo <= hi`; entry points validate the
//! outer interval and clustering only ever produces ordered halves via
//! [`Interval::halves`].


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Zero-width interval at `x`.
    #[inline]
    pub const fn point(x: f64) -> Self {
        Self { lo: x, hi: x }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.lo + self.hi) * 0.5
    }

    /// Closed containment, `lo <= x <= hi`.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Left and right halves split at the midpoint.
    #[inline]
    pub fn halves(&self) -> (Interval, Interval) {
        let m = self.midpoint();
        (Interval::new(self.lo, m), Interval::new(m, self.hi))
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
