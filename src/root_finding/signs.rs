//! Sign utilities for the root scan.
//! - `strictly_opposite` : `true` if one value is `< 0` and the other `> 0`

/// Returns `true` if `x` and `y` are nonzero with opposite signs.
///
/// Equivalent to `x * y < 0.0` without the product underflowing to zero
/// for tiny magnitudes. Zeros (either sign) never count as a sign change.
#[inline]
pub(crate) fn strictly_opposite(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}
