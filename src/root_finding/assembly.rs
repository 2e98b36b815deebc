//! Result assembly: merge, round, sort, dedupe.
//!
//! Raw estimates closer than the clustering resolution are first merged to
//! one representative, so estimates of one root never straddle a rounding
//! boundary. The survivors are rounded to `decimals` fractional digits,
//! sorted, and collapsed only where the rounded values are equal.

use super::report::RefineReport;


/// Rounds `x` to `decimals` fractional digits, mapping `-0.0` to `0.0`.
///
/// Values too large to scale are returned unchanged.
#[inline]
pub fn round_to_decimals(x: f64, decimals: u32) -> f64 {
    let scale  = 10f64.powi(decimals as i32);
    let scaled = x * scale;
    if !scaled.is_finite() {
        return x;
    }
    (scaled.round() / scale) + 0.0
}


/// Merges refined estimates that lie within `resolution` of their sorted
/// neighbour.
///
/// Chains merge: a run of estimates with consecutive gaps below
/// `resolution` yields one value, the one with the smallest `|f_root|`
/// (ties keep the leftmost). Clustering never splits intervals narrower
/// than its `eps`, so passing that `eps` only merges estimates it could not
/// have told apart.
pub fn merge_estimates(refinements: &[RefineReport], resolution: f64) -> Vec<f64> {
    let mut raw: Vec<(f64, f64)> = refinements
        .iter()
        .map(|r| (r.root, r.f_root.abs()))
        .collect();
    raw.sort_by(|x, y| x.0.total_cmp(&y.0));

    // (representative, its |f|, rightmost member of the run)
    let mut runs: Vec<(f64, f64, f64)> = Vec::with_capacity(raw.len());
    for (x, fx) in raw {
        match runs.last_mut() {
            Some(run) if x - run.2 < resolution => {
                if fx < run.1 {
                    run.0 = x;
                    run.1 = fx;
                }
                run.2 = x;
            }
            _ => runs.push((x, fx, x)),
        }
    }
    runs.into_iter().map(|(x, _, _)| x).collect()
}


/// Turns root estimates into the public root list.
///
/// # Returns
/// Strictly increasing roots; values that round differently are all kept.
/// Empty input gives an empty list.
pub fn assemble_roots<I>(estimates: I, decimals: u32) -> Vec<f64>
where I: IntoIterator<Item = f64> {
    let mut roots: Vec<f64> = estimates
        .into_iter()
        .map(|x| round_to_decimals(x, decimals))
        .collect();
    roots.sort_by(f64::total_cmp);
    roots.dedup();
    roots
}
