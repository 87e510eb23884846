//! Percentiles by linear interpolation between closest ranks.
//!
//! For sorted data `x[0..n]` and a fraction `p ∈ [0, 1]`:
//! 1. `h = p × (n − 1)`
//! 2. `lo = x[⌊h⌋]`, `hi = x[⌈h⌉]`
//! 3. result `lo + (h − ⌊h⌋) × (hi − lo)`
//!
//! This is the "R-7" rule used by NumPy's `percentile`/`median` defaults,
//! so the median of an even-length sample is the mean of the two middle
//! elements.

/// Sorts a copy of `values` with a total order, so `-0.0` sorts before `0.0`
/// and the result does not depend on the input permutation.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// `p`-quantile of **pre-sorted** data.
///
/// The interpolated value is kept inside `[lo, hi]`, so quantiles are
/// monotonic in `p` even under floating-point rounding. When `hi − lo`
/// overflows the weighted form `(1 − g)·lo + g·hi` is used instead.
///
/// Returns `None` if `sorted_data` is empty or `p` lies outside `[0, 1]`.
///
/// ```
/// use box_params::stats::quantile_sorted;
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile_sorted(&data, 0.5), Some(2.5));
/// assert_eq!(quantile_sorted(&data, 1.0), Some(4.0));
/// ```
pub fn quantile_sorted(sorted_data: &[f64], p: f64) -> Option<f64> {
    let n = sorted_data.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }

    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();
    let lo = sorted_data[j];

    if g == 0.0 || j + 1 >= n {
        return Some(lo);
    }
    let hi = sorted_data[j + 1];
    let spread = hi - lo;
    let q = if spread.is_finite() {
        lo + g * spread
    } else {
        (1.0 - g) * lo + g * hi
    };
    Some(q.max(lo).min(hi))
}

/// `pct`-th percentile (0..=100) of unsorted data.
pub fn percentile(values: &[f64], pct: f64) -> Option<f64> {
    if values.iter().any(|v| v.is_nan()) {
        return None;
    }
    quantile_sorted(&sorted(values), pct / 100.0)
}

pub fn median(values: &[f64]) -> Option<f64> {
    percentile(values, 50.0)
}
