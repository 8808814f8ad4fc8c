//! Series statistics used by the trend penalty
//!
//! Series are plain slices indexed by time step. `None` marks a gap.

use itertools::Itertools;

/// Trailing rolling mean over `window` rows
///
/// The first `window - 1` positions average over the rows available so far.
/// Gaps are skipped; a window holding only gaps yields a gap.
#[must_use]
pub fn rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let start = (i + 1).saturating_sub(window);
            let (sum, count) = values[start..=i]
                .iter()
                .flatten()
                .fold((0.0_f64, 0usize), |(sum, count), v| (sum + v, count + 1));
            (count > 0).then(|| sum / count as f64)
        })
        .collect()
}

/// Difference between consecutive values
///
/// Index 0 has no predecessor and gets 0, as does any position where either
/// side of the difference is a gap.
#[must_use]
pub fn first_difference(values: &[Option<f64>]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    std::iter::once(0.0)
        .chain(values.iter().tuple_windows().map(|(prev, cur)| match (prev, cur) {
            (Some(p), Some(c)) => c - p,
            _ => 0.0,
        }))
        .collect()
}

/// Percentile by linear interpolation between order statistics
///
/// With the values sorted ascending, the percentile `p` sits at rank
/// `p / 100 * (n - 1)`; fractional ranks interpolate between the two
/// neighbouring order statistics. Returns `None` for an empty slice or when
/// any value is non-finite.
#[must_use]
pub fn percentile_linear(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let sorted = values.iter().copied().sorted_by(f64::total_cmp).collect_vec();
    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}
