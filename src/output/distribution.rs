//! Histogram of qualifying Points+ values.

use super::models::DistributionBin;

pub const BIN_WIDTH: i64 = 10;

/// Fixed-width bins spanning the observed range.
///
/// Bins are half-open `[min, max)`, so a value sitting exactly on an edge
/// lands in the bin that starts there, and the top bin always extends past
/// the maximum value.
pub fn build_distribution(values: &[f64]) -> Vec<DistributionBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Vec::new();
    }

    let bucket = |v: f64| (v / BIN_WIDTH as f64).floor() as i64;
    let lo = finite.iter().copied().map(bucket).min().unwrap_or(0);
    let hi = finite.iter().copied().map(bucket).max().unwrap_or(0);

    let mut counts = vec![0u32; (hi - lo + 1) as usize];
    for v in &finite {
        counts[(bucket(*v) - lo) as usize] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let min = (lo + i as i64) * BIN_WIDTH;
            let max = min + BIN_WIDTH;
            DistributionBin {
                min,
                max,
                label: format!("{}-{}", min, max),
                count,
            }
        })
        .collect()
}
