//! Differencing and integration of price levels

/// First differences: `d[i] = x[i+1] - x[i]`. Empty for fewer than two levels.
pub fn difference(levels: &[f64]) -> Vec<f64> {
    levels.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Rebuild levels from differences by cumulative summation starting at `last_level`.
///
/// The output does not include `last_level` itself.
pub fn integrate(last_level: f64, differences: &[f64]) -> Vec<f64> {
    differences
        .iter()
        .scan(last_level, |level, d| {
            *level += d;
            Some(*level)
        })
        .collect()
}
