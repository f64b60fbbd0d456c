//! Biased sample autocorrelation

/// Compute the biased sample autocorrelation of `data` for lags `0..=max_lag`.
///
/// `r[lag] = (1/N) * sum_{i=lag}^{N-1} x[i] * x[i-lag]`
///
/// Every lag is divided by `N` rather than `N - lag`, which keeps the
/// Toeplitz matrix built from the result positive semi-definite. Lags at or
/// beyond the series length are zero.
pub fn autocorrelation(data: &[f64], max_lag: usize) -> Vec<f64> {
    let n = data.len();
    let mut r = vec![0.0; max_lag + 1];
    if n == 0 {
        return r;
    }

    for (lag, slot) in r.iter_mut().enumerate().take(n) {
        let sum: f64 = data[lag..]
            .iter()
            .zip(data.iter())
            .map(|(x, lagged)| x * lagged)
            .sum();
        *slot = sum / n as f64;
    }

    r
}
