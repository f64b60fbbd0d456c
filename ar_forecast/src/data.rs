//! Synthetic price generation and train/validation splitting

use crate::error::{ForecastError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Parameters of a geometric Brownian motion price path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GbmParams {
    /// Starting price (S0)
    pub initial_price: f64,
    /// Drift (mu)
    pub drift: f64,
    /// Volatility (sigma)
    pub volatility: f64,
    /// Time increment per step
    pub delta_t: f64,
}

impl GbmParams {
    /// Create validated GBM parameters
    pub fn new(initial_price: f64, drift: f64, volatility: f64, delta_t: f64) -> Result<Self> {
        let params = Self {
            initial_price,
            drift,
            volatility,
            delta_t,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.initial_price.is_finite() && self.initial_price > 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "Initial price must be positive, got {}",
                self.initial_price
            )));
        }
        if !self.drift.is_finite() {
            return Err(ForecastError::InvalidParameter(
                "Drift must be finite".to_string(),
            ));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "Volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        if !(self.delta_t.is_finite() && self.delta_t > 0.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "Time increment must be positive, got {}",
                self.delta_t
            )));
        }
        Ok(())
    }
}

/// Generate `n` prices following geometric Brownian motion:
///
/// `S_{t+1} = S_t * exp((mu - sigma^2 / 2) * dt + sigma * sqrt(dt) * Z)`
///
/// The starting price itself is not part of the output; the first value has
/// already taken one step. A fixed `seed` makes the path reproducible, `None`
/// seeds from system entropy.
pub fn generate_gbm(n: usize, params: &GbmParams, seed: Option<u64>) -> Result<Vec<f64>> {
    params.validate()?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let normal =
        Normal::new(0.0, 1.0).map_err(|e| ForecastError::InvalidParameter(e.to_string()))?;

    let drift_term =
        (params.drift - 0.5 * params.volatility * params.volatility) * params.delta_t;
    let diffusion = params.volatility * params.delta_t.sqrt();

    let mut price = params.initial_price;
    let prices = (0..n)
        .map(|_| {
            let z = normal.sample(&mut rng);
            price *= (drift_term + diffusion * z).exp();
            price
        })
        .collect();

    Ok(prices)
}

/// Split a series into its first `train_len` values and the remainder
pub fn train_test_split(series: &[f64], train_len: usize) -> Result<(Vec<f64>, Vec<f64>)> {
    if train_len > series.len() {
        return Err(ForecastError::ValidationError(format!(
            "Training length ({}) exceeds series length ({})",
            train_len,
            series.len()
        )));
    }

    let (train, test) = series.split_at(train_len);
    Ok((train.to_vec(), test.to_vec()))
}
