//! Metrics for evaluating forecast performance

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Forecast error metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ErrorMetrics {
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, in percent
    pub mape: f64,
}

impl ErrorMetrics {
    /// Sentinel recorded for an order that could not be fitted or forecast
    pub fn unusable() -> Self {
        Self {
            mse: f64::INFINITY,
            rmse: f64::INFINITY,
            mape: f64::INFINITY,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.mse.is_finite()
    }
}

/// Compare a forecast with the realised values.
///
/// MSE and RMSE average over every index. MAPE averages
/// `|forecast - actual| / |actual| * 100` over the indices where
/// `actual != 0` only, and is zero when every actual value is zero.
pub fn compute_errors(forecast: &[f64], actual: &[f64]) -> Result<ErrorMetrics> {
    if forecast.len() != actual.len() || forecast.is_empty() {
        return Err(ForecastError::ValidationError(format!(
            "Forecast ({}) and actual ({}) values must have the same non-zero length",
            forecast.len(),
            actual.len()
        )));
    }

    let n = forecast.len() as f64;
    let mse = forecast
        .iter()
        .zip(actual.iter())
        .map(|(f, a)| (f - a).powi(2))
        .sum::<f64>()
        / n;

    let (pct_sum, pct_count) = forecast
        .iter()
        .zip(actual.iter())
        .filter(|(_, a)| **a != 0.0)
        .fold((0.0, 0usize), |(sum, count), (f, a)| {
            (sum + ((f - a) / a).abs() * 100.0, count + 1)
        });
    let mape = if pct_count > 0 {
        pct_sum / pct_count as f64
    } else {
        0.0
    };

    Ok(ErrorMetrics {
        mse,
        rmse: mse.sqrt(),
        mape,
    })
}

impl std::fmt::Display for ErrorMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Error Metrics:")?;
        writeln!(f, "  MSE:   {:.4}", self.mse)?;
        writeln!(f, "  RMSE:  {:.4}", self.rmse)?;
        writeln!(f, "  MAPE:  {:.4}%", self.mape)?;
        Ok(())
    }
}
