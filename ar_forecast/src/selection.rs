//! AR order selection by out-of-sample error
//!
//! Every candidate order gets its own [`ArModel`] over a private copy of the
//! differenced series, so orders are evaluated independently on the rayon
//! pool. An order that cannot be fitted or forecast is recorded with
//! [`ErrorMetrics::unusable`] and never stops the sweep.

use crate::error::{ForecastError, Result};
use crate::metrics::{compute_errors, ErrorMetrics};
use crate::transform::integrate;
use ar_math::{ArModel, MathError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Inclusive range of AR orders to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRange {
    min: usize,
    max: usize,
}

impl OrderRange {
    /// Create a range of orders `min..=max`, requiring `1 <= min <= max`
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min == 0 {
            return Err(ForecastError::InvalidParameter(
                "Minimum AR order must be at least 1".to_string(),
            ));
        }
        if min > max {
            return Err(ForecastError::InvalidParameter(format!(
                "Minimum AR order ({}) exceeds maximum ({})",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn orders(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    pub fn len(&self) -> usize {
        self.max - self.min + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Outcome of evaluating one AR order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderEvaluation {
    pub order: usize,
    pub metrics: ErrorMetrics,
    /// Integrated price forecast, absent when the order failed
    pub forecast_prices: Option<Vec<f64>>,
    /// Why the order failed, if it did
    pub failure: Option<MathError>,
}

impl OrderEvaluation {
    fn failed(order: usize, failure: MathError) -> Self {
        Self {
            order,
            metrics: ErrorMetrics::unusable(),
            forecast_prices: None,
            failure: Some(failure),
        }
    }

    pub fn is_usable(&self) -> bool {
        self.metrics.is_usable()
    }
}

/// All evaluations of a sweep, in ascending order
#[derive(Debug, Clone, PartialEq)]
pub struct SweepReport {
    range: OrderRange,
    evaluations: Vec<OrderEvaluation>,
}

impl SweepReport {
    pub fn range(&self) -> OrderRange {
        self.range
    }

    pub fn evaluations(&self) -> &[OrderEvaluation] {
        &self.evaluations
    }

    /// Evaluation with the lowest finite MSE; ties keep the lower order
    pub fn best(&self) -> Option<&OrderEvaluation> {
        self.evaluations
            .iter()
            .filter(|e| e.is_usable())
            .fold(None, |best: Option<&OrderEvaluation>, candidate| match best {
                Some(current) if current.metrics.mse <= candidate.metrics.mse => Some(current),
                _ => Some(candidate),
            })
    }

    /// Orders that could not be fitted or forecast
    pub fn failed_orders(&self) -> Vec<usize> {
        self.evaluations
            .iter()
            .filter(|e| !e.is_usable())
            .map(|e| e.order)
            .collect()
    }

    pub fn all_failed(&self) -> bool {
        self.evaluations.iter().all(|e| !e.is_usable())
    }
}

/// Fit one order and score its integrated forecast against `actual_levels`
pub fn evaluate_order(
    differences: &[f64],
    last_level: f64,
    actual_levels: &[f64],
    order: usize,
) -> OrderEvaluation {
    let forecast = ArModel::new(differences.to_vec(), order).and_then(|mut model| {
        model.fit()?;
        model.predict_steps(actual_levels.len())
    });

    let forecast_differences = match forecast {
        Ok(values) => values,
        Err(err) => {
            warn!(order, error = %err, "order unusable");
            return OrderEvaluation::failed(order, err);
        }
    };

    let forecast_prices = integrate(last_level, &forecast_differences);
    let metrics = match compute_errors(&forecast_prices, actual_levels) {
        Ok(metrics) if metrics.is_usable() => metrics,
        _ => {
            warn!(order, "forecast produced non-finite error");
            return OrderEvaluation::failed(
                order,
                MathError::InvalidInput("forecast is not finite".to_string()),
            );
        }
    };

    debug!(order, mse = metrics.mse, "order evaluated");

    OrderEvaluation {
        order,
        metrics,
        forecast_prices: Some(forecast_prices),
        failure: None,
    }
}

/// Evaluate every order in `range` on the differenced series.
///
/// Forecasts of `actual_levels.len()` differences are integrated from
/// `last_level` and compared with `actual_levels`.
pub fn sweep_orders(
    differences: &[f64],
    last_level: f64,
    actual_levels: &[f64],
    range: OrderRange,
) -> Result<SweepReport> {
    if actual_levels.is_empty() {
        return Err(ForecastError::ValidationError(
            "At least one held-out value is required to score forecasts".to_string(),
        ));
    }

    info!(
        min_order = range.min(),
        max_order = range.max(),
        horizon = actual_levels.len(),
        "sweeping AR orders"
    );

    let evaluations: Vec<OrderEvaluation> = range
        .orders()
        .into_par_iter()
        .map(|order| evaluate_order(differences, last_level, actual_levels, order))
        .collect();

    Ok(SweepReport { range, evaluations })
}
