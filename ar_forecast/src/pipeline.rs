//! End-to-end run: prices → differences → order sweep → best-order forecast
//!
//! Nothing here touches the filesystem; [`crate::output`] writes the report.

use crate::config::SweepConfig;
use crate::data::{generate_gbm, train_test_split};
use crate::error::{ForecastError, Result};
use crate::metrics::{compute_errors, ErrorMetrics};
use crate::selection::{sweep_orders, OrderRange, SweepReport};
use crate::transform::{difference, integrate};
use ar_math::{fit_ar, ArFit};
use tracing::info;

/// Everything produced by one run
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// Full price series (training followed by validation)
    pub full_prices: Vec<f64>,
    pub train_prices: Vec<f64>,
    /// Held-out prices the forecasts are scored against
    pub validation_prices: Vec<f64>,
    /// First differences of the training prices
    pub differences: Vec<f64>,
    pub sweep: SweepReport,
    pub best_order: usize,
    /// Parameters of the best-order model refitted on the differences
    pub best_fit: ArFit,
    pub forecast_differences: Vec<f64>,
    pub forecast_prices: Vec<f64>,
    pub one_step_difference: f64,
    pub one_step_price: f64,
    pub validation_metrics: ErrorMetrics,
}

impl PipelineReport {
    /// Last training price, the anchor for integrated forecasts
    pub fn last_train_price(&self) -> f64 {
        self.train_prices.last().copied().unwrap_or(f64::NAN)
    }
}

/// Generate a synthetic price path from `config` and run the order sweep on it
pub fn run_pipeline(config: &SweepConfig) -> Result<PipelineReport> {
    config.validate()?;

    let params = config.gbm_params()?;
    let prices = generate_gbm(config.total_days, &params, config.seed)?;
    info!(
        n = prices.len(),
        seed = ?config.seed,
        "generated synthetic GBM prices"
    );

    forecast_from_prices(prices, config.train_days, config.order_range()?)
}

/// Run the order sweep on an existing price series.
///
/// The first `train_days` prices are differenced and used for fitting; the
/// remaining prices set the forecast horizon and are used for scoring.
pub fn forecast_from_prices(
    prices: Vec<f64>,
    train_days: usize,
    range: OrderRange,
) -> Result<PipelineReport> {
    let (train_prices, validation_prices) = train_test_split(&prices, train_days)?;
    if validation_prices.is_empty() {
        return Err(ForecastError::ValidationError(
            "No prices left after the training window".to_string(),
        ));
    }

    let last_train_price = *train_prices.last().ok_or_else(|| {
        ForecastError::DataError("Training window is empty".to_string())
    })?;
    let differences = difference(&train_prices);

    let sweep = sweep_orders(&differences, last_train_price, &validation_prices, range)?;
    let best_order = sweep
        .best()
        .map(|best| best.order)
        .ok_or(ForecastError::NoUsableOrder {
            min: range.min(),
            max: range.max(),
        })?;
    info!(
        best_order,
        failed = sweep.failed_orders().len(),
        "order sweep finished"
    );

    let model = fit_ar(differences.clone(), best_order)?;
    let horizon = validation_prices.len();
    let forecast_differences = model.predict_steps(horizon)?;
    let forecast_prices = integrate(last_train_price, &forecast_differences);
    let one_step_difference = model.predict_one_step()?;
    let validation_metrics = compute_errors(&forecast_prices, &validation_prices)?;
    let best_fit = model.fitted()?.clone();

    Ok(PipelineReport {
        full_prices: prices,
        train_prices,
        validation_prices,
        differences,
        sweep,
        best_order,
        best_fit,
        forecast_differences,
        forecast_prices,
        one_step_difference,
        one_step_price: last_train_price + one_step_difference,
        validation_metrics,
    })
}
