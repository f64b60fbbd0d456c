//! Writing run artifacts to disk
//!
//! Plain vectors go one value per line, the sweep table goes to CSV and the
//! run summary to JSON.

use crate::error::Result;
use crate::metrics::ErrorMetrics;
use crate::pipeline::PipelineReport;
use crate::selection::SweepReport;
use serde::Serialize;
use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `values` to `path`, one per line
pub fn write_vector<T: Display, P: AsRef<Path>>(path: P, values: &[T]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for value in values {
        writeln!(writer, "{}", value)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a single value followed by a newline
pub fn write_scalar<T: Display, P: AsRef<Path>>(path: P, value: T) -> Result<()> {
    write_vector(path, &[value])
}

#[derive(Debug, Serialize)]
struct SweepRow {
    order: usize,
    mse: f64,
    rmse: f64,
    mape: f64,
}

/// Write the sweep table as CSV with an `order,mse,rmse,mape` header
pub fn write_sweep_csv<P: AsRef<Path>>(path: P, sweep: &SweepReport) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for evaluation in sweep.evaluations() {
        writer.serialize(SweepRow {
            order: evaluation.order,
            mse: evaluation.metrics.mse,
            rmse: evaluation.metrics.rmse,
            mape: evaluation.metrics.mape,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Machine-readable summary of a run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub best_order: usize,
    pub coefficients: Vec<f64>,
    pub prediction_error: f64,
    pub validation_metrics: ErrorMetrics,
    pub last_train_price: f64,
    pub one_step_difference: f64,
    pub one_step_price: f64,
    pub train_days: usize,
    pub validation_days: usize,
    pub failed_orders: Vec<usize>,
}

impl RunSummary {
    pub fn from_report(report: &PipelineReport) -> Self {
        Self {
            best_order: report.best_order,
            coefficients: report.best_fit.coefficients().to_vec(),
            prediction_error: report.best_fit.prediction_error(),
            validation_metrics: report.validation_metrics,
            last_train_price: report.last_train_price(),
            one_step_difference: report.one_step_difference,
            one_step_price: report.one_step_price,
            train_days: report.train_prices.len(),
            validation_days: report.validation_prices.len(),
            failed_orders: report.sweep.failed_orders(),
        }
    }
}

pub fn write_summary_json<P: AsRef<Path>>(path: P, report: &PipelineReport) -> Result<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &RunSummary::from_report(report))?;
    Ok(())
}

/// Write the full artifact set for `report` into `dir`, creating it if needed.
///
/// Returns the paths written.
pub fn write_artifacts<P: AsRef<Path>>(dir: P, report: &PipelineReport) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    let mut path_for = |name: &str| {
        let path = dir.join(name);
        written.push(path.clone());
        path
    };

    let train_days = report.train_prices.len();
    let validation_days = report.validation_prices.len();
    let orders: Vec<usize> = report.sweep.evaluations().iter().map(|e| e.order).collect();
    let column = |pick: fn(&ErrorMetrics) -> f64| -> Vec<f64> {
        report
            .sweep
            .evaluations()
            .iter()
            .map(|e| pick(&e.metrics))
            .collect()
    };
    let train_time: Vec<usize> = (0..train_days).collect();
    let forecast_time: Vec<usize> = (train_days..train_days + validation_days).collect();

    write_vector(path_for("full_prices.txt"), &report.full_prices)?;
    write_vector(path_for("train_prices.txt"), &report.train_prices)?;
    write_vector(
        path_for("actual_future_prices.txt"),
        &report.validation_prices,
    )?;
    write_vector(path_for("log_returns.txt"), &report.differences)?;
    write_vector(path_for("ar_orders.txt"), &orders)?;
    write_vector(path_for("ar_mses.txt"), &column(|m| m.mse))?;
    write_vector(path_for("ar_rmses.txt"), &column(|m| m.rmse))?;
    write_vector(path_for("ar_mapes.txt"), &column(|m| m.mape))?;
    write_vector(
        path_for("forecasted_diff.txt"),
        &report.forecast_differences,
    )?;
    write_vector(path_for("forecasted_prices.txt"), &report.forecast_prices)?;
    write_scalar(path_for("one_step_diff.txt"), report.one_step_difference)?;
    write_scalar(path_for("one_step_price.txt"), report.one_step_price)?;
    write_vector(path_for("train_time_indices.txt"), &train_time)?;
    write_vector(path_for("forecast_time_indices.txt"), &forecast_time)?;
    write_scalar(
        path_for("validation_mse.txt"),
        report.validation_metrics.mse,
    )?;
    write_scalar(
        path_for("validation_rmse.txt"),
        report.validation_metrics.rmse,
    )?;
    write_scalar(
        path_for("validation_mape.txt"),
        report.validation_metrics.mape,
    )?;
    write_sweep_csv(path_for("ar_sweep.csv"), &report.sweep)?;
    write_summary_json(path_for("summary.json"), report)?;

    info!(dir = %dir.display(), files = written.len(), "artifacts written");
    Ok(written)
}
