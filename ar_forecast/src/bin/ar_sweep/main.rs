mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use ar_forecast::output::write_artifacts;
use ar_forecast::pipeline::{run_pipeline, PipelineReport};
use ar_forecast::SweepConfig;
use clap::Parser;
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SweepConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => SweepConfig::default(),
    };
    cli.apply_overrides(&mut config);
    config.validate().context("invalid configuration")?;

    info!(
        total_days = config.total_days,
        train_days = config.train_days,
        min_order = config.orders.min,
        max_order = config.orders.max,
        "starting AR order sweep"
    );

    let report = run_pipeline(&config).context("AR order sweep failed")?;
    let written = write_artifacts(&config.output_dir, &report).with_context(|| {
        format!(
            "failed to write artifacts to {}",
            config.output_dir.display()
        )
    })?;

    print_summary(&report);
    println!(
        "\nWrote {} files to {}",
        written.len(),
        config.output_dir.display()
    );
    Ok(())
}

fn print_summary(report: &PipelineReport) {
    println!("AR Order Sweep");
    println!("==============");
    println!(
        "Orders evaluated: {}-{} ({} failed)",
        report.sweep.range().min(),
        report.sweep.range().max(),
        report.sweep.failed_orders().len()
    );
    println!("Best order: {}", report.best_order);
    println!(
        "Prediction error variance: {:.6}",
        report.best_fit.prediction_error()
    );
    println!("Last training price: {:.4}", report.last_train_price());
    println!(
        "One-step forecast: {:.4} (difference {:+.6})",
        report.one_step_price, report.one_step_difference
    );
    print!("\n{}", report.validation_metrics);
}
