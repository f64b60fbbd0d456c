use ar_forecast::output::{write_artifacts, write_sweep_csv, write_vector};
use ar_forecast::pipeline::run_pipeline;
use ar_forecast::SweepConfig;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

fn small_config() -> SweepConfig {
    let mut config = SweepConfig {
        total_days: 70,
        train_days: 50,
        ..SweepConfig::default()
    };
    config.orders.min = 2;
    config.orders.max = 5;
    config
}

fn read_lines(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_artifact_set() {
    let report = run_pipeline(&small_config()).unwrap();
    let dir = tempdir().unwrap();
    let out = dir.path().join("run");

    let written = write_artifacts(&out, &report).unwrap();
    assert_eq!(written.len(), 19);
    for path in &written {
        assert!(path.exists(), "missing {}", path.display());
    }

    assert_eq!(read_lines(&out.join("full_prices.txt")).len(), 70);
    assert_eq!(read_lines(&out.join("train_prices.txt")).len(), 50);
    assert_eq!(read_lines(&out.join("actual_future_prices.txt")).len(), 20);
    assert_eq!(read_lines(&out.join("log_returns.txt")).len(), 49);
    assert_eq!(read_lines(&out.join("forecasted_prices.txt")).len(), 20);
    assert_eq!(read_lines(&out.join("ar_orders.txt")), vec!["2", "3", "4", "5"]);
    assert_eq!(read_lines(&out.join("ar_mses.txt")).len(), 4);
    assert_eq!(read_lines(&out.join("one_step_price.txt")).len(), 1);

    let train_time = read_lines(&out.join("train_time_indices.txt"));
    assert_eq!(train_time.first().map(String::as_str), Some("0"));
    assert_eq!(train_time.last().map(String::as_str), Some("49"));
    let forecast_time = read_lines(&out.join("forecast_time_indices.txt"));
    assert_eq!(forecast_time.first().map(String::as_str), Some("50"));
    assert_eq!(forecast_time.last().map(String::as_str), Some("69"));

    let mse: f64 = read_lines(&out.join("validation_mse.txt"))[0].parse().unwrap();
    assert_eq!(mse, report.validation_metrics.mse);
}

#[test]
fn test_summary_json() {
    let report = run_pipeline(&small_config()).unwrap();
    let dir = tempdir().unwrap();
    write_artifacts(dir.path(), &report).unwrap();

    let text = fs::read_to_string(dir.path().join("summary.json")).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(summary["best_order"], report.best_order);
    assert_eq!(summary["train_days"], 50);
    assert_eq!(summary["validation_days"], 20);
    assert_eq!(
        summary["coefficients"].as_array().unwrap().len(),
        report.best_order
    );
    assert!(summary["failed_orders"].as_array().unwrap().is_empty());
}

#[test]
fn test_sweep_csv_has_header_and_rows() {
    let report = run_pipeline(&small_config()).unwrap();
    let dir = tempdir().unwrap();
    let path = dir.path().join("sweep.csv");
    write_sweep_csv(&path, &report.sweep).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, vec!["order", "mse", "rmse", "mape"]);
    let orders: Vec<usize> = reader
        .records()
        .map(|r| r.unwrap()[0].parse().unwrap())
        .collect();
    assert_eq!(orders, vec![2, 3, 4, 5]);
}

#[test]
fn test_write_vector_into_missing_dir_fails() {
    let dir = tempdir().unwrap();
    let result = write_vector(dir.path().join("absent").join("x.txt"), &[1.0]);
    assert!(result.is_err());
}
