use ar_forecast::data::{generate_gbm, GbmParams};
use ar_forecast::pipeline::forecast_from_prices;
use ar_forecast::selection::OrderRange;
use ar_math::fit_ar;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("AR Forecast: Basic Example");
    println!("==========================\n");

    // A short synthetic price path
    let params = GbmParams::new(100.0, 0.05, 0.2, 1.0 / 120.0)?;
    let prices = generate_gbm(120, &params, Some(7))?;
    println!(
        "Generated {} prices, first {:.2}, last {:.2}\n",
        prices.len(),
        prices[0],
        prices[prices.len() - 1]
    );

    // Fit a single model on the raw prices
    let model = fit_ar(prices[..100].to_vec(), 3)?;
    println!("AR(3) coefficients: {:?}", model.coefficients()?);
    println!("Next price: {:.4}", model.predict_one_step()?);
    println!("Next five: {:?}\n", model.predict_steps(5)?);

    // Sweep orders on the differenced series and score on the last 20 prices
    let report = forecast_from_prices(prices, 100, OrderRange::new(1, 10)?)?;
    for evaluation in report.sweep.evaluations() {
        println!(
            "AR({:>2})  MSE {:>10.4}  MAPE {:>7.3}%",
            evaluation.order, evaluation.metrics.mse, evaluation.metrics.mape
        );
    }
    println!("\nBest order: {}", report.best_order);
    print!("{}", report.validation_metrics);

    Ok(())
}
