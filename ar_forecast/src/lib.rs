//! # AR Forecast
//!
//! Order selection and forecasting on price series with autoregressive models
//! from [`ar_math`].
//!
//! ## Features
//!
//! - Synthetic price paths from geometric Brownian motion
//! - Differencing and re-integration of price levels
//! - Parallel sweep over a range of AR orders, scored on held-out prices
//! - Error metrics (MSE, RMSE, MAPE)
//! - Run configuration from TOML and artifact output as text, CSV and JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use ar_forecast::config::SweepConfig;
//! use ar_forecast::pipeline::run_pipeline;
//!
//! let mut config = SweepConfig::default();
//! config.total_days = 60;
//! config.train_days = 50;
//! config.orders.min = 1;
//! config.orders.max = 4;
//!
//! let report = run_pipeline(&config)?;
//! assert_eq!(report.forecast_prices.len(), 10);
//! println!("best order: {}", report.best_order);
//! # Ok::<(), ar_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod output;
pub mod pipeline;
pub mod selection;
pub mod transform;

// Re-export commonly used types
pub use crate::config::SweepConfig;
pub use crate::data::{generate_gbm, GbmParams};
pub use crate::error::{ForecastError, Result};
pub use crate::metrics::{compute_errors, ErrorMetrics};
pub use crate::output::write_artifacts;
pub use crate::pipeline::{forecast_from_prices, run_pipeline, PipelineReport};
pub use crate::selection::{sweep_orders, OrderRange, SweepReport};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
