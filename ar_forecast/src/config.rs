//! Run configuration, loaded from TOML

use crate::data::GbmParams;
use crate::error::{ForecastError, Result};
use crate::selection::OrderRange;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings for one synthetic-data order sweep.
///
/// Every field has a default, so an empty TOML document is a valid config.
///
/// ```toml
/// total_days = 300
/// train_days = 240
/// seed = 42
///
/// [gbm]
/// initial_price = 100.0
/// drift = 0.01
/// volatility = 0.1
///
/// [orders]
/// min = 20
/// max = 80
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Length of the generated price series
    #[serde(default = "default_total_days")]
    pub total_days: usize,

    /// Leading prices used for fitting; the rest are held out for scoring
    #[serde(default = "default_train_days")]
    pub train_days: usize,

    /// RNG seed; `None` seeds from entropy
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,

    /// Price path settings
    #[serde(default)]
    pub gbm: GbmToml,

    /// Orders to sweep
    #[serde(default)]
    pub orders: OrdersToml,

    /// Directory receiving the output artifacts
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GbmToml {
    #[serde(default = "default_initial_price")]
    pub initial_price: f64,
    #[serde(default = "default_drift")]
    pub drift: f64,
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    /// Defaults to `1 / total_days` when absent
    #[serde(default)]
    pub delta_t: Option<f64>,
}

impl Default for GbmToml {
    fn default() -> Self {
        Self {
            initial_price: default_initial_price(),
            drift: default_drift(),
            volatility: default_volatility(),
            delta_t: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OrdersToml {
    #[serde(default = "default_min_order")]
    pub min: usize,
    #[serde(default = "default_max_order")]
    pub max: usize,
}

impl Default for OrdersToml {
    fn default() -> Self {
        Self {
            min: default_min_order(),
            max: default_max_order(),
        }
    }
}

fn default_total_days() -> usize {
    300
}
fn default_train_days() -> usize {
    240
}
fn default_seed() -> Option<u64> {
    Some(42)
}
fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}
fn default_initial_price() -> f64 {
    100.0
}
fn default_drift() -> f64 {
    0.01
}
fn default_volatility() -> f64 {
    0.1
}
fn default_min_order() -> usize {
    20
}
fn default_max_order() -> usize {
    80
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            total_days: default_total_days(),
            train_days: default_train_days(),
            seed: default_seed(),
            gbm: GbmToml::default(),
            orders: OrdersToml::default(),
            output_dir: default_output_dir(),
        }
    }
}

impl SweepConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Number of held-out prices used as the forecast horizon
    pub fn validation_days(&self) -> usize {
        self.total_days.saturating_sub(self.train_days)
    }

    pub fn gbm_params(&self) -> Result<GbmParams> {
        let delta_t = match self.gbm.delta_t {
            Some(dt) => dt,
            None if self.total_days > 0 => 1.0 / self.total_days as f64,
            None => {
                return Err(ForecastError::InvalidParameter(
                    "total_days must be positive".to_string(),
                ))
            }
        };
        GbmParams::new(
            self.gbm.initial_price,
            self.gbm.drift,
            self.gbm.volatility,
            delta_t,
        )
    }

    pub fn order_range(&self) -> Result<OrderRange> {
        OrderRange::new(self.orders.min, self.orders.max)
    }

    /// Check the settings are consistent before running
    pub fn validate(&self) -> Result<()> {
        if self.train_days < 2 {
            return Err(ForecastError::InvalidParameter(format!(
                "train_days must be at least 2 to difference, got {}",
                self.train_days
            )));
        }
        if self.train_days >= self.total_days {
            return Err(ForecastError::InvalidParameter(format!(
                "train_days ({}) must be smaller than total_days ({})",
                self.train_days, self.total_days
            )));
        }
        self.gbm_params()?;
        self.order_range()?;
        Ok(())
    }
}
