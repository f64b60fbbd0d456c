//! One-step and recursive multi-step AR forecasting
//!
//! Multi-step forecasts are iterated: each forecast is fed back into the
//! window as if it were an observation, so later steps are built on earlier
//! forecasts rather than on real data. Forecast error compounds with the
//! horizon accordingly.

use crate::{MathError, Result};

/// Fixed-capacity sliding window over the most recent `p` values.
///
/// Backed by a preallocated buffer used as a ring: pushing a value overwrites
/// the oldest one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastWindow {
    buffer: Vec<f64>,
    /// Index of the oldest value
    head: usize,
}

impl ForecastWindow {
    /// Seed a window of `capacity` values from the tail of `data`
    pub fn from_tail(data: &[f64], capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(MathError::InvalidInput(
                "Forecast window capacity must be at least 1".to_string(),
            ));
        }
        if data.len() < capacity {
            return Err(MathError::InsufficientData {
                n: data.len(),
                order: capacity,
            });
        }

        Ok(Self {
            buffer: data[data.len() - capacity..].to_vec(),
            head: 0,
        })
    }

    /// Number of values held (always the capacity)
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Value `lag` steps back, where `lag(1)` is the most recent value.
    ///
    /// Panics if `lag` is zero or exceeds the capacity.
    pub fn lag(&self, lag: usize) -> f64 {
        assert!(
            lag >= 1 && lag <= self.len(),
            "lag {} outside 1..={}",
            lag,
            self.len()
        );
        let capacity = self.len();
        self.buffer[(self.head + capacity - lag) % capacity]
    }

    /// Drop the oldest value and append `value` as the most recent
    pub fn push(&mut self, value: f64) {
        let capacity = self.len();
        self.buffer[self.head] = value;
        self.head = (self.head + 1) % capacity;
    }

    /// Weighted sum `sum_i coefficients[i-1] * lag(i)`
    pub fn weighted_sum(&self, coefficients: &[f64]) -> f64 {
        coefficients
            .iter()
            .enumerate()
            .map(|(i, a)| a * self.lag(i + 1))
            .sum()
    }

    /// Window contents from oldest to newest
    pub fn to_vec(&self) -> Vec<f64> {
        let capacity = self.len();
        (0..capacity)
            .map(|i| self.buffer[(self.head + i) % capacity])
            .collect()
    }
}

fn check_inputs(coefficients: &[f64], data: &[f64]) -> Result<()> {
    if coefficients.is_empty() {
        return Err(MathError::InvalidInput(
            "At least one AR coefficient is required".to_string(),
        ));
    }
    if data.len() < coefficients.len() {
        return Err(MathError::InsufficientData {
            n: data.len(),
            order: coefficients.len(),
        });
    }
    Ok(())
}

/// Forecast the value following `data`: `sum_i a_i * x[N-i]`.
pub fn predict_one_step(coefficients: &[f64], data: &[f64]) -> Result<f64> {
    check_inputs(coefficients, data)?;

    let n = data.len();
    Ok(coefficients
        .iter()
        .enumerate()
        .map(|(i, a)| a * data[n - 1 - i])
        .sum())
}

/// Forecast `steps` values past the end of `data`, feeding each forecast back
/// into the window for the next step.
pub fn predict_steps(coefficients: &[f64], data: &[f64], steps: usize) -> Result<Vec<f64>> {
    check_inputs(coefficients, data)?;

    let mut window = ForecastWindow::from_tail(data, coefficients.len())?;
    let mut forecasts = Vec::with_capacity(steps);
    for _ in 0..steps {
        let forecast = window.weighted_sum(coefficients);
        forecasts.push(forecast);
        window.push(forecast);
    }

    Ok(forecasts)
}
