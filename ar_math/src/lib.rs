//! # AR Math
//!
//! Estimation and forecasting for autoregressive AR(p) models of a stationary
//! series. The building blocks are exposed individually and bound together by
//! [`ArModel`]:
//!
//! - [`autocorrelation`]: biased sample autocorrelation up to a lag
//! - [`levinson`]: Levinson-Durbin recursion for the AR coefficients
//! - [`forecaster`]: one-step and recursive multi-step forecasts
//! - [`model`]: the fit/predict lifecycle
//!
//! ```
//! use ar_math::ArModel;
//!
//! let data = vec![0.5, -0.2, 0.3, 0.1, -0.4, 0.2, 0.05, -0.1];
//! let mut model = ArModel::new(data, 2).unwrap();
//! model.fit().unwrap();
//!
//! assert_eq!(model.coefficients().unwrap().len(), 2);
//! assert_eq!(model.predict_steps(5).unwrap().len(), 5);
//! ```

use thiserror::Error;

pub mod autocorrelation;
pub mod forecaster;
pub mod levinson;
pub mod model;

pub use autocorrelation::autocorrelation;
pub use forecaster::{predict_one_step, predict_steps, ForecastWindow};
pub use levinson::{levinson_durbin, LevinsonSolution};
pub use model::{fit_ar, ArFit, ArModel, ModelState};

/// Errors that can occur while fitting or forecasting an AR model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("insufficient data: got {n} observations, need at least {order}")]
    InsufficientData { n: usize, order: usize },

    #[error("degenerate input: zero-lag autocorrelation is zero")]
    DegenerateInput,

    #[error("unstable recursion at step {step}: error energy {error_energy} is not usable as a divisor")]
    UnstableRecursion { step: usize, error_energy: f64 },

    #[error("model has not been fitted")]
    NotFitted,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for AR math operations
pub type Result<T> = std::result::Result<T, MathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MathError::InsufficientData { n: 3, order: 5 };
        assert_eq!(
            err.to_string(),
            "insufficient data: got 3 observations, need at least 5"
        );
        assert_eq!(
            MathError::DegenerateInput.to_string(),
            "degenerate input: zero-lag autocorrelation is zero"
        );
        assert_eq!(MathError::NotFitted.to_string(), "model has not been fitted");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<MathError>();
    }
}
