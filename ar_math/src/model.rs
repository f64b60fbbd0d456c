//! AR(p) model: the fit/predict lifecycle
//!
//! A model is constructed with its series and order, starts [`ModelState::Unfit`]
//! and moves to [`ModelState::Fitted`] once [`ArModel::fit`] succeeds. A failed
//! fit always leaves the model unfit, even if an earlier fit had succeeded.

use crate::autocorrelation::autocorrelation;
use crate::forecaster;
use crate::levinson::levinson_durbin;
use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Parameters estimated by a successful fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArFit {
    coefficients: Vec<f64>,
    autocorrelation: Vec<f64>,
    reflection_coefficients: Vec<f64>,
    prediction_error: f64,
}

impl ArFit {
    /// AR coefficients `a_1..a_p`
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Biased sample autocorrelation for lags `0..=p`
    pub fn autocorrelation(&self) -> &[f64] {
        &self.autocorrelation
    }

    /// Partial autocorrelations produced by the recursion, lags `1..=p`
    pub fn reflection_coefficients(&self) -> &[f64] {
        &self.reflection_coefficients
    }

    /// Residual error energy of the order-p predictor
    pub fn prediction_error(&self) -> f64 {
        self.prediction_error
    }

    pub fn order(&self) -> usize {
        self.coefficients.len()
    }
}

/// Lifecycle state of an [`ArModel`]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModelState {
    #[default]
    Unfit,
    Fitted(ArFit),
}

/// Autoregressive model of a fixed order over an owned series
#[derive(Debug, Clone)]
pub struct ArModel {
    /// Name of the model
    name: String,
    /// Series the model is fitted to
    data: Vec<f64>,
    /// AR order (p)
    order: usize,
    state: ModelState,
}

impl ArModel {
    /// Create an unfit AR(`order`) model over `data`.
    ///
    /// The series length is only checked against the order when fitting.
    pub fn new(data: Vec<f64>, order: usize) -> Result<Self> {
        if order == 0 {
            return Err(MathError::InvalidInput(
                "AR order must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            name: format!("AR({})", order),
            data,
            order,
            state: ModelState::Unfit,
        })
    }

    /// Estimate the coefficients with the Levinson-Durbin recursion.
    ///
    /// Requires at least `order` observations (exactly `order` is accepted).
    /// On failure the model is left unfit and the error is returned for the
    /// caller to decide whether to continue.
    pub fn fit(&mut self) -> Result<()> {
        self.state = ModelState::Unfit;

        let n = self.data.len();
        if n < self.order {
            warn!(model = %self.name, n, "not enough data to fit");
            return Err(MathError::InsufficientData {
                n,
                order: self.order,
            });
        }

        let autocorrelation = autocorrelation(&self.data, self.order);
        let solution = levinson_durbin(&autocorrelation).map_err(|err| {
            warn!(model = %self.name, error = %err, "coefficient estimation failed");
            err
        })?;

        debug!(
            model = %self.name,
            n,
            prediction_error = solution.prediction_error(),
            "fitted"
        );

        self.state = ModelState::Fitted(ArFit {
            reflection_coefficients: solution.reflection_coefficients().to_vec(),
            prediction_error: solution.prediction_error(),
            coefficients: solution.into_coefficients(),
            autocorrelation,
        });

        Ok(())
    }

    /// Forecast the value following the series
    pub fn predict_one_step(&self) -> Result<f64> {
        let fit = self.fitted()?;
        forecaster::predict_one_step(fit.coefficients(), &self.data)
    }

    /// Forecast `steps` values past the end of the series, recursively
    pub fn predict_steps(&self, steps: usize) -> Result<Vec<f64>> {
        let fit = self.fitted()?;
        forecaster::predict_steps(fit.coefficients(), &self.data, steps)
    }

    /// Fitted coefficients `a_1..a_p`
    pub fn coefficients(&self) -> Result<&[f64]> {
        Ok(self.fitted()?.coefficients())
    }

    /// Autocorrelation vector computed by the last successful fit
    pub fn autocorrelation(&self) -> Result<&[f64]> {
        Ok(self.fitted()?.autocorrelation())
    }

    /// Fitted parameters, or [`MathError::NotFitted`]
    pub fn fitted(&self) -> Result<&ArFit> {
        match &self.state {
            ModelState::Fitted(fit) => Ok(fit),
            ModelState::Unfit => Err(MathError::NotFitted),
        }
    }

    pub fn state(&self) -> &ModelState {
        &self.state
    }

    pub fn is_fitted(&self) -> bool {
        matches!(self.state, ModelState::Fitted(_))
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Construct and fit an AR(`order`) model in one call
pub fn fit_ar(data: Vec<f64>, order: usize) -> Result<ArModel> {
    let mut model = ArModel::new(data, order)?;
    model.fit()?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn noisy_series() -> Vec<f64> {
        vec![
            0.12, -0.35, 0.48, 0.05, -0.22, 0.31, -0.14, 0.27, -0.41, 0.18, 0.09, -0.06, 0.33,
            -0.29, 0.15,
        ]
    }

    #[test]
    fn test_new_rejects_order_zero() {
        assert!(matches!(
            ArModel::new(vec![1.0, 2.0], 0),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_starts_unfit() {
        let model = ArModel::new(noisy_series(), 2).unwrap();
        assert!(!model.is_fitted());
        assert_eq!(model.state(), &ModelState::Unfit);
        assert_eq!(model.name(), "AR(2)");
        assert_eq!(model.coefficients(), Err(MathError::NotFitted));
        assert_eq!(model.predict_one_step(), Err(MathError::NotFitted));
        assert_eq!(model.predict_steps(3), Err(MathError::NotFitted));
    }

    #[test]
    fn test_fit_populates_state() {
        let mut model = ArModel::new(noisy_series(), 3).unwrap();
        model.fit().unwrap();
        assert!(model.is_fitted());
        assert_eq!(model.coefficients().unwrap().len(), 3);
        assert_eq!(model.autocorrelation().unwrap().len(), 4);
        assert_eq!(model.fitted().unwrap().reflection_coefficients().len(), 3);
        assert_eq!(model.fitted().unwrap().order(), 3);
    }

    #[test]
    fn test_failed_refit_discards_previous_fit() {
        let mut model = ArModel::new(vec![0.0; 6], 2).unwrap();
        assert_eq!(model.fit(), Err(MathError::DegenerateInput));
        assert!(!model.is_fitted());

        let mut model = ArModel::new(noisy_series(), 2).unwrap();
        model.fit().unwrap();
        model.data = vec![0.0; 6];
        assert_eq!(model.fit(), Err(MathError::DegenerateInput));
        assert_eq!(model.coefficients(), Err(MathError::NotFitted));
    }

    #[test]
    fn test_fit_allows_length_equal_to_order() {
        // r = [x0^2, 0] so the only coefficient is zero.
        let mut model = ArModel::new(vec![3.0], 1).unwrap();
        model.fit().unwrap();
        assert_abs_diff_eq!(model.coefficients().unwrap()[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(model.predict_one_step().unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_ar_helper() {
        let model = fit_ar(noisy_series(), 2).unwrap();
        assert!(model.is_fitted());
        assert!(matches!(
            fit_ar(vec![1.0], 2),
            Err(MathError::InsufficientData { n: 1, order: 2 })
        ));
    }
}
