//! Levinson-Durbin recursion
//!
//! Solves the Toeplitz (Yule-Walker) normal equations for the coefficients of
//! an AR(p) model in O(p^2), building the solution up one order at a time.
//! Each step produces a reflection coefficient, which becomes the new
//! highest-order coefficient, and shrinks the prediction error energy by
//! `1 - lambda^2`.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Error energy at or below this fraction of `r[0]` cannot be used as a divisor.
const RELATIVE_ENERGY_TOLERANCE: f64 = 1e-12;

/// Output of a successful Levinson-Durbin recursion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevinsonSolution {
    coefficients: Vec<f64>,
    reflection_coefficients: Vec<f64>,
    prediction_error: f64,
}

impl LevinsonSolution {
    /// AR coefficients `a_1..a_p`; `a_1` weights the most recent observation
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Reflection (partial autocorrelation) coefficient produced at each step
    pub fn reflection_coefficients(&self) -> &[f64] {
        &self.reflection_coefficients
    }

    /// Prediction error energy after the final step
    pub fn prediction_error(&self) -> f64 {
        self.prediction_error
    }

    /// Model order `p`
    pub fn order(&self) -> usize {
        self.coefficients.len()
    }

    pub fn into_coefficients(self) -> Vec<f64> {
        self.coefficients
    }
}

/// Run the Levinson-Durbin recursion over the autocorrelation vector `r[0..=p]`.
///
/// # Errors
///
/// - [`MathError::InvalidInput`] if `r` is empty
/// - [`MathError::DegenerateInput`] if `r[0]` is exactly zero
/// - [`MathError::UnstableRecursion`] if the error energy feeding step `k`
///   is non-finite or collapses to (near) zero
pub fn levinson_durbin(r: &[f64]) -> Result<LevinsonSolution> {
    let (&r0, _) = r.split_first().ok_or_else(|| {
        MathError::InvalidInput("autocorrelation vector must contain lag 0".to_string())
    })?;

    if r0 == 0.0 {
        return Err(MathError::DegenerateInput);
    }

    let order = r.len() - 1;
    let tolerance = RELATIVE_ENERGY_TOLERANCE * r0.abs();

    // a[0] = 1 is the implicit leading term; the coefficients live in a[1..=k].
    let mut a = vec![0.0; order + 1];
    a[0] = 1.0;
    let mut next = a.clone();
    let mut reflection_coefficients = Vec::with_capacity(order);
    let mut error = r0;

    for k in 1..=order {
        if !error.is_finite() || error <= tolerance {
            return Err(MathError::UnstableRecursion {
                step: k,
                error_energy: error,
            });
        }

        let projected: f64 = (1..k).map(|j| a[j] * r[k - j]).sum();
        let lambda = (r[k] - projected) / error;

        // Every read below comes from `a`, every write goes to `next`.
        next[0] = 1.0;
        for j in 1..k {
            next[j] = a[j] - lambda * a[k - j];
        }
        next[k] = lambda;
        std::mem::swap(&mut a, &mut next);

        error *= 1.0 - lambda * lambda;
        reflection_coefficients.push(lambda);
    }

    a.remove(0);

    Ok(LevinsonSolution {
        coefficients: a,
        reflection_coefficients,
        prediction_error: error,
    })
}
