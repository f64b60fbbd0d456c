//! # AR Sweep
//!
//! Umbrella crate for the workspace.
//!
//! - [`ar_math`]: autocorrelation, Levinson-Durbin and the AR(p) model
//! - [`ar_forecast`]: order sweeps, metrics, configuration and artifact output
//!
//! ## Example
//!
//! ```
//! use ar_sweep_workspace::ar_math::fit_ar;
//!
//! let model = fit_ar(vec![1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
//! assert_eq!(model.predict_steps(3).unwrap().len(), 3);
//! ```

pub use ar_forecast;
pub use ar_math;
