use approx::assert_abs_diff_eq;
use ar_math::{autocorrelation, fit_ar, ArModel, MathError};
use rstest::rstest;

fn noisy_differences() -> Vec<f64> {
    vec![
        0.8, -0.3, 0.5, 1.1, -0.6, 0.2, 0.9, -0.4, 0.1, 0.7, -0.2, 0.4, -0.8, 0.6, 0.3, -0.1, 0.5,
        -0.7, 0.2, 0.4,
    ]
}

#[test]
fn test_fit_is_deterministic() {
    let first = fit_ar(noisy_differences(), 4).unwrap();
    let second = fit_ar(noisy_differences(), 4).unwrap();
    assert_eq!(first.coefficients().unwrap(), second.coefficients().unwrap());
    assert_eq!(first.fitted().unwrap(), second.fitted().unwrap());
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(10)]
#[case(20)]
fn test_length_invariants(#[case] order: usize) {
    let model = fit_ar(noisy_differences(), order).unwrap();
    assert_eq!(model.coefficients().unwrap().len(), order);
    assert_eq!(model.autocorrelation().unwrap().len(), order + 1);
    for steps in [0, 1, 7, 40] {
        assert_eq!(model.predict_steps(steps).unwrap().len(), steps);
    }
}

#[test]
fn test_two_point_order_one() {
    // r0 = (x0^2 + x1^2) / 2, r1 = x0 * x1 / 2, a1 = r1 / r0
    let model = fit_ar(vec![1.0, 2.0], 1).unwrap();
    assert_abs_diff_eq!(model.coefficients().unwrap()[0], 0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(model.predict_one_step().unwrap(), 0.8, epsilon = 1e-12);
}

#[test]
fn test_constant_series_fits() {
    // Biased autocorrelation of a constant gives r[k] = c^2 (N - k) / N,
    // so the AR(1) coefficient is (N - 1) / N rather than exactly 1.
    let constant = vec![2.0; 10];
    let model = fit_ar(constant.clone(), 1).unwrap();
    assert_abs_diff_eq!(model.coefficients().unwrap()[0], 0.9, epsilon = 1e-12);

    let model = fit_ar(constant, 3).unwrap();
    let coefficients = model.coefficients().unwrap();
    assert_eq!(coefficients.len(), 3);
    assert!(coefficients.iter().all(|a| a.is_finite()));
    assert!(model.predict_one_step().unwrap().is_finite());
}

#[test]
fn test_all_zero_series_is_degenerate() {
    let mut model = ArModel::new(vec![0.0; 12], 3).unwrap();
    assert_eq!(model.fit(), Err(MathError::DegenerateInput));
    assert!(!model.is_fitted());
}

#[rstest]
#[case(3, 4)]
#[case(3, 10)]
#[case(0, 1)]
fn test_insufficient_data(#[case] n: usize, #[case] order: usize) {
    let data: Vec<f64> = (0..n).map(|i| i as f64 + 1.0).collect();
    let mut model = ArModel::new(data, order).unwrap();
    assert_eq!(model.fit(), Err(MathError::InsufficientData { n, order }));
    assert_eq!(model.coefficients(), Err(MathError::NotFitted));
}

#[test]
fn test_length_equal_to_order_is_accepted() {
    let model = fit_ar(vec![1.0, -0.5, 0.25], 3).unwrap();
    assert_eq!(model.coefficients().unwrap().len(), 3);
    assert_eq!(model.predict_steps(2).unwrap().len(), 2);
}

#[test]
fn test_forecast_error_grows_with_horizon() {
    let progression: Vec<f64> = (1..=20).map(f64::from).collect();
    for order in 1..=3 {
        let model = fit_ar(progression.clone(), order).unwrap();
        let forecasts = model.predict_steps(8).unwrap();
        let errors: Vec<f64> = forecasts
            .iter()
            .enumerate()
            .map(|(h, f)| (f - (21.0 + h as f64)).abs())
            .collect();
        for pair in errors.windows(2) {
            assert!(pair[1] >= pair[0], "order {}: {:?}", order, errors);
        }
    }
}

#[test]
fn test_linear_sequence_end_to_end() {
    // r0 = 385 / 10, r1 = 330 / 10, so a1 = 33 / 38.5 = 6 / 7.
    let data: Vec<f64> = (1..=10).map(f64::from).collect();
    let r = autocorrelation(&data, 1);
    assert_abs_diff_eq!(r[0], 38.5, epsilon = 1e-12);
    assert_abs_diff_eq!(r[1], 33.0, epsilon = 1e-12);

    let model = fit_ar(data, 1).unwrap();
    let a1 = 6.0 / 7.0;
    assert_abs_diff_eq!(model.coefficients().unwrap()[0], a1, epsilon = 1e-12);
    assert_abs_diff_eq!(model.predict_one_step().unwrap(), 10.0 * a1, epsilon = 1e-12);

    let forecasts = model.predict_steps(3).unwrap();
    assert_abs_diff_eq!(forecasts[0], 60.0 / 7.0, epsilon = 1e-12);
    assert_abs_diff_eq!(forecasts[1], 360.0 / 49.0, epsilon = 1e-12);
    assert_abs_diff_eq!(forecasts[2], 2160.0 / 343.0, epsilon = 1e-12);
}

#[test]
fn test_predict_before_fit_is_an_error() {
    let model = ArModel::new(noisy_differences(), 2).unwrap();
    assert_eq!(model.predict_one_step(), Err(MathError::NotFitted));
    assert_eq!(model.predict_steps(0), Err(MathError::NotFitted));
    assert_eq!(model.autocorrelation(), Err(MathError::NotFitted));
}
