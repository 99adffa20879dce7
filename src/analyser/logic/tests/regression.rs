use crate::analyser::logic::regression::fit;
use crate::analyser::logic::types::RegionRow;
use crate::error::AppError;

fn rows(points: &[(f64, f64)]) -> Vec<RegionRow> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(consumption, gdp))| RegionRow {
            region: format!("R{i:02}"),
            consumption,
            gdp,
        })
        .collect()
}

#[test]
fn test_fit_recovers_exact_line() {
    let data = rows(&[(1.0, 3.0), (2.0, 5.0), (3.0, 7.0), (4.0, 9.0), (5.0, 11.0)]);
    let result = fit(&data).unwrap();

    assert!((result.slope.coef - 2.0).abs() < 1e-6);
    assert!((result.intercept.coef - 1.0).abs() < 1e-6);
    assert!(result.r_squared > 0.999_999);
    assert_eq!(result.slope.name, "Value_consumption");
    assert_eq!(result.intercept.name, "const");
    assert_eq!(result.dependent, "Value_gdp");
}

#[test]
fn test_fit_statistics_match_hand_computation() {
    // x̄ = 3, ȳ = 4, Sxx = 10, Sxy = 6, SSR = 2.4, SST = 6
    let data = rows(&[(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 4.0), (5.0, 5.0)]);
    let result = fit(&data).unwrap();

    assert!((result.slope.coef - 0.6).abs() < 1e-9);
    assert!((result.intercept.coef - 2.2).abs() < 1e-9);
    assert_eq!(result.n_obs, 5);
    assert_eq!(result.df_model, 1);
    assert_eq!(result.df_resid, 3);
    assert!((result.r_squared - 0.6).abs() < 1e-9);
    assert!((result.adj_r_squared - (1.0 - 0.4 * 4.0 / 3.0)).abs() < 1e-9);

    assert!((result.slope.std_err - 0.08_f64.sqrt()).abs() < 1e-9);
    assert!((result.intercept.std_err - 0.88_f64.sqrt()).abs() < 1e-9);
    assert!((result.slope.t_value - 0.6 / 0.08_f64.sqrt()).abs() < 1e-9);
    assert!((result.f_statistic - 4.5).abs() < 1e-9);

    // t² = F with one regressor, so both tests agree
    assert!(result.slope.p_value > 0.1 && result.slope.p_value < 0.2);
    assert!((result.slope.p_value - result.f_p_value).abs() < 1e-6);
    assert!(result.slope.ci_lower < 0.0 && result.slope.ci_upper > 0.6);

    assert!((result.diagnostics.durbin_watson - 4.84 / 2.4).abs() < 1e-9);
}

#[test]
fn test_predict_is_linear() {
    let data = rows(&[(0.1, 0.3), (0.4, 0.5), (0.6, 0.9), (0.9, 1.1), (1.0, 1.6)]);
    let result = fit(&data).unwrap();

    let (x1, x2) = (0.2, 2.5);
    for a in [0.0, 0.25, 0.5, 0.9, 1.0] {
        let lhs = result.predict(a * x1 + (1.0 - a) * x2);
        let rhs = a * result.predict(x1) + (1.0 - a) * result.predict(x2);
        assert!((lhs - rhs).abs() < 1e-9, "predict must be affine at a = {a}");
    }

    let line = result.fitted_line(&[0.0, 1.0]);
    assert!((line[0][1] - result.intercept.coef).abs() < 1e-12);
    assert!((line[1][1] - (result.intercept.coef + result.slope.coef)).abs() < 1e-12);
}

#[test]
fn test_predictions_track_observations_on_strong_fit() {
    let data = rows(&[
        (1.0, 3.1),
        (2.0, 4.9),
        (3.0, 7.05),
        (4.0, 8.95),
        (5.0, 11.1),
        (6.0, 12.9),
    ]);
    let result = fit(&data).unwrap();

    assert!(result.r_squared > 0.99);
    assert!(result.slope_is_significant(0.05));
    for row in &data {
        assert!((result.predict(row.consumption) - row.gdp).abs() < 0.25);
    }
}

#[test]
fn test_two_rows_leave_inference_undefined() {
    let data = rows(&[(0.0, 1.0), (1.0, 3.0)]);
    let result = fit(&data).unwrap();

    assert!((result.slope.coef - 2.0).abs() < 1e-9);
    assert!((result.intercept.coef - 1.0).abs() < 1e-9);
    assert_eq!(result.df_resid, 0);
    assert!(result.slope.p_value.is_nan());
    assert!(result.f_p_value.is_nan());
}

#[test]
fn test_fit_without_rows_fails() {
    assert!(matches!(fit(&[]), Err(AppError::Fit(_))));
}

#[test]
fn test_fit_result_serializes() {
    let data = rows(&[(1.0, 2.0), (2.0, 4.0), (3.0, 5.0), (4.0, 4.0), (5.0, 5.0)]);
    let result = fit(&data).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["dependent"], "Value_gdp");
    assert_eq!(json["n_obs"], 5);
    assert_eq!(json["slope"]["name"], "Value_consumption");
}
