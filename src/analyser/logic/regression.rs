use super::types::{
    CONSUMPTION, CoefficientEstimate, FitResult, GDP, RegionRow, ResidualDiagnostics,
};
use crate::error::{AppError, Result};
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use ndarray::{Array1, Axis};
use statrs::distribution::{ChiSquared, ContinuousCDF as _, FisherSnedecor, StudentsT};
use std::f64::consts::PI;

pub const INTERCEPT_NAME: &str = "const";

/// Confidence level of the coefficient intervals.
pub const CONFIDENCE: f64 = 0.95;

/// Number of estimated parameters (intercept and slope).
const N_PARAMS: usize = 2;

/// Ordinary least squares of `gdp` on `consumption` with an intercept.
///
/// When fewer than three rows are given, the coefficients are still
/// returned but the inference statistics are NaN.
///
/// # Errors
///
/// Returns [`AppError::Fit`] if there are no rows or the solve fails.
pub fn fit(rows: &[RegionRow]) -> Result<FitResult> {
    if rows.is_empty() {
        return Err(AppError::Fit("no observations to fit".to_owned()));
    }

    let x: Array1<f64> = rows.iter().map(|r| r.consumption).collect();
    let y: Array1<f64> = rows.iter().map(|r| r.gdp).collect();

    let dataset = Dataset::new(x.clone().insert_axis(Axis(1)), y.clone());
    let model = LinearRegression::default().fit(&dataset)?;

    let slope = model
        .params()
        .get(0)
        .copied()
        .ok_or_else(|| AppError::Fit("model returned no slope".to_owned()))?;
    let intercept = model.intercept();

    let result = inference(&x, &y, intercept, slope);
    tracing::info!(
        intercept = result.intercept.coef,
        slope = result.slope.coef,
        r_squared = result.r_squared,
        n_obs = result.n_obs,
        "Fitted OLS model"
    );
    Ok(result)
}

fn inference(x: &Array1<f64>, y: &Array1<f64>, intercept: f64, slope: f64) -> FitResult {
    let n_obs = x.len();
    let n = n_obs as f64;
    let df_model = N_PARAMS - 1;
    let df_resid = n_obs.saturating_sub(N_PARAMS);
    let dfr = df_resid as f64;

    let fitted = x.mapv(|v| intercept + slope * v);
    let resid = y - &fitted;

    let x_mean = x.mean().unwrap_or(f64::NAN);
    let y_mean = y.mean().unwrap_or(f64::NAN);
    let ssr = resid.mapv(|e| e * e).sum();
    let sst = y.mapv(|v| (v - y_mean).powi(2)).sum();
    let sxx = x.mapv(|v| (v - x_mean).powi(2)).sum();
    let ess = sst - ssr;

    let r_squared = 1.0 - ssr / sst;
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (n - 1.0) / dfr;

    let sigma2 = ssr / dfr;
    let se_slope = (sigma2 / sxx).sqrt();
    let se_intercept = (sigma2 * (1.0 / n + x_mean * x_mean / sxx)).sqrt();

    let t_dist = students_t(df_resid);
    let t_crit = t_dist
        .as_ref()
        .map(|t| t.inverse_cdf(1.0 - (1.0 - CONFIDENCE) / 2.0))
        .unwrap_or(f64::NAN);

    let estimate = |name: &str, coef: f64, std_err: f64| {
        let t_value = coef / std_err;
        let p_value = t_dist
            .as_ref()
            .filter(|_| !t_value.is_nan())
            .map(|t| 2.0 * t.sf(t_value.abs()))
            .unwrap_or(f64::NAN);
        CoefficientEstimate {
            name: name.to_owned(),
            coef,
            std_err,
            t_value,
            p_value,
            ci_lower: coef - t_crit * std_err,
            ci_upper: coef + t_crit * std_err,
        }
    };

    let f_statistic = (ess / df_model as f64) / (ssr / dfr);
    let f_p_value = FisherSnedecor::new(df_model as f64, dfr)
        .ok()
        .filter(|_| !f_statistic.is_nan())
        .map(|f| f.sf(f_statistic))
        .unwrap_or(f64::NAN);

    let log_likelihood = -n / 2.0 * ((2.0 * PI).ln() + (ssr / n).ln() + 1.0);
    let k = N_PARAMS as f64;
    let aic = -2.0 * log_likelihood + 2.0 * k;
    let bic = -2.0 * log_likelihood + k * n.ln();

    FitResult {
        dependent: GDP.to_owned(),
        intercept: estimate(INTERCEPT_NAME, intercept, se_intercept),
        slope: estimate(CONSUMPTION, slope, se_slope),
        n_obs,
        df_model,
        df_resid,
        r_squared,
        adj_r_squared,
        f_statistic,
        f_p_value,
        log_likelihood,
        aic,
        bic,
        diagnostics: residual_diagnostics(&resid, ssr),
    }
}

fn students_t(df_resid: usize) -> Option<StudentsT> {
    if df_resid == 0 {
        return None;
    }
    StudentsT::new(0.0, 1.0, df_resid as f64).ok()
}

fn residual_diagnostics(resid: &Array1<f64>, ssr: f64) -> ResidualDiagnostics {
    let n = resid.len() as f64;

    let durbin_watson = resid
        .windows(2)
        .into_iter()
        .map(|w| {
            let diff = w.get(1).copied().unwrap_or(0.0) - w.get(0).copied().unwrap_or(0.0);
            diff * diff
        })
        .sum::<f64>()
        / ssr;

    let mean = resid.mean().unwrap_or(f64::NAN);
    let moment = |k: i32| resid.mapv(|e| (e - mean).powi(k)).sum() / n;
    let m2 = moment(2);
    let skew = moment(3) / m2.powf(1.5);
    let kurtosis = moment(4) / (m2 * m2);

    let jarque_bera = n / 6.0 * (skew * skew + (kurtosis - 3.0).powi(2) / 4.0);
    let jarque_bera_p = ChiSquared::new(2.0)
        .ok()
        .filter(|_| !jarque_bera.is_nan())
        .map(|c| c.sf(jarque_bera))
        .unwrap_or(f64::NAN);

    ResidualDiagnostics {
        durbin_watson,
        skew,
        kurtosis,
        jarque_bera,
        jarque_bera_p,
    }
}

impl FitResult {
    /// `intercept + slope * consumption`.
    pub fn predict(&self, consumption: f64) -> f64 {
        self.intercept.coef + self.slope.coef * consumption
    }

    /// Points of the fitted line at each given consumption value.
    pub fn fitted_line(&self, xs: &[f64]) -> Vec<[f64; 2]> {
        xs.iter().map(|&x| [x, self.predict(x)]).collect()
    }

    /// Whether the slope differs from zero at the given significance level.
    pub fn slope_is_significant(&self, alpha: f64) -> bool {
        self.slope.p_value < alpha
    }
}
