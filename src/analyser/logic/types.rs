use serde::{Deserialize, Serialize};

// COLUMN NAMES

pub const LOCATION: &str = "LOCATION";
pub const TIME: &str = "TIME";
pub const VALUE: &str = "Value";
pub const CONSUMPTION: &str = "Value_consumption";
pub const GDP: &str = "Value_gdp";
pub const REGION: &str = "REGION";

/// Length of the location prefix that identifies a region.
pub const REGION_PREFIX_LEN: usize = 3;

// DATA STRUCTURES

/// One row of a source file. `value` is `None` where the file has no value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub location: String,
    pub time: String,
    pub value: Option<f64>,
}

/// A consumption/GDP pair for one location after the inner join.
///
/// Also used for the normalized stage, which keeps the same shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JoinedRow {
    pub location: String,
    pub consumption: f64,
    pub gdp: f64,
}

/// Summed normalized values for one region prefix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionRow {
    pub region: String,
    pub consumption: f64,
    pub gdp: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoefficientEstimate {
    pub name: String,
    pub coef: f64,
    pub std_err: f64,
    pub t_value: f64,
    pub p_value: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
}

/// Residual diagnostics printed under the coefficient table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResidualDiagnostics {
    pub durbin_watson: f64,
    pub skew: f64,
    pub kurtosis: f64,
    pub jarque_bera: f64,
    pub jarque_bera_p: f64,
}

/// Outcome of the OLS fit of GDP on consumption.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    pub dependent: String,
    pub intercept: CoefficientEstimate,
    pub slope: CoefficientEstimate,
    pub n_obs: usize,
    pub df_model: usize,
    pub df_resid: usize,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub f_statistic: f64,
    pub f_p_value: f64,
    pub log_likelihood: f64,
    pub aic: f64,
    pub bic: f64,
    pub diagnostics: ResidualDiagnostics,
}

/// Five-number summary with 1.5·IQR whiskers for one boxplot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxSummary {
    pub label: String,
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}
