//! Plain-text regression summary in the familiar "OLS Regression Results"
//! layout: a header block of fit statistics, the coefficient table, then the
//! residual diagnostics.

use super::regression::CONFIDENCE;
use super::types::{CoefficientEstimate, FitResult};
use crate::utils::{fmt_num, fmt_prob, fmt_sci};
use comfy_table::presets::ASCII_HORIZONTAL_ONLY;
use comfy_table::{Cell, CellAlignment, Table};

pub const REPORT_TITLE: &str = "OLS Regression Results";
const REPORT_WIDTH: usize = 78;
const HALF_WIDTH: usize = 39;

/// Two label/value pairs laid out side by side on one line.
fn header_line(left: (&str, String), right: (&str, String)) -> String {
    let left_value_width = HALF_WIDTH - 1 - left.0.len();
    let right_value_width = HALF_WIDTH - right.0.len();
    format!(
        "{}{:>lw$} {}{:>rw$}",
        left.0,
        left.1,
        right.0,
        right.1,
        lw = left_value_width,
        rw = right_value_width,
    )
}

fn coefficient_row(c: &CoefficientEstimate) -> Vec<Cell> {
    vec![
        Cell::new(&c.name),
        Cell::new(fmt_num(c.coef, 4)),
        Cell::new(fmt_num(c.std_err, 3)),
        Cell::new(fmt_num(c.t_value, 3)),
        Cell::new(fmt_prob(c.p_value)),
        Cell::new(fmt_num(c.ci_lower, 3)),
        Cell::new(fmt_num(c.ci_upper, 3)),
    ]
}

fn coefficient_table(fit: &FitResult) -> Table {
    let lower = (1.0 - CONFIDENCE) / 2.0;
    let upper = 1.0 - lower;

    let mut table = Table::new();
    table.load_preset(ASCII_HORIZONTAL_ONLY);
    table.set_header(vec![
        Cell::new(""),
        Cell::new("coef"),
        Cell::new("std err"),
        Cell::new("t"),
        Cell::new("P>|t|"),
        Cell::new(format!("[{lower:.3}")),
        Cell::new(format!("{upper:.3}]")),
    ]);
    table.add_row(coefficient_row(&fit.intercept));
    table.add_row(coefficient_row(&fit.slope));

    for index in 1..7 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

/// Renders the full summary of a fitted model.
pub fn summary_report(fit: &FitResult) -> String {
    let rule = "=".repeat(REPORT_WIDTH);
    let d = &fit.diagnostics;

    let mut lines = vec![
        format!("{REPORT_TITLE:^REPORT_WIDTH$}"),
        rule.clone(),
        header_line(
            ("Dep. Variable:", fit.dependent.clone()),
            ("R-squared:", fmt_num(fit.r_squared, 3)),
        ),
        header_line(
            ("Model:", "OLS".to_owned()),
            ("Adj. R-squared:", fmt_num(fit.adj_r_squared, 3)),
        ),
        header_line(
            ("Method:", "Least Squares".to_owned()),
            ("F-statistic:", fmt_num(fit.f_statistic, 2)),
        ),
        header_line(
            ("No. Observations:", fit.n_obs.to_string()),
            ("Prob (F-statistic):", fmt_sci(fit.f_p_value)),
        ),
        header_line(
            ("Df Residuals:", fit.df_resid.to_string()),
            ("Log-Likelihood:", fmt_num(fit.log_likelihood, 3)),
        ),
        header_line(
            ("Df Model:", fit.df_model.to_string()),
            ("AIC:", fmt_num(fit.aic, 2)),
        ),
        header_line(
            ("Covariance Type:", "nonrobust".to_owned()),
            ("BIC:", fmt_num(fit.bic, 2)),
        ),
        rule.clone(),
        coefficient_table(fit).to_string(),
        rule.clone(),
        header_line(
            ("Durbin-Watson:", fmt_num(d.durbin_watson, 3)),
            ("Jarque-Bera (JB):", fmt_num(d.jarque_bera, 3)),
        ),
        header_line(
            ("Skew:", fmt_num(d.skew, 3)),
            ("Prob(JB):", fmt_prob(d.jarque_bera_p)),
        ),
        header_line(("Kurtosis:", fmt_num(d.kurtosis, 3)), ("", String::new())),
        rule,
    ];

    if fit.df_resid == 0 {
        lines.push(
            "Notes: the model is saturated (no residual degrees of freedom); \
             inference statistics are undefined."
                .to_owned(),
        );
    }

    lines.join("\n")
}
