use super::types::BoxSummary;
use crate::error::Result;
use polars::prelude::*;

/// Whisker reach in multiples of the interquartile range.
pub const WHISKER_IQR: f64 = 1.5;

/// Quartiles by linear interpolation, whiskers at the furthest observations
/// within 1.5·IQR of the box, everything beyond them as outliers.
///
/// Returns `None` when `values` holds no finite number.
///
/// # Errors
///
/// Returns error if polars cannot compute a quantile.
pub fn box_summary(label: &str, values: &[f64]) -> Result<Option<BoxSummary>> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let series = Series::new(label.into(), finite.as_slice());
    let ca = series.f64()?;

    let (Some(q1), Some(median), Some(q3)) = (
        ca.quantile(0.25, QuantileMethod::Linear)?,
        ca.median(),
        ca.quantile(0.75, QuantileMethod::Linear)?,
    ) else {
        return Ok(None);
    };

    let iqr = q3 - q1;
    let low_fence = q1 - WHISKER_IQR * iqr;
    let high_fence = q3 + WHISKER_IQR * iqr;

    let inside = || finite.iter().copied().filter(|v| *v >= low_fence && *v <= high_fence);
    let lower_whisker = inside().fold(f64::INFINITY, f64::min).min(q1);
    let upper_whisker = inside().fold(f64::NEG_INFINITY, f64::max).max(q3);
    let outliers = finite
        .iter()
        .copied()
        .filter(|v| *v < low_fence || *v > high_fence)
        .collect();

    Ok(Some(BoxSummary {
        label: label.to_owned(),
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
        outliers,
    }))
}
