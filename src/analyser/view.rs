//! Renderable descriptions of the five views.
//!
//! Builders are pure functions of the loaded data; the GUI only paints the
//! [`View`] they return. Building a view never touches egui, so every view
//! can be checked in tests without a window.

use super::logic::{
    BoxSummary, FitResult, RegionRow, box_summary, evaluation_text, load_table, summary_report,
};
use crate::config::COUNTRY_PLACEHOLDER;
use crate::error::Result;
use std::path::Path;

pub const REGRESSION_TITLE: &str = "Linear regression model of GDP and consumption in EU countries";
pub const BOXPLOT_TITLE: &str = "Boxplots of consumption and GDP in EU";
pub const EVALUATION_HEADING: &str = "Evaluation of regression model";
pub const SUMMARY_HEADING: &str = "Regression model summary";

/// The user-triggered views, in the order their buttons appear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Regression,
    Boxplots,
    Evaluation,
    Summary,
    GdpOverTime,
}

impl ViewKind {
    pub const ALL: [Self; 5] = [
        Self::Regression,
        Self::Boxplots,
        Self::Evaluation,
        Self::Summary,
        Self::GdpOverTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Regression => "Regression model",
            Self::Boxplots => "Boxplots",
            Self::Evaluation => "Model evaluation",
            Self::Summary => "Model summary",
            Self::GdpOverTime => "GDP over time",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScatterPlot {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<[f64; 2]>,
    pub fitted_line: Vec<[f64; 2]>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoxplotChart {
    pub title: String,
    pub y_label: String,
    pub boxes: Vec<BoxSummary>,
}

/// A line over categorical time labels; label `i` sits at `x = i`.
///
/// Years without a value keep their label but break the line, so the line
/// is stored as separate runs of consecutive points.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub time_labels: Vec<String>,
    pub segments: Vec<Vec<[f64; 2]>>,
}

impl SeriesChart {
    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

/// Splits values at each gap into runs of `[index, value]` points.
fn line_segments(values: &[Option<f64>]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) => current.push([i as f64, *v]),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextReport {
    pub heading: String,
    pub body: String,
    pub monospace: bool,
}

/// What the central panel currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum View {
    #[default]
    Empty,
    Regression(ScatterPlot),
    Boxplots(BoxplotChart),
    TimeSeries(SeriesChart),
    Text(TextReport),
}

/// Scatter of every region plus the fitted line across the observed range.
pub fn regression_view(regions: &[RegionRow], fit: &FitResult) -> View {
    let points: Vec<[f64; 2]> = regions.iter().map(|r| [r.consumption, r.gdp]).collect();

    let finite = || regions.iter().map(|r| r.consumption).filter(|x| x.is_finite());
    let x_min = finite().fold(f64::INFINITY, f64::min);
    let x_max = finite().fold(f64::NEG_INFINITY, f64::max);
    let fitted_line = if x_min <= x_max {
        fit.fitted_line(&[x_min, x_max])
    } else {
        Vec::new()
    };

    View::Regression(ScatterPlot {
        title: REGRESSION_TITLE.to_owned(),
        x_label: "Consumption".to_owned(),
        y_label: "GDP".to_owned(),
        points,
        fitted_line,
    })
}

/// One box for consumption and one for GDP.
///
/// # Errors
///
/// Returns error if the quartiles cannot be computed.
pub fn boxplot_view(regions: &[RegionRow]) -> Result<View> {
    let consumption: Vec<f64> = regions.iter().map(|r| r.consumption).collect();
    let gdp: Vec<f64> = regions.iter().map(|r| r.gdp).collect();

    let boxes = [
        box_summary("Consumption", &consumption)?,
        box_summary("GDP", &gdp)?,
    ]
    .into_iter()
    .flatten()
    .collect();

    Ok(View::Boxplots(BoxplotChart {
        title: BOXPLOT_TITLE.to_owned(),
        y_label: "Dollars".to_owned(),
        boxes,
    }))
}

/// GDP over time for one location, read fresh from the raw GDP file.
///
/// Returns `Ok(None)` when nothing is selected, in which case the caller
/// keeps whatever is on screen.
///
/// # Errors
///
/// Returns error if the GDP file cannot be read or has no `TIME` column.
pub fn time_series_view(gdp_path: &Path, selection: &str) -> Result<Option<View>> {
    if selection.is_empty() || selection == COUNTRY_PLACEHOLDER {
        return Ok(None);
    }

    let records = load_table(gdp_path)?.series_for(selection)?;
    tracing::debug!(location = selection, points = records.len(), "Built GDP series");

    let values: Vec<Option<f64>> = records.iter().map(|r| r.value).collect();
    let time_labels = records.into_iter().map(|r| r.time).collect();

    Ok(Some(View::TimeSeries(SeriesChart {
        title: format!("GDP in {selection}"),
        x_label: "Time".to_owned(),
        y_label: "GDP".to_owned(),
        time_labels,
        segments: line_segments(&values),
    })))
}

pub fn evaluation_view(fit: &FitResult) -> View {
    View::Text(TextReport {
        heading: EVALUATION_HEADING.to_owned(),
        body: evaluation_text(fit),
        monospace: false,
    })
}

pub fn summary_view(fit: &FitResult) -> View {
    View::Text(TextReport {
        heading: SUMMARY_HEADING.to_owned(),
        body: summary_report(fit),
        monospace: true,
    })
}
