use super::logic::{FitResult, RegionRow, fit, load_table, prepare};
use super::view::{
    View, ViewKind, boxplot_view, evaluation_view, regression_view, summary_view,
    time_series_view,
};
use crate::config::{AppConfig, COUNTRY_PLACEHOLDER};
use anyhow::{Context as _, Result};

/// Everything the window reads: computed once at startup, then only the
/// current view, the selection and the status line change.
#[derive(Debug)]
pub struct AnalysisModel {
    pub config: AppConfig,
    pub regions: Vec<RegionRow>,
    pub fit: FitResult,
    pub selected_country: String,
    pub current: View,
    pub status: Option<String>,
}

impl AnalysisModel {
    /// Loads both files, prepares the region rows and fits the model.
    ///
    /// # Errors
    ///
    /// Any failure here is fatal: unreadable files, missing columns,
    /// non-numeric values or an unsolvable regression.
    pub fn load(config: AppConfig) -> Result<Self> {
        let consumption = load_table(&config.consumption_path).with_context(|| {
            format!(
                "Failed to load consumption data from {}",
                config.consumption_path.display()
            )
        })?;
        let gdp = load_table(&config.gdp_path)
            .with_context(|| format!("Failed to load GDP data from {}", config.gdp_path.display()))?;

        let regions = prepare(&gdp, &consumption).context("Failed to prepare data")?;
        tracing::info!(regions = regions.len(), "Prepared region rows");

        let fit = fit(&regions).context("Failed to fit regression model")?;
        Ok(Self::from_parts(config, regions, fit))
    }

    pub fn from_parts(config: AppConfig, regions: Vec<RegionRow>, fit: FitResult) -> Self {
        Self {
            config,
            regions,
            fit,
            selected_country: COUNTRY_PLACEHOLDER.to_owned(),
            current: View::Empty,
            status: None,
        }
    }

    /// Codes offered by the country drop-down.
    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.region.as_str())
    }

    /// Builds the requested view without changing anything.
    ///
    /// `Ok(None)` means there is nothing to draw.
    ///
    /// # Errors
    ///
    /// Returns error if the view needs data that cannot be read.
    pub fn build(&self, kind: ViewKind) -> crate::error::Result<Option<View>> {
        let view = match kind {
            ViewKind::Regression => regression_view(&self.regions, &self.fit),
            ViewKind::Boxplots => boxplot_view(&self.regions)?,
            ViewKind::Evaluation => evaluation_view(&self.fit),
            ViewKind::Summary => summary_view(&self.fit),
            ViewKind::GdpOverTime => {
                return time_series_view(&self.config.gdp_path, &self.selected_country);
            }
        };
        Ok(Some(view))
    }

    /// Replaces the current view with the requested one.
    ///
    /// A missing selection leaves the screen as it is; a failure is reported
    /// in the status line and also leaves the screen as it is.
    pub fn show(&mut self, kind: ViewKind) {
        match self.build(kind) {
            Ok(Some(view)) => {
                tracing::debug!(view = kind.as_str(), "Showing view");
                self.current = view;
                self.status = None;
            }
            Ok(None) => {
                tracing::debug!(view = kind.as_str(), "Nothing selected, view unchanged");
            }
            Err(e) => {
                tracing::error!(view = kind.as_str(), "Failed to build view: {e}");
                self.status = Some(format!("{}: {e}", kind.as_str()));
            }
        }
    }
}
