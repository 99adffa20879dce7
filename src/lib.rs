//! # GDP and Consumption
//!
//! Loads OECD GDP and household consumption figures, joins and normalizes
//! them, fits an ordinary least squares model of GDP on consumption, and
//! shows the result in a small desktop window.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gdp_consumption::analyser::logic;
//! use std::path::Path;
//!
//! # fn example() -> gdp_consumption::error::Result<()> {
//! let gdp = logic::load_table(Path::new("gdp_data.csv"))?;
//! let consumption = logic::load_table(Path::new("consumption_data.csv"))?;
//!
//! let regions = logic::prepare(&gdp, &consumption)?;
//! let fit = logic::fit(&regions)?;
//! println!("{}", logic::summary_report(&fit));
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`analyser::logic`]: loading, preparation, regression and reports
//! - [`analyser::view`]: renderable descriptions of each view
//! - [`analyser::gui`]: the egui window painting those views
//! - [`config`]: file locations and window settings
//! - [`error`]: error types
//! - [`logging`]: tracing subscriber setup
//!
//! ## Pipeline
//!
//! ```text
//! gdp_data.csv ──────────┐
//!                        ├─> join ─> drop missing ─> min-max ─> sum by region ─> OLS
//! consumption_data.csv ──┘
//! ```

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod logging;
pub mod theme;
pub mod utils;
