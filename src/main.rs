//! Desktop entry point.
//!
//! Loads both CSV files from the working directory, fits the model, and
//! opens the window. Any failure before the window opens ends the process.

#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use gdp_consumption::analyser::{AnalysisModel, App};
use gdp_consumption::config::AppConfig;
use gdp_consumption::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init()?;

    let config = AppConfig::default();
    let model = AnalysisModel::load(config.clone())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    // Blocks until the window is closed
    eframe::run_native(
        &config.window_title,
        options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, model)))),
    )?;
    Ok(())
}
