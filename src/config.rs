use std::path::PathBuf;

pub const GDP_FILE: &str = "gdp_data.csv";
pub const CONSUMPTION_FILE: &str = "consumption_data.csv";
pub const WINDOW_TITLE: &str = "Consumption and GDP in EU countries";

/// Placeholder shown by the country drop-down before a choice is made.
pub const COUNTRY_PLACEHOLDER: &str = "Select a country";

/// Where the data lives and how the window opens.
///
/// The defaults are the fixed, working-directory relative file names; tests
/// build their own instance pointing at fixtures.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gdp_path: PathBuf,
    pub consumption_path: PathBuf,
    pub window_title: String,
    pub window_size: [f32; 2],
}

impl AppConfig {
    /// Config reading both files from `dir` instead of the working directory.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            gdp_path: dir.join(GDP_FILE),
            consumption_path: dir.join(CONSUMPTION_FILE),
            ..Self::default()
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gdp_path: PathBuf::from(GDP_FILE),
            consumption_path: PathBuf::from(CONSUMPTION_FILE),
            window_title: WINDOW_TITLE.to_owned(),
            window_size: [1000.0, 750.0],
        }
    }
}
