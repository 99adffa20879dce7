pub mod gui;
pub mod logic;
pub mod model;
pub mod view;

pub use gui::App;
pub use model::AnalysisModel;
