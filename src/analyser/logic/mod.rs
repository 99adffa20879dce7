pub mod descriptive;
pub mod interpretation;
pub mod io;
pub mod preparation;
pub mod regression;
pub mod report;
pub mod types;

pub use descriptive::box_summary;
pub use interpretation::{evaluation_sentences, evaluation_text};
pub use io::{Table, load_table};
pub use preparation::{group_by_region, join_tables, joined_rows, normalize, prepare, region_rows};
pub use regression::fit;
pub use report::summary_report;
pub use types::{
    BoxSummary, CoefficientEstimate, FitResult, JoinedRow, RawRecord, RegionRow,
    ResidualDiagnostics,
};
