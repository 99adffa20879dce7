use super::types::{LOCATION, RawRecord, TIME, VALUE};
use crate::error::{AppError, Result};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Field contents read as missing, the same set pandas recognises by default.
pub const NULL_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A source file held in memory, keyed by location code.
///
/// `LOCATION` is guaranteed to be a string column and `Value` a float
/// column; every other column is kept as read.
#[derive(Clone, Debug)]
pub struct Table {
    path: PathBuf,
    df: DataFrame,
}

impl Table {
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// Rows whose location equals `location` exactly, in file order.
    ///
    /// Rows with a missing value are kept with `value: None` so the time axis
    /// still has a slot for them.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingColumn`] if the file has no `TIME` column.
    pub fn series_for(&self, location: &str) -> Result<Vec<RawRecord>> {
        self.require(TIME)?;
        records_of(
            self.df
                .clone()
                .lazy()
                .filter(col(LOCATION).eq(lit(location))),
        )
    }

    fn has_column(&self, name: &str) -> bool {
        self.df.column(name).is_ok()
    }

    fn require(&self, column: &str) -> Result<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(AppError::MissingColumn {
                path: self.path.display().to_string(),
                column: column.to_owned(),
            })
        }
    }
}

/// Reads a CSV file and checks that `LOCATION` and `Value` are present.
///
/// Any field matching [`NULL_TOKENS`] is read as null.
///
/// # Errors
///
/// - [`AppError::Io`] if the file cannot be opened
/// - [`AppError::MissingColumn`] if a required column is absent
/// - [`AppError::DataProcessing`] if the CSV is malformed or `Value` is not numeric
pub fn load_table(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path)?;
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(10000))
        .map_parse_options(|opts| {
            opts.with_null_values(Some(NullValues::AllColumns(
                NULL_TOKENS.iter().map(|t| (*t).into()).collect(),
            )))
        })
        .into_reader_with_file_handle(file)
        .finish()?;

    let raw = Table {
        path: path.to_path_buf(),
        df,
    };
    raw.require(LOCATION)?;
    raw.require(VALUE)?;

    let df = raw
        .df
        .lazy()
        .with_columns([
            col(LOCATION).cast(DataType::String),
            col(VALUE).strict_cast(DataType::Float64),
        ])
        .collect()?;

    tracing::debug!(path = %path.display(), rows = df.height(), "Loaded table");

    Ok(Table {
        path: raw.path,
        df,
    })
}

fn records_of(lf: LazyFrame) -> Result<Vec<RawRecord>> {
    let df = lf
        .select([
            col(LOCATION),
            col(TIME).cast(DataType::String),
            col(VALUE),
        ])
        .collect()?;

    let locations = df.column(LOCATION)?.as_materialized_series().str()?;
    let times = df.column(TIME)?.as_materialized_series().str()?;
    let values = df.column(VALUE)?.as_materialized_series().f64()?;

    let records = locations
        .into_iter()
        .zip(times.into_iter())
        .zip(values.into_iter())
        .filter_map(|((location, time), value)| {
            Some(RawRecord {
                location: location?.to_owned(),
                time: time.unwrap_or_default().to_owned(),
                value: value.filter(|v| !v.is_nan()),
            })
        })
        .collect();

    Ok(records)
}
