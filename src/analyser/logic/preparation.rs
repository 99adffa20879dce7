//! Join, normalize and region grouping of the two source tables.
//!
//! The stages run in a fixed order and each one produces a new frame:
//!
//! ```text
//! consumption ─┐
//!              ├─> join_tables ─> normalize ─> group_by_region ─> Vec<RegionRow>
//! gdp ─────────┘
//! ```
//!
//! Normalization is global over the joined set and happens before grouping,
//! so region values are sums of already scaled values.

use super::io::Table;
use super::types::{
    CONSUMPTION, GDP, JoinedRow, LOCATION, REGION, REGION_PREFIX_LEN, RegionRow, VALUE,
};
use crate::error::Result;
use polars::prelude::*;

/// `Value` renamed to `name`, with NaN turned into null so `drop_nulls`
/// removes it.
fn missing_as_null(name: &str) -> Expr {
    col(VALUE).fill_nan(lit(NULL)).alias(name)
}

/// Inner-joins both tables on `LOCATION` and drops rows with a missing value.
///
/// Locations present in only one table disappear silently. A location with
/// several rows in each table yields every pairing of them.
///
/// # Errors
///
/// Returns error if polars fails to execute the join.
pub fn join_tables(gdp: &Table, consumption: &Table) -> Result<DataFrame> {
    let consumption = consumption
        .frame()
        .clone()
        .lazy()
        .select([col(LOCATION), missing_as_null(CONSUMPTION)]);
    let gdp = gdp
        .frame()
        .clone()
        .lazy()
        .select([col(LOCATION), missing_as_null(GDP)]);

    let joined = consumption
        .join(
            gdp,
            [col(LOCATION)],
            [col(LOCATION)],
            JoinArgs::new(JoinType::Inner),
        )
        .drop_nulls(None)
        .collect()?;

    tracing::debug!(rows = joined.height(), "Joined consumption and GDP");
    Ok(joined)
}

fn min_max(name: &str) -> Expr {
    ((col(name) - col(name).min()) / (col(name).max() - col(name).min())).alias(name)
}

/// Rescales both value columns to `[0, 1]` using the min and max of the
/// whole frame. A constant column yields NaN.
///
/// # Errors
///
/// Returns error if a value column is missing.
pub fn normalize(joined: DataFrame) -> Result<DataFrame> {
    let normalized = joined
        .lazy()
        .with_columns([min_max(CONSUMPTION), min_max(GDP)])
        .collect()?;
    Ok(normalized)
}

/// Sum that ignores NaN, so a group of NaN sums to 0.
fn nan_skipping_sum(name: &str) -> Expr {
    col(name).fill_nan(lit(0.0)).sum()
}

/// Sums both value columns per location prefix, ordered by region code.
///
/// NaN from a constant column is skipped, so such a region sums to 0.
///
/// # Errors
///
/// Returns error if polars fails to aggregate.
pub fn group_by_region(normalized: DataFrame) -> Result<DataFrame> {
    let grouped = normalized
        .lazy()
        .group_by([col(LOCATION)
            .str()
            .slice(lit(0i64), lit(REGION_PREFIX_LEN as u64))
            .alias(REGION)])
        .agg([nan_skipping_sum(CONSUMPTION), nan_skipping_sum(GDP)])
        .sort([REGION], SortMultipleOptions::default())
        .collect()?;

    tracing::debug!(regions = grouped.height(), "Grouped rows by region prefix");
    Ok(grouped)
}

/// Runs every stage and returns one row per region.
///
/// An empty join produces an empty result, not an error.
///
/// # Errors
///
/// Returns error if any stage fails inside polars.
pub fn prepare(gdp: &Table, consumption: &Table) -> Result<Vec<RegionRow>> {
    let joined = join_tables(gdp, consumption)?;
    let normalized = normalize(joined)?;
    let grouped = group_by_region(normalized)?;
    region_rows(&grouped)
}

/// Reads a joined or normalized frame back into typed rows.
///
/// # Errors
///
/// Returns error if the frame lacks the joined columns.
pub fn joined_rows(df: &DataFrame) -> Result<Vec<JoinedRow>> {
    let locations = df.column(LOCATION)?.as_materialized_series().str()?;
    let consumption = df.column(CONSUMPTION)?.as_materialized_series().f64()?;
    let gdp = df.column(GDP)?.as_materialized_series().f64()?;

    Ok(locations
        .into_iter()
        .zip(consumption.into_iter())
        .zip(gdp.into_iter())
        .map(|((location, consumption), gdp)| JoinedRow {
            location: location.unwrap_or_default().to_owned(),
            consumption: consumption.unwrap_or(f64::NAN),
            gdp: gdp.unwrap_or(f64::NAN),
        })
        .collect())
}

/// Reads a grouped frame back into typed rows.
///
/// # Errors
///
/// Returns error if the frame lacks the region columns.
pub fn region_rows(df: &DataFrame) -> Result<Vec<RegionRow>> {
    let regions = df.column(REGION)?.as_materialized_series().str()?;
    let consumption = df.column(CONSUMPTION)?.as_materialized_series().f64()?;
    let gdp = df.column(GDP)?.as_materialized_series().f64()?;

    Ok(regions
        .into_iter()
        .zip(consumption.into_iter())
        .zip(gdp.into_iter())
        .map(|((region, consumption), gdp)| RegionRow {
            region: region.unwrap_or_default().to_owned(),
            consumption: consumption.unwrap_or(f64::NAN),
            gdp: gdp.unwrap_or(f64::NAN),
        })
        .collect())
}
