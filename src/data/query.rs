//! Unique-value resolution and the equality filter chain.

use crate::constants::{COL_CROP, COL_DEPARTMENT, COL_MUNICIPALITY};
use crate::error::Result;
use crate::models::FilterCriteria;

use polars::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

/// Sorted, duplicate-free, null-excluded string values of `column`.
///
/// An absent column yields an empty list rather than an error, so the
/// drill-down menus simply show no options.
pub fn unique_values(df: &DataFrame, column: &str) -> Vec<String> {
    let Ok(values) = df.column(column) else {
        debug!("column '{}' not present in dataset", column);
        return Vec::new();
    };
    let Ok(values) = values.cast(&DataType::String) else {
        return Vec::new();
    };
    let series = values.as_materialized_series();
    let Ok(strings) = series.str() else {
        return Vec::new();
    };

    let unique: BTreeSet<String> = strings.into_iter().flatten().map(str::to_string).collect();
    unique.into_iter().collect()
}

/// Apply the criteria's case-insensitive equality constraints and optional
/// row cap, preserving source row order.
///
/// An absent constraint applies no filtering on its column. The cap keeps
/// the first rows of the filtered sequence; non-positive caps are ignored.
pub fn filter_samples(df: &DataFrame, criteria: &FilterCriteria) -> Result<DataFrame> {
    let constraints = [
        (COL_DEPARTMENT, criteria.department.as_deref()),
        (COL_MUNICIPALITY, criteria.municipality.as_deref()),
        (COL_CROP, criteria.crop.as_deref()),
    ];

    let mut lf = df.clone().lazy();
    for (column, constraint) in constraints {
        if let Some(value) = constraint {
            lf = lf.filter(
                col(column)
                    .str()
                    .to_lowercase()
                    .eq(lit(value.to_lowercase())),
            );
        }
    }

    if let Some(limit) = criteria.effective_limit() {
        lf = lf.limit(limit as IdxSize);
    }

    let filtered = lf.collect()?;
    debug!(
        "filter matched {} of {} rows (criteria: {:?})",
        filtered.height(),
        df.height(),
        criteria
    );
    Ok(filtered)
}
