//! Median aggregation of the edaphic variables.

use crate::constants::{COL_PH, COL_PHOSPHORUS, COL_POTASSIUM};
use crate::error::{Result, SoilError};
use crate::models::EdaphicStats;

use polars::prelude::*;

/// Compute the median of each edaphic variable over `df`.
///
/// A missing column or an empty view yields `None` for the affected
/// statistic. A non-null cell that does not parse as a number aborts the
/// computation with [`SoilError::InvalidNumeric`].
pub fn edaphic_stats(df: &DataFrame) -> Result<EdaphicStats> {
    Ok(EdaphicStats {
        ph: column_median(df, COL_PH)?,
        phosphorus: column_median(df, COL_PHOSPHORUS)?,
        potassium: column_median(df, COL_POTASSIUM)?,
    })
}

/// Median of one column after coercing every non-null cell to `f64`.
fn column_median(df: &DataFrame, column: &str) -> Result<Option<f64>> {
    if df.height() == 0 {
        return Ok(None);
    }
    let Ok(values) = df.column(column) else {
        return Ok(None);
    };

    let values = values.cast(&DataType::String)?;
    let series = values.as_materialized_series();
    let strings = series.str()?;

    let mut numbers = Vec::with_capacity(strings.len());
    for cell in strings.into_iter().flatten() {
        let parsed: f64 = cell
            .trim()
            .parse()
            .map_err(|_| SoilError::invalid_numeric(column, cell))?;
        // NaN cells count as missing, like nulls
        if !parsed.is_nan() {
            numbers.push(parsed);
        }
    }

    Ok(median(&mut numbers))
}

/// Median with the even-length case averaging the two middle values.
fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    values.sort_unstable_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}
