//! Unit tests for the data access layer.

pub mod query_tests;

use polars::prelude::*;

/// Fixture covering three departments, a null municipality and mixed-case
/// crop names.
pub fn sample_frame() -> DataFrame {
    df!(
        "departamento" => ["Huila", "Huila", "Tolima", "Antioquia"],
        "municipio" => [Some("Neiva"), Some("Neiva"), Some("Ibagué"), None],
        "cultivo" => ["Café", "Café", "Arroz", "Maíz"],
        "ph" => ["6.0", "6.4", "5.8", "6.1"],
    )
    .unwrap()
}

/// The three-row scenario frame: two Huila coffee samples and one Tolima
/// rice sample, pH only.
pub fn scenario_frame() -> DataFrame {
    df!(
        "departamento" => ["Huila", "Huila", "Tolima"],
        "municipio" => ["Neiva", "Neiva", "Ibagué"],
        "cultivo" => ["Café", "Café", "Arroz"],
        "ph" => ["6.0", "6.4", "5.8"],
    )
    .unwrap()
}

/// String column values in row order, nulls skipped.
pub fn str_column(df: &DataFrame, name: &str) -> Vec<String> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect()
}
