//! Spreadsheet loading for soil sample datasets.
//!
//! Dispatches on file extension: workbook formats go through calamine,
//! everything else is read as CSV. All columns are materialized as string
//! columns; numeric coercion happens only in the statistics engine.

use crate::constants::WORKBOOK_EXTENSIONS;
use crate::error::{Result, SoilError};

use calamine::{Data, Reader, open_workbook_auto};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// Load the full dataset from `path`.
///
/// Fails with [`SoilError::FileNotFound`] when the path does not resolve
/// to an existing file, and with [`SoilError::LoadFailed`] when the file
/// exists but cannot be parsed as tabular data. On success the returned
/// frame holds the source columns exactly as present, in source row order.
pub fn load_samples(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(SoilError::file_not_found(path));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    let is_workbook = extension
        .as_deref()
        .is_some_and(|ext| WORKBOOK_EXTENSIONS.contains(&ext));

    let df = if is_workbook {
        read_workbook(path)?
    } else {
        read_csv(path)?
    };

    info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Read a delimited text file with schema inference disabled so every
/// column lands as a string column.
fn read_csv(path: &Path) -> Result<DataFrame> {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .map_err(|e| SoilError::load_failed(path, e))
}

/// Read the first sheet of a workbook into a string-typed frame.
fn read_workbook(path: &Path) -> Result<DataFrame> {
    let mut workbook = open_workbook_auto(path).map_err(|e| SoilError::load_failed(path, e))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| SoilError::load_failed(path, "workbook has no sheets"))?;
    debug!("Reading sheet '{}'", sheet_name);

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SoilError::load_failed(path, e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row
            .iter()
            .enumerate()
            .map(|(index, cell)| header_name(cell, index))
            .collect(),
        None => return Err(SoilError::load_failed(path, "workbook sheet is empty")),
    };

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (index, column) in cells.iter_mut().enumerate() {
            column.push(row.get(index).and_then(cell_value));
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name.into(), values))
        .collect();

    DataFrame::new(columns).map_err(|e| SoilError::load_failed(path, e))
}

/// Header cell to column name; blank headers get a positional name.
fn header_name(cell: &Data, index: usize) -> String {
    let name = match cell {
        Data::String(text) => text.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    };

    if name.is_empty() {
        format!("column_{index}")
    } else {
        name
    }
}

/// Cell to its string rendition; empty and error cells become nulls.
fn cell_value(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
