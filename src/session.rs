//! Query session owning the loaded dataset.
//!
//! The session is created once after a successful load and passed by
//! reference through the interactive loop until process exit. The dataset
//! is never mutated, only filtered into derived views.

use crate::constants::{COL_CROP, COL_DEPARTMENT, COL_MUNICIPALITY};
use crate::data::{edaphic_stats, filter_samples, load_samples, unique_values};
use crate::error::Result;
use crate::models::{FilterCriteria, QueryOutcome};

use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};
use tracing::info;

/// One interactive session over a loaded soil sample dataset.
#[derive(Debug)]
pub struct QuerySession {
    source: PathBuf,
    samples: DataFrame,
}

impl QuerySession {
    /// Load `path` and take ownership of the resulting dataset.
    pub fn open(path: &Path) -> Result<Self> {
        let samples = load_samples(path)?;
        info!(
            "Session opened on {} ({} records)",
            path.display(),
            samples.height()
        );

        Ok(Self {
            source: path.to_path_buf(),
            samples,
        })
    }

    /// The full, unfiltered dataset.
    pub fn samples(&self) -> &DataFrame {
        &self.samples
    }

    pub fn record_count(&self) -> usize {
        self.samples.height()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// File name of the data source, for display.
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    /// Departments present in the dataset.
    pub fn departments(&self) -> Vec<String> {
        unique_values(&self.samples, COL_DEPARTMENT)
    }

    /// Municipalities within `department`.
    pub fn municipalities(&self, department: &str) -> Result<Vec<String>> {
        let view = filter_samples(
            &self.samples,
            &FilterCriteria::new().with_department(department),
        )?;
        Ok(unique_values(&view, COL_MUNICIPALITY))
    }

    /// Crops sampled in `municipality`, `department`.
    pub fn crops(&self, department: &str, municipality: &str) -> Result<Vec<String>> {
        let view = filter_samples(
            &self.samples,
            &FilterCriteria::new()
                .with_department(department)
                .with_municipality(municipality),
        )?;
        Ok(unique_values(&view, COL_CROP))
    }

    /// Filter the dataset and compute edaphic statistics over exactly the
    /// filtered, capped view.
    pub fn query(&self, criteria: &FilterCriteria) -> Result<QueryOutcome> {
        let rows = filter_samples(&self.samples, criteria)?;
        let stats = edaphic_stats(&rows)?;
        Ok(QueryOutcome { rows, stats })
    }
}
