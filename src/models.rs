//! Core data structures for soil sample queries.
//!
//! Defines the filter criteria built up by the drill-down menus, the
//! edaphic statistics derived from a filtered view, and the combined
//! query outcome handed to the interaction layer for rendering.

use crate::constants::{LABEL_PH, LABEL_PHOSPHORUS, LABEL_POTASSIUM};
use polars::prelude::DataFrame;

/// Exact-match constraints for one query iteration.
///
/// Every field is optional; an absent constraint applies no filtering on
/// its column. Created fresh per query and discarded with the result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub department: Option<String>,
    pub municipality: Option<String>,
    pub crop: Option<String>,
    /// Row cap applied after filtering. Zero or negative means no cap,
    /// preserving the tool's historical behavior.
    pub limit: Option<i64>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = Some(municipality.into());
        self
    }

    pub fn with_crop(mut self, crop: impl Into<String>) -> Self {
        self.crop = Some(crop.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// True when no column constraint is set. The row cap is not a
    /// constraint.
    pub fn is_unconstrained(&self) -> bool {
        self.department.is_none() && self.municipality.is_none() && self.crop.is_none()
    }

    /// The row cap to apply, if any. Non-positive caps collapse to "no cap".
    pub fn effective_limit(&self) -> Option<usize> {
        match self.limit {
            Some(limit) if limit > 0 => Some(limit as usize),
            _ => None,
        }
    }
}

/// Median values of the edaphic variables over a filtered view.
///
/// `None` means the source column is missing from the dataset or the view
/// was empty, never zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdaphicStats {
    pub ph: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
}

impl EdaphicStats {
    /// Label/value pairs in display order
    pub fn labelled(&self) -> [(&'static str, Option<f64>); 3] {
        [
            (LABEL_PH, self.ph),
            (LABEL_PHOSPHORUS, self.phosphorus),
            (LABEL_POTASSIUM, self.potassium),
        ]
    }

    /// True when no statistic could be computed
    pub fn is_empty(&self) -> bool {
        self.ph.is_none() && self.phosphorus.is_none() && self.potassium.is_none()
    }
}

/// Result of one drill-down query: the filtered rows and the statistics
/// computed from exactly those rows.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub rows: DataFrame,
    pub stats: EdaphicStats,
}

impl QueryOutcome {
    pub fn row_count(&self) -> usize {
        self.rows.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_criteria_builder() {
        let criteria = FilterCriteria::new()
            .with_department("Huila")
            .with_crop("Café")
            .with_limit(10);

        assert_eq!(criteria.department.as_deref(), Some("Huila"));
        assert_eq!(criteria.municipality, None);
        assert_eq!(criteria.crop.as_deref(), Some("Café"));
        assert_eq!(criteria.limit, Some(10));
        assert!(!criteria.is_unconstrained());
    }

    #[test]
    fn test_effective_limit_collapses_non_positive() {
        assert_eq!(FilterCriteria::new().effective_limit(), None);
        assert_eq!(FilterCriteria::new().with_limit(0).effective_limit(), None);
        assert_eq!(FilterCriteria::new().with_limit(-3).effective_limit(), None);
        assert_eq!(FilterCriteria::new().with_limit(5).effective_limit(), Some(5));
    }

    #[test]
    fn test_stats_labels_in_display_order() {
        let stats = EdaphicStats {
            ph: Some(6.2),
            phosphorus: None,
            potassium: None,
        };

        let labelled = stats.labelled();
        assert_eq!(labelled[0], ("pH", Some(6.2)));
        assert_eq!(labelled[1], ("Fósforo (P)", None));
        assert_eq!(labelled[2], ("Potasio (K)", None));
        assert!(!stats.is_empty());
        assert!(EdaphicStats::default().is_empty());
    }
}
