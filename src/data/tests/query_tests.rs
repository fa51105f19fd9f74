//! Filter engine and unique value resolver tests.

use super::{sample_frame, scenario_frame, str_column};
use crate::data::{filter_samples, unique_values};
use crate::models::FilterCriteria;

#[test]
fn test_unique_values_sorted_and_deduplicated() {
    let df = sample_frame();

    let departments = unique_values(&df, "departamento");
    assert_eq!(departments, vec!["Antioquia", "Huila", "Tolima"]);

    // Strictly ascending means no duplicates survive
    let crops = unique_values(&df, "cultivo");
    assert_eq!(crops, vec!["Arroz", "Café", "Maíz"]);
}

#[test]
fn test_unique_values_excludes_nulls() {
    let df = sample_frame();

    let municipalities = unique_values(&df, "municipio");
    assert_eq!(municipalities, vec!["Ibagué", "Neiva"]);
}

#[test]
fn test_unique_values_absent_column_is_empty() {
    let df = sample_frame();
    assert!(unique_values(&df, "vereda").is_empty());
}

#[test]
fn test_unconstrained_filter_preserves_everything() {
    let df = sample_frame();

    let filtered = filter_samples(&df, &FilterCriteria::new()).unwrap();
    assert!(filtered.equals_missing(&df));
}

#[test]
fn test_filter_is_case_insensitive() {
    let df = sample_frame();

    let criteria = FilterCriteria::new()
        .with_department("HUILA")
        .with_crop("café");
    let filtered = filter_samples(&df, &criteria).unwrap();

    assert_eq!(filtered.height(), 2);
    assert_eq!(str_column(&filtered, "ph"), vec!["6.0", "6.4"]);
}

#[test]
fn test_filter_preserves_row_order() {
    let df = sample_frame();

    let filtered =
        filter_samples(&df, &FilterCriteria::new().with_department("Huila")).unwrap();
    assert_eq!(str_column(&filtered, "ph"), vec!["6.0", "6.4"]);
}

#[test]
fn test_filter_is_idempotent() {
    let df = sample_frame();
    let criteria = FilterCriteria::new().with_department("Huila").with_crop("Café");

    let once = filter_samples(&df, &criteria).unwrap();
    let twice = filter_samples(&once, &criteria).unwrap();
    assert!(twice.equals_missing(&once));
}

#[test]
fn test_limit_caps_from_the_front() {
    let df = sample_frame();

    let capped = filter_samples(&df, &FilterCriteria::new().with_limit(2)).unwrap();
    assert_eq!(capped.height(), 2);
    assert_eq!(str_column(&capped, "ph"), vec!["6.0", "6.4"]);

    // A cap larger than the view is a no-op
    let generous = filter_samples(&df, &FilterCriteria::new().with_limit(100)).unwrap();
    assert_eq!(generous.height(), df.height());
}

#[test]
fn test_non_positive_limit_means_no_limit() {
    let df = sample_frame();

    for limit in [0, -1, -100] {
        let filtered = filter_samples(&df, &FilterCriteria::new().with_limit(limit)).unwrap();
        assert_eq!(filtered.height(), df.height());
    }
}

#[test]
fn test_scenario_huila_coffee_case_mismatch() {
    let df = scenario_frame();

    let criteria = FilterCriteria::new()
        .with_department("Huila")
        .with_crop("café");
    let filtered = filter_samples(&df, &criteria).unwrap();

    assert_eq!(filtered.height(), 2);
    assert_eq!(str_column(&filtered, "ph"), vec!["6.0", "6.4"]);
}
