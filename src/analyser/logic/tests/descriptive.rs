use super::*;
use crate::analyser::logic::descriptive::box_summary;

#[test]
fn test_box_summary_quartiles_and_outlier() {
    let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 100.0];
    let summary = box_summary("GDP", &values).unwrap().unwrap();

    assert_eq!(summary.label, "GDP");
    assert!(approx_eq(summary.q1, 3.25));
    assert!(approx_eq(summary.median, 5.5));
    assert!(approx_eq(summary.q3, 7.75));
    assert!(approx_eq(summary.lower_whisker, 1.0));
    assert!(approx_eq(summary.upper_whisker, 9.0));
    assert_eq!(summary.outliers, vec![100.0]);
}

#[test]
fn test_box_summary_without_outliers_reaches_extremes() {
    let summary = box_summary("Consumption", &[0.2, 0.4, 0.6, 0.8])
        .unwrap()
        .unwrap();
    assert!(approx_eq(summary.lower_whisker, 0.2));
    assert!(approx_eq(summary.upper_whisker, 0.8));
    assert!(summary.outliers.is_empty());
}

#[test]
fn test_box_summary_of_nothing() {
    assert!(box_summary("GDP", &[]).unwrap().is_none());
    assert!(box_summary("GDP", &[f64::NAN]).unwrap().is_none());
}
