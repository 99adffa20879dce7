use super::*;
use crate::analyser::logic::preparation::{
    group_by_region, join_tables, joined_rows, normalize, prepare,
};

fn tables(dir: &TempDir, consumption: &str, gdp: &str) -> (Table, Table) {
    (
        table(dir, "gdp.csv", gdp),
        table(dir, "consumption.csv", consumption),
    )
}

#[test]
fn test_sub_regions_sum_to_one_after_normalization() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nAAAX,2.0\nAAAY,4.0\n",
        "LOCATION,Value\nAAAX,20.0\nAAAY,40.0\n",
    );

    let regions = prepare(&gdp, &consumption).unwrap();

    assert_eq!(regions.len(), 1, "both codes share the AAA prefix");
    assert_eq!(regions[0].region, "AAA");
    assert!(approx_eq(regions[0].consumption, 1.0));
    assert!(approx_eq(regions[0].gdp, 1.0));
}

#[test]
fn test_distinct_prefixes_stay_separate() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nAAA,2.0\nAAB,4.0\n",
        "LOCATION,Value\nAAA,20.0\nAAB,40.0\n",
    );

    let regions = prepare(&gdp, &consumption).unwrap();

    assert_eq!(regions.len(), 2);
    assert_eq!(regions[0].region, "AAA");
    assert!(approx_eq(regions[0].consumption, 0.0));
    assert_eq!(regions[1].region, "AAB");
    assert!(approx_eq(regions[1].gdp, 1.0));
}

#[test]
fn test_location_missing_from_gdp_is_dropped() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nDEU,10.0\nFRA,20.0\nZZZ,99.0\n",
        "LOCATION,Value\nDEU,1.0\nFRA,2.0\n",
    );

    let joined = joined_rows(&join_tables(&gdp, &consumption).unwrap()).unwrap();
    assert!(joined.iter().all(|r| r.location != "ZZZ"));
    assert_eq!(joined.len(), 2);

    let regions = prepare(&gdp, &consumption).unwrap();
    let codes: Vec<&str> = regions.iter().map(|r| r.region.as_str()).collect();
    assert_eq!(codes, vec!["DEU", "FRA"]);
}

#[test]
fn test_rows_with_missing_values_are_dropped() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nDEU,10.0\nFRA,\nITA,30.0\n",
        "LOCATION,Value\nDEU,1.0\nFRA,2.0\nITA,\n",
    );

    let joined = joined_rows(&join_tables(&gdp, &consumption).unwrap()).unwrap();
    let locations: Vec<&str> = joined.iter().map(|r| r.location.as_str()).collect();
    assert_eq!(locations, vec!["DEU"]);
}

#[test]
fn test_missing_value_markers_are_dropped() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nDEU,10.0\nFRA,NA\nITA,30.0\nESP,20.0\n",
        "LOCATION,Value\nDEU,1.0\nFRA,2.0\nITA,3.0\nESP,NaN\n",
    );

    let regions = prepare(&gdp, &consumption).unwrap();
    let codes: Vec<&str> = regions.iter().map(|r| r.region.as_str()).collect();
    assert_eq!(codes, vec!["DEU", "ITA"], "NA and NaN rows leave the join");
    assert!(
        regions.iter().all(|r| r.consumption.is_finite() && r.gdp.is_finite()),
        "no NaN reaches the regression input: {regions:?}"
    );
}

#[test]
fn test_join_pairs_every_matching_row() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nDEU,10.0\n",
        "LOCATION,TIME,Value\nDEU,2019,1.0\nDEU,2020,2.0\nDEU,2021,3.0\n",
    );

    let joined = joined_rows(&join_tables(&gdp, &consumption).unwrap()).unwrap();
    assert_eq!(joined.len(), 3);
    assert!(joined.iter().all(|r| approx_eq(r.consumption, 10.0)));
}

#[test]
fn test_normalized_values_span_unit_interval() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nAUT,5.0\nBEL,15.0\nDEU,10.0\nESP,7.5\n",
        "LOCATION,Value\nAUT,300.0\nBEL,100.0\nDEU,200.0\nESP,250.0\n",
    );

    let normalized = normalize(join_tables(&gdp, &consumption).unwrap()).unwrap();
    let rows = joined_rows(&normalized).unwrap();

    for column in [
        rows.iter().map(|r| r.consumption).collect::<Vec<_>>(),
        rows.iter().map(|r| r.gdp).collect::<Vec<_>>(),
    ] {
        assert!(column.iter().all(|v| (0.0..=1.0).contains(v)));
        assert_eq!(column.iter().filter(|v| approx_eq(**v, 0.0)).count(), 1);
        assert_eq!(column.iter().filter(|v| approx_eq(**v, 1.0)).count(), 1);
    }

    let esp = rows.iter().find(|r| r.location == "ESP").unwrap();
    assert!(approx_eq(esp.consumption, 0.25));
    assert!(approx_eq(esp.gdp, 0.75));
}

#[test]
fn test_grouping_sums_rather_than_averages() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nDEU1,0.0\nDEU2,5.0\nFRA,10.0\n",
        "LOCATION,Value\nDEU1,0.0\nDEU2,10.0\nFRA,10.0\n",
    );

    let grouped = group_by_region(normalize(join_tables(&gdp, &consumption).unwrap()).unwrap());
    let regions = crate::analyser::logic::preparation::region_rows(&grouped.unwrap()).unwrap();

    let deu = regions.iter().find(|r| r.region == "DEU").unwrap();
    assert!(approx_eq(deu.consumption, 0.5), "0.0 + 0.5, not their mean");
    assert!(approx_eq(deu.gdp, 1.0), "0.0 + 1.0, not their mean");
}

#[test]
fn test_constant_column_normalizes_to_nan_and_sums_to_zero() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nDEU,3.0\nFRA,3.0\n",
        "LOCATION,Value\nDEU,1.0\nFRA,2.0\n",
    );

    let rows = joined_rows(&normalize(join_tables(&gdp, &consumption).unwrap()).unwrap()).unwrap();
    assert!(rows.iter().all(|r| r.consumption.is_nan()));
    assert!(rows.iter().all(|r| !r.gdp.is_nan()));

    let regions = prepare(&gdp, &consumption).unwrap();
    assert_eq!(regions.len(), 2);
    assert!(
        regions.iter().all(|r| approx_eq(r.consumption, 0.0)),
        "region sums skip NaN: {regions:?}"
    );
    assert!(approx_eq(regions[1].gdp, 1.0));
}

#[test]
fn test_empty_join_gives_no_regions() {
    let dir = TempDir::new().unwrap();
    let (gdp, consumption) = tables(
        &dir,
        "LOCATION,Value\nDEU,3.0\n",
        "LOCATION,Value\nFRA,1.0\n",
    );

    let regions = prepare(&gdp, &consumption).unwrap();
    assert!(regions.is_empty());
}
