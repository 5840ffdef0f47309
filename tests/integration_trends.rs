//! Integration tests for the full trend-analysis workflow
//!
//! These tests build multi-year collections in memory and verify the
//! engine's end-to-end contract: common-column intersection, gap
//! propagation, the significance gate, and series/trend agreement.

use agritrend::analysis::{TrendConfig, TrendDirection, TrendEngine};
use agritrend::collection::DatasetCollection;
use agritrend::labels::CodeBook;
use polars::prelude::*;

/// Eight years of livestock-count data in the shape the loader produces:
/// one frame per year, one row per holding.
fn livestock_collection() -> DatasetCollection {
    let mut collection = DatasetCollection::new();
    for (index, year) in (2017..=2024).enumerate() {
        let step = index as f64;
        // "120" grows steadily, "140" shrinks, "160" fluctuates without
        // direction, "150" is constant.
        let wobble = if index % 2 == 0 { 3.0 } else { -3.0 };
        let df = df!(
            "120" => [10.0 + step, 12.0 + step, 14.0 + step],
            "140" => [30.0 - 2.0 * step, 32.0 - 2.0 * step, 28.0 - 2.0 * step],
            "160" => [5.0 + wobble, 5.0 + wobble, 5.0 + wobble],
            "150" => [7.0, 7.0, 7.0],
        )
        .expect("valid test frame");
        collection.insert(year, df).expect("unique years");
    }
    collection
}

#[test]
fn test_full_workflow_on_livestock_data() {
    let collection = livestock_collection();
    let engine = TrendEngine::default();

    let trends = engine.compute_trends(&collection).expect("trends");

    let growing = trends.get("120").expect("steady growth is significant");
    assert_eq!(growing.direction, TrendDirection::Increasing);
    assert!((growing.slope - 1.0).abs() < 1e-9);
    assert!(growing.p_value < 1e-6);
    assert_eq!(growing.description, "strong and moderate trend");

    let shrinking = trends.get("140").expect("steady decline is significant");
    assert_eq!(shrinking.direction, TrendDirection::Decreasing);
    assert!((shrinking.slope + 2.0).abs() < 1e-9);
    assert_eq!(shrinking.description, "strong and fast trend");

    assert!(
        !trends.contains_key("160"),
        "directionless fluctuation must fail the gate"
    );
    assert!(
        !trends.contains_key("150"),
        "constant column must fail the gate"
    );
}

#[test]
fn test_series_covers_every_common_column() {
    let collection = livestock_collection();
    let engine = TrendEngine::default();

    let series = engine.compute_series(&collection).expect("series");
    let common = collection.common_numeric_columns();
    assert_eq!(series.len(), common.len());
    for column in &common {
        let s = series.get(column).expect("every common column present");
        assert_eq!(s.years.len(), collection.len());
        assert_eq!(s.values.len(), collection.len());
    }
}

#[test]
fn test_trends_never_beat_the_configured_level() {
    let collection = livestock_collection();
    for level in [0.05, 0.01, 0.001] {
        let engine = TrendEngine::new(TrendConfig {
            significance_level: level,
            ..TrendConfig::default()
        });
        let trends = engine.compute_trends(&collection).expect("trends");
        for (column, trend) in &trends {
            assert!(
                trend.p_value < level,
                "{column} returned with p={} at level {level}",
                trend.p_value
            );
        }
    }
}

#[test]
fn test_column_missing_in_one_year_excluded_everywhere() {
    let mut collection = DatasetCollection::new();
    collection
        .insert(2018, df!("x" => [1.0], "y" => [10.0]).unwrap())
        .unwrap();
    collection
        .insert(2019, df!("x" => [2.0], "y" => [20.0]).unwrap())
        .unwrap();
    // 2020 has no "y" at all: two of three years are not enough.
    collection.insert(2020, df!("x" => [3.0]).unwrap()).unwrap();

    let engine = TrendEngine::default();
    let trends = engine.compute_trends(&collection).expect("trends");
    let series = engine.compute_series(&collection).expect("series");

    assert!(trends.contains_key("x"));
    assert!(!trends.contains_key("y"));
    assert!(series.contains_key("x"));
    assert!(!series.contains_key("y"));
}

#[test]
fn test_string_typed_column_excluded() {
    let mut collection = DatasetCollection::new();
    collection
        .insert(2018, df!("region" => ["east"], "x" => [1.0]).unwrap())
        .unwrap();
    collection
        .insert(2019, df!("region" => ["west"], "x" => [2.0]).unwrap())
        .unwrap();

    let series = TrendEngine::default()
        .compute_series(&collection)
        .expect("series");
    assert!(series.contains_key("x"));
    assert!(!series.contains_key("region"));
}

#[test]
fn test_empty_collection_rejected() {
    let engine = TrendEngine::default();
    let empty = DatasetCollection::new();
    assert!(engine.compute_trends(&empty).is_err());
    assert!(engine.compute_series(&empty).is_err());
}

#[test]
fn test_trend_report_with_code_book() {
    // The renderer-facing flow: compute trends, then label the coded
    // columns for display.
    let collection = livestock_collection();
    let trends = TrendEngine::default()
        .compute_trends(&collection)
        .expect("trends");

    let book = CodeBook::parse("120 = Dairy cows\n140 = Sheep over 1 year");
    let mut lines: Vec<String> = trends
        .iter()
        .map(|(code, trend)| {
            format!(
                "{} ({code}): {} trend, p={:.4}",
                book.display_name(code),
                trend.direction,
                trend.p_value
            )
        })
        .collect();
    lines.sort();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Dairy cows (120): increasing"));
    assert!(lines[1].starts_with("Sheep over 1 year (140): decreasing"));
}

#[test]
fn test_results_serialize_for_renderers() {
    let collection = livestock_collection();
    let engine = TrendEngine::default();

    let trends = engine.compute_trends(&collection).expect("trends");
    let json = serde_json::to_value(&trends).expect("trends serialize");
    assert_eq!(json["120"]["direction"], "increasing");
    assert_eq!(json["140"]["direction"], "decreasing");

    let series = engine.compute_series(&collection).expect("series");
    let json = serde_json::to_value(&series).expect("series serialize");
    assert!(json["150"]["values"].is_array());
}
