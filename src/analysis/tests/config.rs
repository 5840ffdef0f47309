use crate::analysis::interpretation;
use crate::analysis::types::TrendConfig;
use anyhow::Result;

#[test]
fn test_default_thresholds() {
    let config = TrendConfig::default();
    assert_eq!(config.significance_level, interpretation::SIGNIFICANCE_LEVEL);
    assert_eq!(config.strong_r2, 0.7);
    assert_eq!(config.moderate_r2, 0.5);
    assert_eq!(config.fast_slope, 1.0);
    assert_eq!(config.moderate_slope, 0.5);
}

#[test]
fn test_json_round_trip() -> Result<()> {
    let config = TrendConfig {
        significance_level: 0.01,
        strong_r2: 0.8,
        ..TrendConfig::default()
    };

    let path = std::env::temp_dir().join(format!(
        "agritrend_config_test_{}.json",
        std::process::id()
    ));
    config.save(&path)?;
    let loaded = TrendConfig::load(&path)?;
    let _ = std::fs::remove_file(&path);

    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_load_rejects_malformed_json() -> Result<()> {
    let path = std::env::temp_dir().join(format!(
        "agritrend_config_bad_{}.json",
        std::process::id()
    ));
    std::fs::write(&path, "{ not json")?;
    let result = TrendConfig::load(&path);
    let _ = std::fs::remove_file(&path);

    assert!(result.is_err());
    Ok(())
}

#[test]
fn test_serde_field_names_are_stable() -> Result<()> {
    // Renderers consume the JSON shape; keep the field names fixed.
    let json = serde_json::to_value(TrendConfig::default())?;
    for field in [
        "significance_level",
        "strong_r2",
        "moderate_r2",
        "fast_slope",
        "moderate_slope",
    ] {
        assert!(json.get(field).is_some(), "missing field {field}");
    }
    Ok(())
}
