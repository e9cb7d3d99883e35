//! Integration tests for configuration management

use gpa_calc::config::{Config, ConfigOverrides, MAX_DECIMALS};
use gpa_calc::core::report::ReportFormat;
use gpa_calc::core::WeightSumPolicy;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert_eq!(config.display.decimals, 2);
    assert_eq!(config.report_format(), ReportFormat::Text);
    assert!(config.grading.weight_tolerance > 0.0);
    assert!(matches!(
        config.weight_policy(),
        WeightSumPolicy::Tolerance(_)
    ));
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[display]
decimals = 3
format = "html"

[grading]
weight_tolerance = 0.01
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.display.decimals, 3);
    assert_eq!(config.report_format(), ReportFormat::Html);
    assert_eq!(config.weight_policy(), WeightSumPolicy::Tolerance(0.01));
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields take their defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.display.decimals, 2);
    assert_eq!(config.display.format, "");
    assert_eq!(config.report_format(), ReportFormat::Text);
    assert_eq!(
        config.weight_policy(),
        WeightSumPolicy::from_tolerance(1e-9)
    );
}

#[test]
fn test_zero_tolerance_is_exact() {
    let toml_str = r"
[logging]

[grading]
weight_tolerance = 0
";

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");
    assert_eq!(config.weight_policy(), WeightSumPolicy::Exact);
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$GPA_CALC/test.log"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("gpacalc"));
    assert!(!config.logging.file.contains("$GPA_CALC"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config.set("decimals", "4").expect("Failed to set decimals");
    assert_eq!(config.get("decimals").unwrap(), "4");

    config.set("format", "md").expect("Failed to set format");
    assert_eq!(config.get("format").unwrap(), "markdown");

    config
        .set("weight-tolerance", "0")
        .expect("Failed to set tolerance");
    assert_eq!(config.get("weight_tolerance").unwrap(), "0");
    assert_eq!(config.weight_policy(), WeightSumPolicy::Exact);

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();

    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("decimals", "-1").is_err());
    assert!(config
        .set("decimals", &(MAX_DECIMALS + 1).to_string())
        .is_err());
    assert!(config.set("format", "pdf").is_err());
    assert!(config.set("weight_tolerance", "-0.5").is_err());
    assert!(config.set("weight_tolerance", "NaN").is_err());

    // Nothing changed
    let defaults = Config::from_defaults();
    assert_eq!(config.display.decimals, defaults.display.decimals);
    assert_eq!(config.display.format, defaults.display.format);
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("decimals", "5").expect("Failed to set decimals");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("decimals", &defaults)
        .expect("Failed to unset decimals");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.display.decimals, defaults.display.decimals);
    assert!(config.unset("colour", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("decimals", "3").expect("Failed to set decimals");

    // Save to the temp location rather than the user's config dir
    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded.logging.level, "info");
    assert_eq!(loaded.display.decimals, 3);
    assert_eq!(loaded.weight_policy(), config.weight_policy());
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        decimals: Some(40),
        format: Some("html".to_string()),
        weight_tolerance: Some(0.0),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.display.decimals, MAX_DECIMALS);
    assert_eq!(config.report_format(), ReportFormat::Html);
    assert_eq!(config.weight_policy(), WeightSumPolicy::Exact);
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.display.decimals, defaults.display.decimals);
    assert_eq!(config.display.format, defaults.display.format);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[display]"));
    assert!(display_str.contains("[grading]"));

    assert!(display_str.contains("level"));
    assert!(display_str.contains("decimals"));
    assert!(display_str.contains("weight_tolerance"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = ""
file = ""
verbose = false

[display]
format = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.display.format, defaults.display.format);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[display]
format = "markdown"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    assert!(!config.merge_defaults(&defaults));

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.report_format(), ReportFormat::Markdown);
}

#[test]
fn test_get_gpacalc_dir() {
    let dir = Config::get_gpacalc_dir();

    assert!(dir.to_string_lossy().contains("gpacalc"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
