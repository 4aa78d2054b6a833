//! Integration test: Configuration utilities
//!
//! Tests the bin_common configuration loading functionality.

use std::env;
use tickplot_viewer::bin_common::{load_config_from_env, ConfigType};

#[test]
fn test_viewer_config_default() {
    // Clear env var to test default
    env::remove_var("TICKPLOT_CONFIG_PATH");

    let config_path = load_config_from_env(ConfigType::Viewer);
    assert_eq!(config_path.to_str().unwrap(), "config/tickplot.yaml");
}

#[test]
fn test_custom_config() {
    let custom = ConfigType::Custom("custom/path.yaml".to_string());
    let config_path = load_config_from_env(custom);

    assert_eq!(config_path.to_str().unwrap(), "custom/path.yaml");
}

#[test]
fn test_config_type_default_paths() {
    assert_eq!(ConfigType::Viewer.default_path(), "config/tickplot.yaml");

    let custom = ConfigType::Custom("test.yaml".to_string());
    assert_eq!(custom.default_path(), "test.yaml");
}
