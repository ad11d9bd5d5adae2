use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::types::{RunOptions, ScannerConfig};

/// Load scanner configuration from an optional TOML file.
/// Falls back to defaults when no file is given.
pub fn load_config(config_path: Option<&Path>) -> Result<ScannerConfig> {
    let Some(config_path) = config_path else {
        return Ok(ScannerConfig::default());
    };

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let parsed: toml::Value = content
        .parse()
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    config_from_toml_value(&parsed)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))
}

/// Parse a ScannerConfig from a TOML value. Missing keys keep their defaults.
fn config_from_toml_value(value: &toml::Value) -> Result<ScannerConfig> {
    let mut config = ScannerConfig::default();

    if let Some(delay) = value.get("delay") {
        if let Some(v) = delay.get("min-seconds") {
            config.delay.min_seconds = as_seconds(v, "delay.min-seconds")?;
        }
        if let Some(v) = delay.get("max-seconds") {
            config.delay.max_seconds = as_seconds(v, "delay.max-seconds")?;
        }
    }

    Ok(config)
}

/// TOML distinguishes `5` from `5.0`; accept both.
fn as_seconds(value: &toml::Value, key: &str) -> Result<f64> {
    match value {
        toml::Value::Float(f) => Ok(*f),
        toml::Value::Integer(i) => Ok(*i as f64),
        other => anyhow::bail!("`{}` must be a number of seconds, got {}", key, other.type_str()),
    }
}

/// Load the file, apply CLI overrides, and validate the result.
pub fn resolve(options: &RunOptions) -> Result<ScannerConfig> {
    let mut config = load_config(options.config_path.as_deref())?;

    if let Some(min) = options.min_delay {
        config.delay.min_seconds = min;
    }
    if let Some(max) = options.max_delay {
        config.delay.max_seconds = max;
    }

    config.delay.validate()?;
    Ok(config)
}
