//! Configuration module for `GpaCalc`

use crate::core::engine::{WeightSumPolicy, DEFAULT_WEIGHT_TOLERANCE};
use crate::core::report::ReportFormat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Largest number of decimal places accepted for display
pub const MAX_DECIMALS: usize = 6;

const fn default_decimals() -> usize {
    2
}

const fn default_weight_tolerance() -> f64 {
    DEFAULT_WEIGHT_TOLERANCE
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Result display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for GPAs, averages and scores
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Default report format (text, markdown, html)
    #[serde(default)]
    pub format: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            format: String::new(),
        }
    }
}

/// Grading rules configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    /// Allowed distance of a weight sum from 100; `0` demands exact equality
    #[serde(default = "default_weight_tolerance")]
    pub weight_tolerance: f64,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            weight_tolerance: default_weight_tolerance(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Grading settings
    #[serde(default)]
    pub grading: GradingConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override display decimals
    pub decimals: Option<usize>,
    /// Override report format
    pub format: Option<String>,
    /// Override weight-sum tolerance
    pub weight_tolerance: Option<f64>,
}

impl Config {
    /// Get the `$GPA_CALC` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/gpacalc`
    /// - macOS: `~/Library/Application Support/gpacalc`
    /// - Windows: `%APPDATA%\gpacalc`
    #[must_use]
    pub fn get_gpacalc_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gpacalc")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled; numeric fields already get their defaults from serde.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }
        if self.display.format.is_empty() && !defaults.display.format.is_empty() {
            self.display.format.clone_from(&defaults.display.format);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only; the config file is not touched.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(decimals) = overrides.decimals {
            self.display.decimals = decimals.min(MAX_DECIMALS);
        }
        if let Some(format) = &overrides.format {
            self.display.format.clone_from(format);
        }

        if let Some(tolerance) = overrides.weight_tolerance {
            self.grading.weight_tolerance = tolerance;
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_gpacalc_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$GPA_CALC` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$GPA_CALC") {
            let gpacalc_dir = Self::get_gpacalc_dir();
            value.replace("$GPA_CALC", gpacalc_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields take their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// - If the config file exists: load it, merge missing fields from defaults, save if changed
    /// - Otherwise (first run): write the defaults to disk and return them
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the file
    /// cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Weight-sum policy implied by `grading.weight_tolerance`
    #[must_use]
    pub fn weight_policy(&self) -> WeightSumPolicy {
        WeightSumPolicy::from_tolerance(self.grading.weight_tolerance)
    }

    /// Report format from `display.format`, falling back to text
    #[must_use]
    pub fn report_format(&self) -> ReportFormat {
        self.display.format.parse().unwrap_or(ReportFormat::Text)
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `decimals`, `format`,
    /// `weight_tolerance` (also `weight-tolerance`).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "decimals" => Some(self.display.decimals.to_string()),
            "format" => Some(self.display.format.clone()),
            "weight_tolerance" | "weight-tolerance" => {
                Some(self.grading.weight_tolerance.to_string())
            }
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Note: This method updates the in-memory config. Call [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "decimals" => {
                let decimals = value
                    .parse::<usize>()
                    .ok()
                    .filter(|d| *d <= MAX_DECIMALS)
                    .ok_or_else(|| {
                        format!("Invalid value for 'decimals': '{value}' (expected 0-{MAX_DECIMALS})")
                    })?;
                self.display.decimals = decimals;
            }
            "format" => {
                let format = value.parse::<ReportFormat>()?;
                self.display.format = format.to_string();
            }
            "weight_tolerance" | "weight-tolerance" => {
                let tolerance = value
                    .parse::<f64>()
                    .ok()
                    .filter(|t| t.is_finite() && *t >= 0.0)
                    .ok_or_else(|| format!("Invalid value for 'weight_tolerance': '{value}'"))?;
                self.grading.weight_tolerance = tolerance;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "decimals" => self.display.decimals = defaults.display.decimals,
            "format" => self.display.format.clone_from(&defaults.display.format),
            "weight_tolerance" | "weight-tolerance" => {
                self.grading.weight_tolerance = defaults.grading.weight_tolerance;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file so the next [`load()`](Config::load)
    /// recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[display]")?;
        writeln!(f, "  decimals = {}", self.display.decimals)?;
        writeln!(f, "  format = \"{}\"", self.display.format)?;

        writeln!(f, "\n[grading]")?;
        writeln!(f, "  weight_tolerance = {}", self.grading.weight_tolerance)?;

        Ok(())
    }
}
