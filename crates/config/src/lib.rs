#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for banker
//!
//! This crate handles loading the arbitration configuration from:
//! - Default values (the built-in reference system)
//! - Configuration file (~/.config/banker/config.toml or `--config`)
//! - Environment variables
//!
//! Resource quantities are validated explicitly while walking the parsed
//! TOML document, so a fractional entry is reported as a distinct
//! non-integer error naming the offending field rather than a generic
//! parse failure, and shape mismatches are caught before any core object
//! is built.

use banker_errors::{ConfigError, Error};
use banker_types::{OutputFormat, ResourceMatrix, ResourceVector, SystemConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub general: GeneralConfig,
    pub system: SystemConfig,
}

/// General configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: OutputFormat::Plain,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            system: default_system(),
        }
    }
}

/// Built-in arbitration scenario used when no configuration file exists:
/// five processes sharing three resource types.
#[must_use]
pub fn default_system() -> SystemConfig {
    SystemConfig {
        num_proc: 5,
        num_res: 3,
        total: vec![10, 5, 7],
        allocation: vec![
            vec![0, 1, 0],
            vec![2, 0, 0],
            vec![3, 0, 2],
            vec![2, 1, 1],
            vec![0, 0, 2],
        ],
        maximum: vec![
            vec![7, 5, 3],
            vec![3, 2, 2],
            vec![9, 0, 2],
            vec![2, 2, 2],
            vec![4, 3, 3],
        ],
    }
}

impl Config {
    /// Get the default config file path
    ///
    /// # Errors
    ///
    /// Returns an error if the system config directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, Error> {
        let config_dir = dirs::config_dir().ok_or_else(|| ConfigError::NotFound {
            path: "config directory".to_string(),
        })?;
        Ok(config_dir.join("banker").join("config.toml"))
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML,
    /// holds non-integer resource quantities, or declares dimensions the
    /// matrices do not match.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|_| ConfigError::NotFound {
                path: path.display().to_string(),
            })?;
        debug!(path = %path.display(), "loading configuration");
        Self::parse(&contents)
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or fails validation.
    pub async fn load() -> Result<Self, Error> {
        let config_path = Self::default_path()?;

        if config_path.exists() {
            Self::load_from_file(&config_path).await
        } else {
            debug!("no configuration file, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// If a path is provided the file must exist; with no path, a missing
    /// default file falls back to the built-in configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed.
    pub async fn load_or_default(path: Option<&Path>) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load().await,
        }
    }

    /// Parse and validate a TOML configuration document
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first offending field.
    pub fn parse(contents: &str) -> Result<Self, Error> {
        // The [general] section deserializes directly; [system] is walked
        // explicitly below so that a non-integer quantity gets its own
        // error variant and field path.
        let sections: Sections =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;

        let document: toml::Table =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError {
                message: e.to_string(),
            })?;

        let system = match document.get("system") {
            Some(value) => parse_system(value)?,
            None => default_system(),
        };
        validate_system(&system)?;

        Ok(Self {
            general: sections.general,
            system,
        })
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // BANKER_OUTPUT
        if let Ok(output) = std::env::var("BANKER_OUTPUT") {
            self.general.default_output = match output.as_str() {
                "plain" => OutputFormat::Plain,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        field: "BANKER_OUTPUT".to_string(),
                        value: output,
                    }
                    .into())
                }
            };
        }

        Ok(())
    }
}

/// Check that the system's matrices agree with its declared dimensions.
///
/// The core ledger re-checks the same conditions at construction; doing it
/// here as well lets a configuration file fail with a field path instead
/// of a ledger error.
///
/// # Errors
///
/// Returns [`ConfigError::Shape`] naming the first mismatched field.
pub fn validate_system(system: &SystemConfig) -> Result<(), ConfigError> {
    if system.total.len() != system.num_res {
        return Err(ConfigError::Shape {
            field: "system.total".to_string(),
            expected: system.num_res,
            actual: system.total.len(),
        });
    }
    for (name, matrix) in [
        ("allocation", &system.allocation),
        ("maximum", &system.maximum),
    ] {
        if matrix.len() != system.num_proc {
            return Err(ConfigError::Shape {
                field: format!("system.{name}"),
                expected: system.num_proc,
                actual: matrix.len(),
            });
        }
        for (row, entries) in matrix.iter().enumerate() {
            if entries.len() != system.num_res {
                return Err(ConfigError::Shape {
                    field: format!("system.{name}[{row}]"),
                    expected: system.num_res,
                    actual: entries.len(),
                });
            }
        }
    }
    Ok(())
}

/// Serde-deserialized sections; the `[system]` table is handled separately.
#[derive(Debug, Default, Deserialize)]
struct Sections {
    #[serde(default)]
    general: GeneralConfig,
}

fn parse_system(value: &toml::Value) -> Result<SystemConfig, ConfigError> {
    let table = value.as_table().ok_or_else(|| ConfigError::ParseError {
        message: "[system] must be a table".to_string(),
    })?;

    let num_proc = count_field(table, "processes")?;
    let num_res = count_field(table, "resources")?;
    let total = integer_vector(table, "total")?;
    let allocation = integer_matrix(table, "allocation")?;
    let maximum = integer_matrix(table, "maximum")?;

    Ok(SystemConfig {
        num_proc,
        num_res,
        total,
        allocation,
        maximum,
    })
}

fn count_field(table: &toml::Table, name: &str) -> Result<usize, ConfigError> {
    let field = format!("system.{name}");
    let value = table.get(name).ok_or_else(|| ConfigError::MissingField {
        field: field.clone(),
    })?;
    let raw = require_integer(value, &field)?;
    usize::try_from(raw).map_err(|_| ConfigError::InvalidValue {
        field,
        value: raw.to_string(),
    })
}

fn require_integer(value: &toml::Value, field: &str) -> Result<i64, ConfigError> {
    match value {
        toml::Value::Integer(n) => Ok(*n),
        other => Err(ConfigError::NonInteger {
            field: field.to_string(),
            value: other.to_string(),
        }),
    }
}

fn integer_vector(table: &toml::Table, name: &str) -> Result<ResourceVector, ConfigError> {
    let field = format!("system.{name}");
    let value = table.get(name).ok_or_else(|| ConfigError::MissingField {
        field: field.clone(),
    })?;
    let items = value.as_array().ok_or_else(|| ConfigError::InvalidValue {
        field: field.clone(),
        value: value.to_string(),
    })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| require_integer(item, &format!("{field}[{index}]")))
        .collect()
}

fn integer_matrix(table: &toml::Table, name: &str) -> Result<ResourceMatrix, ConfigError> {
    let field = format!("system.{name}");
    let value = table.get(name).ok_or_else(|| ConfigError::MissingField {
        field: field.clone(),
    })?;
    let rows = value.as_array().ok_or_else(|| ConfigError::InvalidValue {
        field: field.clone(),
        value: value.to_string(),
    })?;
    rows.iter()
        .enumerate()
        .map(|(row, item)| {
            let row_field = format!("{field}[{row}]");
            let entries = item.as_array().ok_or_else(|| ConfigError::InvalidValue {
                field: row_field.clone(),
                value: item.to_string(),
            })?;
            entries
                .iter()
                .enumerate()
                .map(|(col, entry)| require_integer(entry, &format!("{row_field}[{col}]")))
                .collect()
        })
        .collect()
}

// Default value functions for serde

fn default_output_format() -> OutputFormat {
    OutputFormat::Plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_complete_document() {
        let config = Config::parse(
            r#"
            [general]
            default_output = "json"

            [system]
            processes = 2
            resources = 2
            total = [4, 3]
            allocation = [[1, 0], [0, 1]]
            maximum = [[2, 2], [1, 2]]
            "#,
        )
        .unwrap();
        assert_eq!(config.general.default_output, OutputFormat::Json);
        assert_eq!(config.system.num_proc, 2);
        assert_eq!(config.system.total, vec![4, 3]);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.system, default_system());
    }

    #[test]
    fn fractional_quantity_names_the_field() {
        let err = Config::parse(
            r#"
            [system]
            processes = 1
            resources = 2
            total = [4, 2.5]
            allocation = [[0, 0]]
            maximum = [[1, 1]]
            "#,
        )
        .unwrap_err();
        let Error::Config(ConfigError::NonInteger { field, .. }) = err else {
            panic!("expected NonInteger, got {err}");
        };
        assert_eq!(field, "system.total[1]");
    }

    #[test]
    fn string_quantity_is_rejected() {
        let err = Config::parse(
            r#"
            [system]
            processes = 1
            resources = 1
            total = [1]
            allocation = [["a"]]
            maximum = [[1]]
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::NonInteger { .. })
        ));
    }

    #[test]
    fn shape_mismatch_names_the_row() {
        let err = Config::parse(
            r#"
            [system]
            processes = 2
            resources = 3
            total = [4, 3, 2]
            allocation = [[1, 0, 0], [0, 1]]
            maximum = [[2, 2, 1], [1, 2, 1]]
            "#,
        )
        .unwrap_err();
        let Error::Config(ConfigError::Shape {
            field,
            expected,
            actual,
        }) = err
        else {
            panic!("expected Shape, got {err}");
        };
        assert_eq!(field, "system.allocation[1]");
        assert_eq!(expected, 3);
        assert_eq!(actual, 2);
    }

    #[test]
    fn missing_field_is_reported() {
        let err = Config::parse(
            r#"
            [system]
            processes = 1
            resources = 1
            total = [1]
            maximum = [[1]]
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::MissingField { field }) if field == "system.allocation"
        ));
    }

    #[test]
    fn negative_count_is_invalid() {
        let err = Config::parse(
            r#"
            [system]
            processes = -1
            resources = 1
            total = [1]
            allocation = []
            maximum = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn default_system_is_well_formed() {
        validate_system(&default_system()).unwrap();
    }
}
