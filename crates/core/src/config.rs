//! Configuration loading and validation
//!
//! Values come from built-in defaults overlaid with environment variables:
//!
//! - `TILES_ROWS`: ring size (default 8)
//! - `TILES_VISIBLE_ROWS`: rows shown at once (default 5)
//! - `TILES_COLUMNS`: columns per row (default 4)
//! - `TILES_ROW_HEIGHT`: row height in logical pixels (default 100)
//! - `TILES_STEP`: scroll distance per tick (default 10)
//! - `TILES_TICK_MS`: tick interval in milliseconds (default 50)
//! - `TILES_SEED`: RNG seed (default: derived from the clock by the caller)
//!
//! Unset or empty variables keep the default.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::types::{GameConfig, MIN_COLUMN_COUNT};

pub const ENV_ROWS: &str = "TILES_ROWS";
pub const ENV_VISIBLE_ROWS: &str = "TILES_VISIBLE_ROWS";
pub const ENV_COLUMNS: &str = "TILES_COLUMNS";
pub const ENV_ROW_HEIGHT: &str = "TILES_ROW_HEIGHT";
pub const ENV_STEP: &str = "TILES_STEP";
pub const ENV_TICK_MS: &str = "TILES_TICK_MS";
pub const ENV_SEED: &str = "TILES_SEED";

/// Rejected configuration. Construction fails with one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("column count must be at least 2, got {0}")]
    TooFewColumns(usize),
    #[error("visible row count must be at least 1")]
    NoVisibleRows,
    #[error("row count {row_count} is smaller than visible row count {visible_row_count}")]
    TrackShorterThanView {
        row_count: usize,
        visible_row_count: usize,
    },
    #[error("row height must be positive")]
    ZeroRowHeight,
    #[error("step size must be positive")]
    ZeroStepSize,
    #[error("step size {step_size} exceeds row height {row_height}")]
    StepExceedsRowHeight { step_size: u32, row_height: u32 },
    #[error("tick interval must be positive")]
    ZeroTickInterval,
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Validation and environment loading for [`GameConfig`].
pub trait ConfigExt: Sized {
    /// Check every construction precondition.
    fn validate(&self) -> Result<(), ConfigError>;

    /// Defaults overlaid with `TILES_*` environment variables.
    fn from_env() -> Result<Self, ConfigError>;

    /// Like [`ConfigExt::from_env`] but reading through `lookup`.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>;
}

impl ConfigExt for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.column_count < MIN_COLUMN_COUNT {
            return Err(ConfigError::TooFewColumns(self.column_count));
        }
        if self.visible_row_count == 0 {
            return Err(ConfigError::NoVisibleRows);
        }
        if self.row_count < self.visible_row_count {
            return Err(ConfigError::TrackShorterThanView {
                row_count: self.row_count,
                visible_row_count: self.visible_row_count,
            });
        }
        if self.row_height == 0 {
            return Err(ConfigError::ZeroRowHeight);
        }
        if self.step_size == 0 {
            return Err(ConfigError::ZeroStepSize);
        }
        if self.step_size > self.row_height {
            return Err(ConfigError::StepExceedsRowHeight {
                step_size: self.step_size,
                row_height: self.row_height,
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroTickInterval);
        }
        Ok(())
    }

    fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GameConfig::default();
        Ok(GameConfig {
            row_count: parse_or(&lookup, ENV_ROWS, defaults.row_count)?,
            column_count: parse_or(&lookup, ENV_COLUMNS, defaults.column_count)?,
            visible_row_count: parse_or(&lookup, ENV_VISIBLE_ROWS, defaults.visible_row_count)?,
            row_height: parse_or(&lookup, ENV_ROW_HEIGHT, defaults.row_height)?,
            step_size: parse_or(&lookup, ENV_STEP, defaults.step_size)?,
            tick_interval_ms: parse_or(&lookup, ENV_TICK_MS, defaults.tick_interval_ms)?,
        })
    }
}

/// RNG seed from `TILES_SEED`, if set.
pub fn seed_from_env() -> Result<Option<u32>, ConfigError> {
    seed_from_lookup(|key| env::var(key).ok())
}

pub fn seed_from_lookup<F>(lookup: F) -> Result<Option<u32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(&lookup, ENV_SEED) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: ENV_SEED,
                value: raw,
            }),
        None => Ok(None),
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_single_column() {
        let config = GameConfig {
            column_count: 1,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::TooFewColumns(1)));
    }

    #[test]
    fn test_rejects_track_shorter_than_view() {
        let config = GameConfig {
            row_count: 4,
            visible_row_count: 5,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TrackShorterThanView { .. })
        ));
    }

    #[test]
    fn test_rejects_step_larger_than_row() {
        let config = GameConfig {
            row_height: 10,
            step_size: 11,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::StepExceedsRowHeight {
                step_size: 11,
                row_height: 10
            })
        );
    }

    #[test]
    fn test_rejects_zero_values() {
        let base = GameConfig::default();
        assert_eq!(
            GameConfig { visible_row_count: 0, ..base }.validate(),
            Err(ConfigError::NoVisibleRows)
        );
        assert_eq!(
            GameConfig { row_height: 0, step_size: 0, ..base }.validate(),
            Err(ConfigError::ZeroRowHeight)
        );
        assert_eq!(
            GameConfig { step_size: 0, ..base }.validate(),
            Err(ConfigError::ZeroStepSize)
        );
        assert_eq!(
            GameConfig { tick_interval_ms: 0, ..base }.validate(),
            Err(ConfigError::ZeroTickInterval)
        );
    }

    #[test]
    fn test_step_equal_to_row_height_is_valid() {
        let config = GameConfig {
            row_height: 40,
            step_size: 40,
            ..GameConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lookup_overrides_defaults() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_ROWS, "12"),
            (ENV_COLUMNS, " 5 "),
            (ENV_TICK_MS, ""),
        ]))
        .unwrap();
        assert_eq!(config.row_count, 12);
        assert_eq!(config.column_count, 5);
        assert_eq!(config.tick_interval_ms, 50);
        assert_eq!(config.visible_row_count, 5);
    }

    #[test]
    fn test_lookup_rejects_garbage() {
        let err = GameConfig::from_lookup(lookup(&[(ENV_STEP, "fast")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: ENV_STEP,
                value: "fast".to_string()
            }
        );
        assert_eq!(err.to_string(), "invalid value \"fast\" for TILES_STEP");
    }

    #[test]
    fn test_seed_lookup() {
        assert_eq!(seed_from_lookup(lookup(&[])), Ok(None));
        assert_eq!(seed_from_lookup(lookup(&[(ENV_SEED, "77")])), Ok(Some(77)));
        assert!(seed_from_lookup(lookup(&[(ENV_SEED, "-1")])).is_err());
    }
}
