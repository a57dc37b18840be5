//! Engine configuration.
//!
//! # Responsibility
//! - Hold the tunable layout constants, relayout delays and fallback text.
//! - Load them from an optional TOML file where every field has a default.
//!
//! # Invariants
//! - A config that passed `validate()` always yields at least one column.
//! - Relayout delays are tunable hints, not correctness guarantees.

use crate::layout::masonry::{
    LayoutParams, DEFAULT_BOTTOM_MARGIN, DEFAULT_COLUMNS, DEFAULT_HEADER_MARGIN,
    DEFAULT_NARROW_BREAKPOINT,
};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default location of the timeline payload.
pub const DEFAULT_DATA_PATH: &str = "resources/data/china-timeline.json";
/// Message shown in place of the timeline when the payload cannot be loaded.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Unable to load timeline data.";
/// Delayed re-layouts after bootstrap, for late font/image size changes.
pub const DEFAULT_RELAYOUT_DELAYS_MS: [u64; 2] = [100, 500];

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration loading and validation errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
    ZeroColumns,
    InvalidValue {
        field: &'static str,
        value: f64,
    },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::ZeroColumns => write!(f, "columns must be at least 1"),
            Self::InvalidValue { field, value } => {
                write!(f, "{field} must be a finite non-negative number, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::ZeroColumns | Self::InvalidValue { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Parse(value)
    }
}

/// Timeline engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimelineConfig {
    pub data_path: PathBuf,
    /// Viewports at or below this width stack items in one column.
    pub narrow_breakpoint: f64,
    pub columns: usize,
    pub header_margin: f64,
    pub bottom_margin: f64,
    pub relayout_delays_ms: Vec<u64>,
    pub fallback_message: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            columns: DEFAULT_COLUMNS,
            header_margin: DEFAULT_HEADER_MARGIN,
            bottom_margin: DEFAULT_BOTTOM_MARGIN,
            relayout_delays_ms: DEFAULT_RELAYOUT_DELAYS_MS.to_vec(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
        }
    }
}

impl TimelineConfig {
    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks layout invariants.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        for (field, value) in [
            ("narrow_breakpoint", self.narrow_breakpoint),
            ("header_margin", self.header_margin),
            ("bottom_margin", self.bottom_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            narrow_breakpoint: self.narrow_breakpoint,
            columns: self.columns,
            header_margin: self.header_margin,
            bottom_margin: self.bottom_margin,
        }
    }

    pub fn relayout_delays(&self) -> Vec<Duration> {
        self.relayout_delays_ms
            .iter()
            .copied()
            .map(Duration::from_millis)
            .collect()
    }
}
