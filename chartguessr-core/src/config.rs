//! Game configuration: TOML file with per-section defaults.
//!
//! Every field defaults to the tuning the game ships with, so an empty file
//! (or no file at all) yields [`GameConfig::default`].

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::SERIES_LEN;

/// Furthest back bar 0 may be dated (about a century).
pub const MAX_START_OFFSET_DAYS: i64 = 36_500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Random-walk draw ranges for the series generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Lower bound (inclusive) of the random starting close.
    pub seed_close_min: f64,
    /// Upper bound (exclusive) of the random starting close.
    pub seed_close_max: f64,
    /// Daily close moves by `uniform(-max_step, max_step)`.
    pub max_step: f64,
    /// Wicks extend past the body by `uniform(0, max_wick)`.
    pub max_wick: f64,
    /// Bar 0 is dated this many days before today.
    pub start_offset_days: i64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed_close_min: 50.0,
            seed_close_max: 150.0,
            max_step: 10.0,
            max_wick: 5.0,
            start_offset_days: 30,
        }
    }
}

/// Padding rules for the two price-scale variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleConfig {
    /// Added below the lowest low and above the highest high (fitted scale).
    pub fitted_padding: f64,
    /// Extra room below the symmetric domain (pre-load scale).
    pub symmetric_buffer: f64,
    /// Pixel inset at the top and bottom of the chart.
    pub margin_px: f64,
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            fitted_padding: 10.0,
            symmetric_buffer: 20.0,
            margin_px: 50.0,
        }
    }
}

/// Fade-in timing for the intro and the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub stagger_ms: u64,
    pub duration_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            stagger_ms: 20,
            duration_ms: 20,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Master seed for reproducible sessions. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Where tracing output goes. `None` disables logging.
    pub log_file: Option<PathBuf>,
    pub generator: GeneratorConfig,
    pub scale: ScaleConfig,
    pub animation: AnimationConfig,
}

impl GameConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.generator;
        // Uniform sampling needs the span itself to be finite.
        if !(g.seed_close_max - g.seed_close_min).is_finite()
            || g.seed_close_min >= g.seed_close_max
        {
            return Err(ConfigError::Invalid(format!(
                "generator.seed_close_min ({}) must be below seed_close_max ({})",
                g.seed_close_min, g.seed_close_max
            )));
        }
        if !(2.0 * g.max_step).is_finite() || g.max_step <= 0.0 {
            return Err(ConfigError::Invalid(
                "generator.max_step must be finite and > 0".to_owned(),
            ));
        }
        let wick_cap = g.max_step.max(1.0) * 1e6;
        if !g.max_wick.is_finite() || g.max_wick <= 0.0 || g.max_wick > wick_cap {
            return Err(ConfigError::Invalid(
                "generator.max_wick must be > 0 and within 1e6 x max_step".to_owned(),
            ));
        }
        if !(0..=MAX_START_OFFSET_DAYS).contains(&g.start_offset_days) {
            return Err(ConfigError::Invalid(format!(
                "generator.start_offset_days must be in 0..={MAX_START_OFFSET_DAYS}"
            )));
        }

        let s = &self.scale;
        for (name, value) in [
            ("scale.fitted_padding", s.fitted_padding),
            ("scale.symmetric_buffer", s.symmetric_buffer),
            ("scale.margin_px", s.margin_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        let a = &self.animation;
        if a.stagger_ms == 0 || a.duration_ms == 0 {
            return Err(ConfigError::Invalid(
                "animation.stagger_ms and animation.duration_ms must be > 0".to_owned(),
            ));
        }
        // The last step must end at a representable time.
        let last_end = a
            .stagger_ms
            .checked_mul(SERIES_LEN as u64)
            .and_then(|delay| delay.checked_add(a.duration_ms));
        if last_end.is_none() {
            return Err(ConfigError::Invalid(
                "animation.stagger_ms and animation.duration_ms are too large".to_owned(),
            ));
        }
        Ok(())
    }
}
