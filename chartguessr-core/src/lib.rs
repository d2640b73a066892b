//! ChartGuessr Core — synthetic candles, price scale, staged reveal.
//!
//! This crate contains everything the game decides, and nothing it draws:
//! - Domain types (bars, the 100-bar series and its 70/30 split)
//! - Random-walk series generator with a seedable RNG hierarchy
//! - Price scale (fitted and symmetric variants) and candle geometry
//! - Reveal controller state machine and its fade-in schedule
//! - TOML configuration

pub mod config;
pub mod domain;
pub mod game;
pub mod generator;
pub mod geometry;
pub mod rng;
pub mod scale;
pub mod schedule;

pub use config::{AnimationConfig, ConfigError, GameConfig, GeneratorConfig, ScaleConfig};
pub use domain::{
    Bar, BarError, Direction, Series, SeriesError, HIDDEN_LEN, SERIES_LEN, VISIBLE_LEN,
};
pub use game::{Game, Phase};
pub use generator::{PriceDraws, RandomDraws, SeriesGenerator};
pub use geometry::{candle_geometry, layout_candles, CandleGeometry};
pub use rng::RngHierarchy;
pub use scale::{compute_scale, PriceScale, ScaleBasis, ScaleError};
pub use schedule::{AnimationStep, Schedule};
