//! One day of synthetic price action.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OHLC bar for a single day.
///
/// Generated bars always satisfy `high >= max(open, close)` and
/// `low <= min(open, close)`; [`Bar::validate`] checks it for bars that come
/// from anywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

/// Candle color class: up bars draw green, everything else red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BarError {
    #[error("bar {date} has a non-finite price")]
    NonFinite { date: NaiveDate },

    #[error("bar {date}: high {high} is below max(open, close) {body_top}")]
    HighBelowBody {
        date: NaiveDate,
        high: f64,
        body_top: f64,
    },

    #[error("bar {date}: low {low} is above min(open, close) {body_bottom}")]
    LowAboveBody {
        date: NaiveDate,
        low: f64,
        body_bottom: f64,
    },
}

impl Bar {
    /// Returns true if any OHLC field is NaN or infinite.
    pub fn is_void(&self) -> bool {
        !(self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite())
    }

    /// Top of the open-close body.
    pub fn body_top(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Bottom of the open-close body.
    pub fn body_bottom(&self) -> f64 {
        self.open.min(self.close)
    }

    pub fn direction(&self) -> Direction {
        if self.close > self.open {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Check the wick/body invariant.
    pub fn validate(&self) -> Result<(), BarError> {
        if self.is_void() {
            return Err(BarError::NonFinite { date: self.date });
        }
        if self.high < self.body_top() {
            return Err(BarError::HighBelowBody {
                date: self.date,
                high: self.high,
                body_top: self.body_top(),
            });
        }
        if self.low > self.body_bottom() {
            return Err(BarError::LowAboveBody {
                date: self.date,
                low: self.low,
                body_bottom: self.body_bottom(),
            });
        }
        Ok(())
    }

    pub fn is_sane(&self) -> bool {
        self.validate().is_ok()
    }
}
