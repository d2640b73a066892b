//! Series — the 100-bar round split into a visible prefix and a hidden suffix.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bar::{Bar, BarError};

/// Bars per round.
pub const SERIES_LEN: usize = 100;
/// Bars shown before the player checks their guess.
pub const VISIBLE_LEN: usize = 70;
/// Bars revealed on check.
pub const HIDDEN_LEN: usize = SERIES_LEN - VISIBLE_LEN;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("series must hold exactly {expected} bars, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("bar {index} does not follow the previous bar by exactly one day")]
    DateGap { index: usize },

    #[error("bar {index}: {source}")]
    InvalidBar {
        index: usize,
        #[source]
        source: BarError,
    },
}

/// Ordered, one-bar-per-day sequence of exactly [`SERIES_LEN`] bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bar>", into = "Vec<Bar>")]
pub struct Series {
    bars: Vec<Bar>,
}

impl Series {
    /// Validate length, per-bar invariants and consecutive dates.
    pub fn new(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        if bars.len() != SERIES_LEN {
            return Err(SeriesError::WrongLength {
                expected: SERIES_LEN,
                actual: bars.len(),
            });
        }
        for (index, bar) in bars.iter().enumerate() {
            bar.validate()
                .map_err(|source| SeriesError::InvalidBar { index, source })?;
        }
        for (index, pair) in bars.windows(2).enumerate() {
            if pair[1].date != pair[0].date + Duration::days(1) {
                return Err(SeriesError::DateGap { index: index + 1 });
            }
        }
        Ok(Self { bars })
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// The first [`VISIBLE_LEN`] bars.
    pub fn visible(&self) -> &[Bar] {
        &self.bars[..VISIBLE_LEN]
    }

    /// The last [`HIDDEN_LEN`] bars, revealed on check.
    pub fn hidden(&self) -> &[Bar] {
        &self.bars[VISIBLE_LEN..]
    }

    /// Close of the last visible bar; the price the player's guess is measured from.
    pub fn pivot_close(&self) -> f64 {
        self.bars[VISIBLE_LEN - 1].close
    }

    /// Close of the final hidden bar.
    pub fn final_close(&self) -> f64 {
        self.bars[SERIES_LEN - 1].close
    }
}

impl TryFrom<Vec<Bar>> for Series {
    type Error = SeriesError;

    fn try_from(bars: Vec<Bar>) -> Result<Self, Self::Error> {
        Self::new(bars)
    }
}

impl From<Series> for Vec<Bar> {
    fn from(series: Series) -> Self {
        series.bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn flat_bars(n: usize) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        (0..n)
            .map(|i| Bar {
                date: start + Duration::days(i as i64),
                open: 100.0 + i as f64,
                high: 102.0 + i as f64,
                low: 99.0 + i as f64,
                close: 101.0 + i as f64,
            })
            .collect()
    }

    #[test]
    fn accepts_consecutive_bars() {
        let series = Series::new(flat_bars(SERIES_LEN)).unwrap();
        assert_eq!(series.visible().len(), VISIBLE_LEN);
        assert_eq!(series.hidden().len(), HIDDEN_LEN);
        assert_eq!(series.pivot_close(), 170.0);
        assert_eq!(series.final_close(), 200.0);
    }

    #[test]
    fn rejects_short_series() {
        let err = Series::new(flat_bars(99)).unwrap_err();
        assert_eq!(
            err,
            SeriesError::WrongLength {
                expected: 100,
                actual: 99
            }
        );
    }

    #[test]
    fn rejects_date_gap() {
        let mut bars = flat_bars(SERIES_LEN);
        bars[40].date += Duration::days(1);
        assert!(matches!(
            Series::new(bars),
            Err(SeriesError::DateGap { index: 40 })
        ));
    }

    #[test]
    fn rejects_insane_bar() {
        let mut bars = flat_bars(SERIES_LEN);
        bars[7].high = 0.0;
        assert!(matches!(
            Series::new(bars),
            Err(SeriesError::InvalidBar { index: 7, .. })
        ));
    }

    #[test]
    fn deserialization_revalidates() {
        let json = serde_json::to_string(&flat_bars(3)).unwrap();
        assert!(serde_json::from_str::<Series>(&json).is_err());

        let series = Series::new(flat_bars(SERIES_LEN)).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        let back: Series = serde_json::from_str(&json).unwrap();
        assert_eq!(series, back);
    }
}
