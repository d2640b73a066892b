//! Synthetic series generator — a random walk of daily OHLC bars.
//!
//! Each day opens at the previous close, moves by a uniform step and grows
//! wicks of uniform length above and below the body. Randomness comes in
//! through [`PriceDraws`] so tests can script the exact draws.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::domain::{Bar, Series, SeriesError, SERIES_LEN};
use crate::rng::RngHierarchy;

/// Source of the four kinds of random draw the generator needs.
pub trait PriceDraws {
    /// Starting close when the caller does not supply one.
    fn seed_close(&mut self) -> f64;
    /// Signed close-minus-open move for one day.
    fn close_delta(&mut self) -> f64;
    /// Distance from the body top to the high.
    fn high_wick(&mut self) -> f64;
    /// Distance from the body bottom to the low.
    fn low_wick(&mut self) -> f64;
}

/// [`PriceDraws`] backed by any `rand` RNG, using the configured ranges.
#[derive(Debug)]
pub struct RandomDraws<R> {
    rng: R,
    config: GeneratorConfig,
}

impl<R: Rng> RandomDraws<R> {
    pub fn new(rng: R, config: GeneratorConfig) -> Self {
        Self { rng, config }
    }
}

impl<R: Rng> PriceDraws for RandomDraws<R> {
    fn seed_close(&mut self) -> f64 {
        self.rng
            .gen_range(self.config.seed_close_min..self.config.seed_close_max)
    }

    fn close_delta(&mut self) -> f64 {
        self.rng
            .gen_range(-self.config.max_step..self.config.max_step)
    }

    fn high_wick(&mut self) -> f64 {
        self.rng.gen_range(0.0..self.config.max_wick)
    }

    fn low_wick(&mut self) -> f64 {
        self.rng.gen_range(0.0..self.config.max_wick)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeriesGenerator {
    config: GeneratorConfig,
}

impl SeriesGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Date of bar 0 for a round started today.
    pub fn default_start_date(&self) -> NaiveDate {
        Local::now().date_naive() - Duration::days(self.config.start_offset_days)
    }

    /// Build a [`SERIES_LEN`]-bar random walk.
    ///
    /// `seed_close` is the "previous close" bar 0 opens at; when `None` it is
    /// drawn from `draws`. Errors only if the draws produce a bar that breaks
    /// the OHLC invariant (e.g. a negative wick from a scripted source).
    pub fn generate<D: PriceDraws>(
        &self,
        draws: &mut D,
        seed_close: Option<f64>,
        start: NaiveDate,
    ) -> Result<Series, SeriesError> {
        let mut prev_close = seed_close.unwrap_or_else(|| draws.seed_close());
        let mut bars = Vec::with_capacity(SERIES_LEN);

        for day in 0..SERIES_LEN {
            let open = prev_close;
            let close = open + draws.close_delta();
            let high = open.max(close) + draws.high_wick();
            let low = open.min(close) - draws.low_wick();

            bars.push(Bar {
                date: start + Duration::days(day as i64),
                open,
                high,
                low,
                close,
            });

            prev_close = close;
        }

        let series = Series::new(bars)?;
        debug!(
            start = %start,
            first_open = series.bars()[0].open,
            pivot_close = series.pivot_close(),
            final_close = series.final_close(),
            "generated series"
        );
        Ok(series)
    }

    /// Generate the series for a round of a seeded session.
    pub fn generate_round(
        &self,
        hierarchy: &RngHierarchy,
        round: u64,
        start: NaiveDate,
    ) -> Result<Series, SeriesError> {
        let mut draws = RandomDraws::new(hierarchy.rng_for_round(round), self.config);
        self.generate(&mut draws, None, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeriesError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Repeats one fixed set of draws for every bar.
    struct FixedDraws {
        seed: f64,
        delta: f64,
        high: f64,
        low: f64,
    }

    impl PriceDraws for FixedDraws {
        fn seed_close(&mut self) -> f64 {
            self.seed
        }
        fn close_delta(&mut self) -> f64 {
            self.delta
        }
        fn high_wick(&mut self) -> f64 {
            self.high
        }
        fn low_wick(&mut self) -> f64 {
            self.low
        }
    }

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn fixed_draws_produce_expected_first_bar() {
        let mut draws = FixedDraws {
            seed: 0.0,
            delta: 5.0,
            high: 2.0,
            low: 1.0,
        };
        let series = SeriesGenerator::default()
            .generate(&mut draws, Some(100.0), start())
            .unwrap();

        let bar = series.bars()[0];
        assert_eq!(bar.open, 100.0);
        assert_eq!(bar.close, 105.0);
        assert_eq!(bar.high, 107.0);
        assert_eq!(bar.low, 99.0);
        // Walk continues from the previous close.
        assert_eq!(series.bars()[1].open, 105.0);
    }

    #[test]
    fn default_start_is_offset_before_today() {
        let generator = SeriesGenerator::default();
        let before = Local::now().date_naive();
        let start = generator.default_start_date();
        let after = Local::now().date_naive();
        // Midnight may pass between the reads.
        assert!(start == before - Duration::days(30) || start == after - Duration::days(30));

        let custom = SeriesGenerator::new(GeneratorConfig {
            start_offset_days: 0,
            ..GeneratorConfig::default()
        });
        let today = custom.default_start_date();
        assert!(today == before || today == after);
    }

    #[test]
    fn missing_seed_close_is_drawn() {
        let mut draws = FixedDraws {
            seed: 80.0,
            delta: -1.0,
            high: 0.5,
            low: 0.5,
        };
        let series = SeriesGenerator::default()
            .generate(&mut draws, None, start())
            .unwrap();
        assert_eq!(series.bars()[0].open, 80.0);
    }

    #[test]
    fn dates_are_consecutive_from_start() {
        let mut draws = RandomDraws::new(StdRng::seed_from_u64(1), GeneratorConfig::default());
        let series = SeriesGenerator::default()
            .generate(&mut draws, None, start())
            .unwrap();
        assert_eq!(series.bars()[0].date, start());
        assert_eq!(series.bars()[99].date, start() + Duration::days(99));
    }

    #[test]
    fn random_seed_close_within_configured_range() {
        let config = GeneratorConfig::default();
        for seed in 0..50 {
            let mut draws = RandomDraws::new(StdRng::seed_from_u64(seed), config);
            let close = draws.seed_close();
            assert!((50.0..150.0).contains(&close));
        }
    }

    #[test]
    fn negative_wick_is_rejected() {
        let mut draws = FixedDraws {
            seed: 100.0,
            delta: 1.0,
            high: -3.0,
            low: 1.0,
        };
        let err = SeriesGenerator::default()
            .generate(&mut draws, None, start())
            .unwrap_err();
        assert!(matches!(err, SeriesError::InvalidBar { index: 0, .. }));
    }

    #[test]
    fn same_round_same_series() {
        let generator = SeriesGenerator::default();
        let hierarchy = RngHierarchy::new(1234);
        let a = generator.generate_round(&hierarchy, 4, start()).unwrap();
        let b = generator.generate_round(&hierarchy, 4, start()).unwrap();
        let c = generator.generate_round(&hierarchy, 5, start()).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
