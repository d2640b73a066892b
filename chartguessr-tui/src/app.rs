//! Application state — single-owner, main-thread only.
//!
//! Owns the current [`Game`] and the animation clock. Every key press turns
//! into one pure transition on the game; the renderer reads the result on
//! the next frame.

use std::time::Instant;

use tracing::{info, warn};

use chartguessr_core::scale::{is_usable_height, min_pixel_height};
use chartguessr_core::{
    Game, GameConfig, RngHierarchy, Schedule, Series, SeriesError, SeriesGenerator,
};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct AppState {
    pub game: Game,
    pub config: GameConfig,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,

    generator: SeriesGenerator,
    rng: RngHierarchy,
    /// Round 0 is the provisional placeholder; real rounds count from 1.
    round: u64,
    /// Start of the running fade-in (intro or reveal).
    animation_started: Instant,
    /// Last too-short chart height reported; `None` while the chart fits.
    clamped_height: Option<f64>,
}

impl AppState {
    /// Build the pre-load state: a placeholder series on the symmetric scale.
    pub fn new(config: GameConfig, now: Instant) -> Result<Self, SeriesError> {
        let rng = match config.seed {
            Some(seed) => RngHierarchy::new(seed),
            None => RngHierarchy::from_entropy(),
        };
        let generator = SeriesGenerator::new(config.generator);
        let placeholder = Self::generate(&generator, &rng, 0)?;
        info!(master_seed = rng.master_seed(), "session started");

        Ok(Self {
            game: Game::provisional(placeholder),
            config,
            running: true,
            status_message: None,
            generator,
            rng,
            round: 0,
            animation_started: now,
            clamped_height: None,
        })
    }

    fn generate(
        generator: &SeriesGenerator,
        rng: &RngHierarchy,
        round: u64,
    ) -> Result<Series, SeriesError> {
        generator.generate_round(rng, round, generator.default_start_date())
    }

    /// True until the one-time initial load has run.
    pub fn is_provisional(&self) -> bool {
        self.round == 0
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn master_seed(&self) -> u64 {
        self.rng.master_seed()
    }

    /// Replace the placeholder with round 1. No-op once loaded.
    pub fn load_initial(&mut self, now: Instant) -> Result<(), SeriesError> {
        if !self.is_provisional() {
            return Ok(());
        }
        let series = Self::generate(&self.generator, &self.rng, 1)?;
        self.round = 1;
        self.game = self.game.clone().load(series);
        self.animation_started = now;
        Ok(())
    }

    /// "Check Answer": reveal on the first press, toggle pause afterwards.
    pub fn check(&mut self, now: Instant) {
        let first_check = !self.game.is_checked();
        self.game = self.game.clone().check();
        if first_check {
            self.animation_started = now;
            self.set_status("Revealing the next 30 bars");
        } else if self.game.is_paused() {
            self.set_warning("Paused");
        } else {
            self.set_status("Resumed");
        }
    }

    /// "New Game": fresh series, reset flags, restart the intro fade.
    pub fn new_game(&mut self, now: Instant) -> Result<(), SeriesError> {
        let round = self.round + 1;
        let series = Self::generate(&self.generator, &self.rng, round)?;
        self.round = round;
        self.game = self.game.clone().new_game(series);
        self.animation_started = now;
        self.set_status(format!("Round {round}: up or down?"));
        Ok(())
    }

    /// Milliseconds since the current fade-in started.
    pub fn elapsed_ms(&self, now: Instant) -> u64 {
        let elapsed = now.saturating_duration_since(self.animation_started);
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    pub fn schedule(&self) -> Schedule {
        self.game.schedule(&self.config.animation)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.schedule().is_complete(self.elapsed_ms(now))
    }

    /// Record the chart's pixel height after a frame. Warns once each time a
    /// too-short height changes; returns whether it warned.
    pub fn note_chart_height(&mut self, pixel_height: f64) -> bool {
        let margin = self.config.scale.margin_px;
        if is_usable_height(pixel_height, margin) {
            self.clamped_height = None;
            return false;
        }
        if self.clamped_height == Some(pixel_height) {
            return false;
        }
        warn!(
            pixel_height,
            min = min_pixel_height(margin),
            "terminal too short for the chart, clamping"
        );
        self.clamped_height = Some(pixel_height);
        true
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}
