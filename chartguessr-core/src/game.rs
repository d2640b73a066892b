//! Reveal controller — the round's state machine.
//!
//! ```text
//!            check                check
//! Playing ----------> CheckedPaused <-----> CheckedResumed
//!    ^                      |                     |
//!    +------ new_game ------+---------------------+
//! ```
//!
//! Transitions consume the game and return the next one. Only `check` and
//! `new_game` (plus the one-time `load`) change state; everything the
//! renderer needs (visible bars, scale, animation schedule) is derived.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{AnimationConfig, ScaleConfig};
use crate::domain::{Bar, Series, SERIES_LEN, VISIBLE_LEN};
use crate::scale::{fitted_scale, symmetric_scale, PriceScale, ScaleBasis, ScaleError};
use crate::schedule::Schedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Guessing: only the visible prefix is drawn.
    Playing,
    /// Answer checked, hidden suffix revealed, paused flag set.
    CheckedPaused,
    /// Answer checked, paused flag cleared.
    CheckedResumed,
}

impl Phase {
    pub fn label(self) -> &'static str {
        match self {
            Phase::Playing => "Playing",
            Phase::CheckedPaused => "Checked (paused)",
            Phase::CheckedResumed => "Checked",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    series: Series,
    phase: Phase,
    /// Set on check: the intro fade is not replayed for bars already shown.
    animation_complete: bool,
    scale_basis: ScaleBasis,
}

impl Game {
    /// Pre-load state: a placeholder series drawn against the symmetric scale.
    pub fn provisional(series: Series) -> Self {
        Self {
            series,
            phase: Phase::Playing,
            animation_complete: false,
            scale_basis: ScaleBasis::Symmetric,
        }
    }

    /// The one-time initial data load: replaces the placeholder series and
    /// switches to the fitted scale.
    pub fn load(self, series: Series) -> Self {
        if self.scale_basis == ScaleBasis::Fitted {
            debug!("load called on an already loaded game");
        }
        info!(pivot_close = series.pivot_close(), "initial series loaded");
        Self::fresh(series)
    }

    /// Start a new round from any state.
    pub fn new_game(self, series: Series) -> Self {
        info!(
            from = self.phase.label(),
            pivot_close = series.pivot_close(),
            "new game"
        );
        Self::fresh(series)
    }

    fn fresh(series: Series) -> Self {
        Self {
            series,
            phase: Phase::Playing,
            animation_complete: false,
            scale_basis: ScaleBasis::Fitted,
        }
    }

    /// Check the answer, or toggle the paused flag once checked.
    pub fn check(self) -> Self {
        let phase = match self.phase {
            Phase::Playing => {
                info!(
                    pivot_close = self.series.pivot_close(),
                    final_close = self.series.final_close(),
                    "answer checked, revealing hidden bars"
                );
                Phase::CheckedPaused
            }
            Phase::CheckedPaused => Phase::CheckedResumed,
            Phase::CheckedResumed => Phase::CheckedPaused,
        };
        debug!(from = self.phase.label(), to = phase.label(), "check");
        Self {
            phase,
            animation_complete: true,
            ..self
        }
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_checked(&self) -> bool {
        self.phase != Phase::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::CheckedPaused
    }

    pub fn animation_complete(&self) -> bool {
        self.animation_complete
    }

    pub fn scale_basis(&self) -> ScaleBasis {
        self.scale_basis
    }

    pub fn visible_count(&self) -> usize {
        if self.is_checked() {
            SERIES_LEN
        } else {
            VISIBLE_LEN
        }
    }

    /// Bars currently drawn, in index order.
    pub fn visible_bars(&self) -> &[Bar] {
        &self.series.bars()[..self.visible_count()]
    }

    /// Fade-in schedule for the current phase.
    pub fn schedule(&self, config: &AnimationConfig) -> Schedule {
        if self.is_checked() {
            Schedule::reveal(config)
        } else {
            Schedule::intro(config)
        }
    }

    /// Scale for the current frame, recomputed from the visible bars.
    ///
    /// Before the initial load the symmetric rule applies over the whole
    /// placeholder series; afterwards the fitted rule over the visible bars.
    pub fn scale(&self, pixel_height: f64, config: &ScaleConfig) -> Result<PriceScale, ScaleError> {
        match self.scale_basis {
            ScaleBasis::Symmetric => symmetric_scale(
                self.series.bars(),
                self.series.pivot_close(),
                pixel_height,
                config,
            ),
            ScaleBasis::Fitted => fitted_scale(self.visible_bars(), pixel_height, config),
        }
    }
}
