//! Declarative fade-in schedule for the staggered intro and reveal.
//!
//! The game decides *what* animates; the renderer owns the clock and asks
//! the schedule for each bar's opacity at the elapsed time.

use serde::{Deserialize, Serialize};

use crate::config::AnimationConfig;
use crate::domain::{SERIES_LEN, VISIBLE_LEN};

/// One bar's fade from transparent to `target_opacity`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationStep {
    pub bar_index: usize,
    pub delay_ms: u64,
    pub duration_ms: u64,
    pub target_opacity: f64,
}

impl AnimationStep {
    pub fn end_ms(&self) -> u64 {
        self.delay_ms.saturating_add(self.duration_ms)
    }

    /// Opacity `elapsed_ms` after the schedule started.
    pub fn opacity_at(&self, elapsed_ms: u64) -> f64 {
        if elapsed_ms <= self.delay_ms {
            0.0
        } else if elapsed_ms >= self.end_ms() {
            self.target_opacity
        } else {
            let t = (elapsed_ms - self.delay_ms) as f64 / self.duration_ms as f64;
            t * self.target_opacity
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// Bars `0..settled` are shown at full opacity without animating.
    settled: usize,
    steps: Vec<AnimationStep>,
}

impl Schedule {
    /// Fade in the visible prefix: bar `i` starts at `i * stagger`.
    pub fn intro(config: &AnimationConfig) -> Self {
        Self::staggered(0, 0..VISIBLE_LEN, config)
    }

    /// Hold the visible prefix and fade in the hidden suffix: bar `i`
    /// starts at `(i - 70) * stagger`.
    pub fn reveal(config: &AnimationConfig) -> Self {
        Self::staggered(VISIBLE_LEN, VISIBLE_LEN..SERIES_LEN, config)
    }

    fn staggered(
        settled: usize,
        indices: std::ops::Range<usize>,
        config: &AnimationConfig,
    ) -> Self {
        let first = indices.start;
        let steps = indices
            .map(|bar_index| AnimationStep {
                bar_index,
                delay_ms: ((bar_index - first) as u64).saturating_mul(config.stagger_ms),
                duration_ms: config.duration_ms,
                target_opacity: 1.0,
            })
            .collect();
        Self { settled, steps }
    }

    pub fn steps(&self) -> &[AnimationStep] {
        &self.steps
    }

    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Number of bars this schedule draws at all.
    pub fn bar_count(&self) -> usize {
        self.settled + self.steps.len()
    }

    pub fn step_for(&self, index: usize) -> Option<&AnimationStep> {
        index
            .checked_sub(self.settled)
            .and_then(|offset| self.steps.get(offset))
    }

    /// Opacity of bar `index` at `elapsed_ms`; 0 for bars not drawn.
    pub fn opacity_at(&self, index: usize, elapsed_ms: u64) -> f64 {
        if index < self.settled {
            return 1.0;
        }
        self.step_for(index)
            .map_or(0.0, |step| step.opacity_at(elapsed_ms))
    }

    /// When the last step finishes.
    pub fn total_duration_ms(&self) -> u64 {
        self.steps.iter().map(AnimationStep::end_ms).max().unwrap_or(0)
    }

    pub fn is_complete(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.total_duration_ms()
    }
}
