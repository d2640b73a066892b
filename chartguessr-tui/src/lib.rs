//! ChartGuessr TUI - guess where the chart goes next
//!
//! Shows 70 bars of a synthetic daily series; "Check Answer" fades in the
//! remaining 30, "New Game" deals a fresh series.

pub mod app;
pub mod input;
pub mod logging;
pub mod settings;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
