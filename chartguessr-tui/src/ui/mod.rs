//! Top-level UI layout: chart, key hints, status bar.

pub mod candle_chart;
pub mod controls;
pub mod status_bar;

use std::rc::Rc;
use std::time::Instant;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme::Theme;

use candle_chart::{CandleChartPanel, CELL_HEIGHT_PX};

/// Chart, key hints, status bar.
fn layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
}

/// Virtual pixel height of the plot inside the chart border for a frame of
/// size `area`.
pub fn chart_pixel_height(area: Rect) -> f64 {
    let chart = Block::default().borders(Borders::ALL).inner(layout(area)[0]);
    f64::from(chart.height) * CELL_HEIGHT_PX
}

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState, now: Instant) {
    let theme = Theme::default();
    let chunks = layout(f.area());

    let schedule = app.schedule();
    f.render_widget(
        CandleChartPanel::new(
            &app.game,
            &schedule,
            &app.config.scale,
            app.elapsed_ms(now),
            app.round(),
            &theme,
        ),
        chunks[0],
    );
    controls::render(f, chunks[1], &app.game, &theme);
    status_bar::render(f, chunks[2], app, &theme, now);
}
