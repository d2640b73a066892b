//! Candle chart widget — the round's bars on a braille canvas.
//!
//! Works in virtual pixels: each terminal cell stands for
//! [`CELL_WIDTH_PX`] x [`CELL_HEIGHT_PX`] pixels, so the core's pixel-space
//! scale and candle geometry apply unchanged. Canvas Y grows upward, pixel Y
//! grows downward; [`flip`] converts.
//!
//! Draw order per frame:
//! - gridlines and price labels at the scale's round ticks
//! - each visible bar whose scheduled opacity is above zero, faded toward
//!   the background while its step is running

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Context, Line},
        Block, Borders, Paragraph, Widget,
    },
};

use chartguessr_core::geometry::PLOT_OFFSET_PX;
use chartguessr_core::scale::DEFAULT_TICK_COUNT;
use chartguessr_core::{
    candle_geometry, CandleGeometry, Game, PriceScale, ScaleBasis, ScaleConfig, Schedule,
};

use crate::theme::Theme;

/// Virtual pixels per terminal column.
pub const CELL_WIDTH_PX: f64 = 8.0;
/// Virtual pixels per terminal row.
pub const CELL_HEIGHT_PX: f64 = 16.0;

/// Horizontal resolution of a braille dot.
const DOT_WIDTH_PX: f64 = CELL_WIDTH_PX / 2.0;

pub struct CandleChartPanel<'a> {
    game: &'a Game,
    schedule: &'a Schedule,
    scale_config: &'a ScaleConfig,
    elapsed_ms: u64,
    round: u64,
    theme: &'a Theme,
}

impl<'a> CandleChartPanel<'a> {
    pub fn new(
        game: &'a Game,
        schedule: &'a Schedule,
        scale_config: &'a ScaleConfig,
        elapsed_ms: u64,
        round: u64,
        theme: &'a Theme,
    ) -> Self {
        Self {
            game,
            schedule,
            scale_config,
            elapsed_ms,
            round,
            theme,
        }
    }

    fn title(&self) -> String {
        let bars = self.game.visible_count();
        match self.game.scale_basis() {
            ScaleBasis::Symmetric => format!(" ChartGuessr | loading | {bars} bars "),
            ScaleBasis::Fitted => format!(" ChartGuessr | Round {} | {bars} bars ", self.round),
        }
    }

    fn draw_grid(&self, ctx: &mut Context<'_>, scale: &PriceScale, width: f64, height: f64) {
        for tick in scale.ticks(DEFAULT_TICK_COUNT) {
            let y = flip(scale.value_to_y(tick), height);
            ctx.draw(&Line::new(PLOT_OFFSET_PX, y, width, y, self.theme.grid));
            ctx.print(
                0.0,
                y,
                Span::styled(format!("{tick:>5}"), Style::default().fg(self.theme.muted)),
            );
        }
    }

    fn draw_candle(&self, ctx: &mut Context<'_>, g: &CandleGeometry, opacity: f64, height: f64) {
        let color = self
            .theme
            .fade(self.theme.candle_color(g.direction), opacity);
        let x0 = PLOT_OFFSET_PX + g.body_x;
        let wick_x = PLOT_OFFSET_PX + g.wick_x;

        ctx.draw(&Line::new(
            wick_x,
            flip(g.wick_bottom, height),
            wick_x,
            flip(g.wick_top, height),
            color,
        ));

        // Fill the body with vertical strokes one braille dot apart.
        let body_top = flip(g.body_y, height);
        let body_bottom = flip(g.body_y + g.body_height, height);
        let strokes = (g.body_width / DOT_WIDTH_PX).ceil().max(1.0) as usize;
        for s in 0..strokes {
            let x = (x0 + s as f64 * DOT_WIDTH_PX).min(x0 + g.body_width);
            ctx.draw(&Line::new(x, body_bottom, x, body_top, color));
        }
    }
}

/// Pixel Y (down) to canvas Y (up).
fn flip(y: f64, height: f64) -> f64 {
    height - y
}

impl<'a> Widget for CandleChartPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title())
            .title_style(self.theme.title())
            .borders(Borders::ALL)
            .border_style(self.theme.border())
            .style(Style::default().bg(self.theme.background));

        let inner = block.inner(area);
        let width = f64::from(inner.width) * CELL_WIDTH_PX;
        let height = f64::from(inner.height) * CELL_HEIGHT_PX;

        let scale = match self.game.scale(height, self.scale_config) {
            Ok(scale) => scale,
            Err(err) => {
                Paragraph::new(format!("cannot scale chart: {err}"))
                    .style(Style::default().fg(self.theme.warning))
                    .block(block)
                    .render(area, buf);
                return;
            }
        };

        let visible = self.game.visible_bars();
        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .background_color(self.theme.background)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                self.draw_grid(ctx, &scale, width, height);
                ctx.layer();
                for (i, bar) in visible.iter().enumerate() {
                    let opacity = self.schedule.opacity_at(i, self.elapsed_ms);
                    if opacity <= 0.0 {
                        continue;
                    }
                    let g = candle_geometry(bar, i, &scale, width);
                    self.draw_candle(ctx, &g, opacity, height);
                }
            });
        canvas.render(area, buf);
    }
}
