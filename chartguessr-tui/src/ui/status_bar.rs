//! Bottom status bar: round, phase, date range, last status message.

use std::time::Instant;

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme, now: Instant) {
    f.render_widget(Paragraph::new(status_line(app, theme, now)), area);
}

fn status_line<'a>(app: &'a AppState, theme: &Theme, now: Instant) -> Line<'a> {
    let mut spans: Vec<Span> = Vec::new();

    if app.is_provisional() {
        spans.push(Span::styled(" Loading...", theme.label()));
    } else {
        let bars = app.game.series().bars();
        let first = bars[0].date;
        let last = app.game.visible_bars().last().map_or(first, |b| b.date);
        spans.push(Span::styled(
            format!(" Round {} | {} | {} .. {}", app.round(), app.game.phase().label(), first, last),
            theme.label(),
        ));
    }

    if app.game.is_paused() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            " PAUSED ",
            Style::default()
                .fg(theme.background)
                .bg(theme.warning)
                .add_modifier(Modifier::BOLD),
        ));
    } else if app.is_animating(now) {
        spans.push(Span::styled(" ~", theme.label()));
    }

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => Style::default().fg(theme.accent),
            StatusLevel::Warning => Style::default().fg(theme.warning),
            StatusLevel::Error => Style::default().fg(theme.down),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    Line::from(spans)
}
