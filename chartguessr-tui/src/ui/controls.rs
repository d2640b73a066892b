//! Key hints under the chart. "Check Answer" disappears once used.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use chartguessr_core::Game;

use crate::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, game: &Game, theme: &Theme) {
    f.render_widget(Paragraph::new(controls_line(game, theme)), area);
}

fn controls_line(game: &Game, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    let mut hint = |key: &'static str, action: &'static str| {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {key} "), theme.key_hint()));
        spans.push(Span::styled(format!(" {action}"), theme.label()));
    };

    if !game.is_checked() {
        hint("c", "Check Answer");
    }
    hint("n", "New Game");
    hint("q", "Quit");

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use crate::test_helpers::{buffer_text, loaded_app};

    fn rendered(game: &Game) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|f| render(f, f.area(), game, &Theme::default()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn check_hint_only_before_check() {
        let (mut app, now) = loaded_app(5);
        let before = rendered(&app.game);
        assert!(before.contains("Check Answer"));
        assert!(before.contains("New Game"));

        app.check(now);
        let after = rendered(&app.game);
        assert!(!after.contains("Check Answer"));
        assert!(after.contains("New Game"));
        assert!(after.contains("Quit"));
    }

    #[test]
    fn new_game_restores_check_hint() {
        let (mut app, now) = loaded_app(5);
        app.check(now);
        app.new_game(now).unwrap();
        assert!(rendered(&app.game).contains("Check Answer"));
    }
}
