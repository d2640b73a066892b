//! Color tokens for the ChartGuessr TUI
//!
//! Dark chart surface, green/red candles, dim gridlines. Terminals have no
//! alpha channel, so fading is done by blending a color toward the
//! background (see [`Theme::fade`]).

use ratatui::style::{Color, Modifier, Style};

use chartguessr_core::Direction;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Chart surface
    pub background: Color,
    /// Up candles (close > open)
    pub up: Color,
    /// Down candles
    pub down: Color,
    /// Horizontal gridlines
    pub grid: Color,
    /// Borders, focused controls
    pub accent: Color,
    /// Secondary text, axis labels
    pub muted: Color,
    /// Warnings and the paused badge
    pub warning: Color,
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            up: Color::Rgb(0, 200, 83),
            down: Color::Rgb(229, 57, 53),
            grid: Color::Rgb(60, 60, 66),
            accent: Color::Rgb(0, 255, 255),
            muted: Color::Rgb(100, 149, 237),
            warning: Color::Rgb(255, 140, 0),
            text_primary: Color::White,
        }
    }

    pub fn candle_color(&self, direction: Direction) -> Color {
        match direction {
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    /// Blend `color` toward the background; `opacity` 1 is the color itself.
    pub fn fade(&self, color: Color, opacity: f64) -> Color {
        if opacity >= 1.0 {
            return color;
        }
        if opacity <= 0.0 {
            return self.background;
        }
        match (color, self.background) {
            (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
                blend(br, r, opacity),
                blend(bg, g, opacity),
                blend(bb, b, opacity),
            ),
            // Indexed colors cannot blend; snap at half opacity.
            _ if opacity >= 0.5 => color,
            _ => self.background,
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.accent)
            .add_modifier(Modifier::BOLD)
    }
}

fn blend(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.up, Color::Rgb(0, 200, 83));
    }

    #[test]
    fn test_candle_color() {
        let theme = Theme::default();
        assert_eq!(theme.candle_color(Direction::Up), theme.up);
        assert_eq!(theme.candle_color(Direction::Down), theme.down);
    }

    #[test]
    fn test_fade_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.fade(theme.up, 1.0), theme.up);
        assert_eq!(theme.fade(theme.up, 0.0), theme.background);
    }

    #[test]
    fn test_fade_midpoint() {
        let theme = Theme::default();
        // (18 + 0) / 2, (18 + 200) / 2, (20 + 83) / 2 rounded
        assert_eq!(theme.fade(theme.up, 0.5), Color::Rgb(9, 109, 52));
    }

    #[test]
    fn test_fade_indexed_color_snaps() {
        let theme = Theme::default();
        assert_eq!(theme.fade(Color::Green, 0.7), Color::Green);
        assert_eq!(theme.fade(Color::Green, 0.3), theme.background);
    }
}
