//! Candle geometry: where a bar lands on the chart.
//!
//! Slots are `(width - 100) / 100` pixels wide; the body takes 80% of its
//! slot and the high-low wick runs through the body's centre.

use serde::{Deserialize, Serialize};

use crate::domain::{Bar, Direction, SERIES_LEN};
use crate::scale::PriceScale;

/// Horizontal room reserved for the price axis.
pub const AXIS_GUTTER_PX: f64 = 100.0;

/// Left inset of the plot; price labels sit in it.
pub const PLOT_OFFSET_PX: f64 = 50.0;

/// Body width as a fraction of the slot width.
pub const BODY_WIDTH_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub index: usize,
    /// Left edge of the body.
    pub body_x: f64,
    pub body_width: f64,
    /// Top edge of the body (pixel Y of `max(open, close)`).
    pub body_y: f64,
    pub body_height: f64,
    /// X of the vertical high-low line.
    pub wick_x: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub direction: Direction,
}

/// Width of one bar slot for a chart `chart_width` pixels wide.
pub fn slot_width(chart_width: f64) -> f64 {
    ((chart_width - AXIS_GUTTER_PX) / SERIES_LEN as f64).max(0.0)
}

/// Lay out bar `index` against `scale` in a chart `chart_width` pixels wide.
pub fn candle_geometry(
    bar: &Bar,
    index: usize,
    scale: &PriceScale,
    chart_width: f64,
) -> CandleGeometry {
    let spacing = slot_width(chart_width);
    let body_width = spacing * BODY_WIDTH_RATIO;
    let body_x = index as f64 * spacing;
    let y_open = scale.value_to_y(bar.open);
    let y_close = scale.value_to_y(bar.close);

    CandleGeometry {
        index,
        body_x,
        body_width,
        body_y: scale.value_to_y(bar.body_top()),
        body_height: (y_open - y_close).abs(),
        wick_x: body_x + body_width / 2.0,
        wick_top: scale.value_to_y(bar.high),
        wick_bottom: scale.value_to_y(bar.low),
        direction: bar.direction(),
    }
}

/// Geometry for each bar in `bars`, indexed from zero.
pub fn layout_candles(bars: &[Bar], scale: &PriceScale, chart_width: f64) -> Vec<CandleGeometry> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| candle_geometry(bar, i, scale, chart_width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn scale() -> PriceScale {
        // domain [0, 100] onto [450, 50]: 4 px per unit
        PriceScale::new(0.0, 100.0, 500.0, 50.0).unwrap()
    }

    fn bar(open: f64, high: f64, low: f64, close: f64) -> Bar {
        Bar {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            open,
            high,
            low,
            close,
        }
    }

    #[test]
    fn up_candle_layout() {
        let g = candle_geometry(&bar(40.0, 60.0, 30.0, 50.0), 10, &scale(), 1100.0);
        // slot = (1100 - 100) / 100 = 10
        assert_eq!(g.body_x, 100.0);
        assert_eq!(g.body_width, 8.0);
        assert_eq!(g.wick_x, 104.0);
        assert!((g.body_y - 250.0).abs() < 1e-9); // y(50)
        assert!((g.body_height - 40.0).abs() < 1e-9);
        assert!((g.wick_top - 210.0).abs() < 1e-9); // y(60)
        assert!((g.wick_bottom - 330.0).abs() < 1e-9); // y(30)
        assert_eq!(g.direction, Direction::Up);
    }

    #[test]
    fn down_candle_body_starts_at_open() {
        let g = candle_geometry(&bar(50.0, 55.0, 35.0, 40.0), 0, &scale(), 1100.0);
        assert!((g.body_y - 250.0).abs() < 1e-9); // y(open = 50)
        assert!((g.body_height - 40.0).abs() < 1e-9);
        assert_eq!(g.direction, Direction::Down);
    }

    #[test]
    fn narrow_chart_collapses_slots() {
        assert_eq!(slot_width(80.0), 0.0);
    }

    #[test]
    fn layout_indexes_in_order() {
        let bars = vec![bar(40.0, 60.0, 30.0, 50.0); 3];
        let layout = layout_candles(&bars, &scale(), 600.0);
        assert_eq!(layout.len(), 3);
        assert_eq!(layout[2].index, 2);
        assert_eq!(layout[2].body_x, 10.0);
    }
}
