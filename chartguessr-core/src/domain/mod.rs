//! Domain types for ChartGuessr

pub mod bar;
pub mod series;

pub use bar::{Bar, BarError, Direction};
pub use series::{Series, SeriesError, HIDDEN_LEN, SERIES_LEN, VISIBLE_LEN};
