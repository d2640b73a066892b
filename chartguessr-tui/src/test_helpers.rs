//! Test helpers for building app state

use std::time::Instant;

use chartguessr_core::GameConfig;

use crate::app::AppState;

/// App with a fixed master seed, still on its provisional frame.
pub fn seeded_app(seed: u64) -> AppState {
    let config = GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    };
    AppState::new(config, Instant::now()).unwrap()
}

/// Seeded app past the initial load.
pub fn loaded_app(seed: u64) -> (AppState, Instant) {
    let mut app = seeded_app(seed);
    let now = Instant::now();
    app.load_initial(now).unwrap();
    (app, now)
}

/// Flatten a buffer into one string, row by row.
pub fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut content = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            content.push_str(buf.cell((x, y)).unwrap().symbol());
        }
        content.push('\n');
    }
    content
}
