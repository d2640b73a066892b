//! ChartGuessr — guess the next 30 bars of a synthetic chart.
//!
//! Keys:
//! - `c` / Enter: check answer (then toggles pause)
//! - `n`: new game
//! - `q` / Esc: quit

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{error, info};

use chartguessr_tui::{input, logging, settings, ui, AppState};

/// Frame interval; matches the default fade stagger.
const TICK: Duration = Duration::from_millis(20);

#[derive(Parser, Debug)]
#[command(name = "chartguessr", version, about = "Guess where the chart goes next")]
struct Cli {
    /// Master seed; the same seed deals the same rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (default: <config dir>/chartguessr/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = settings::resolve(cli.config.as_deref())?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.log_file.is_some() {
        config.log_file = cli.log_file;
    }
    logging::init(config.log_file.as_deref())?;

    let mut app = AppState::new(config, Instant::now()).context("generating first series")?;

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(err = %format!("{err:#}"), "exited with error");
    }
    info!(rounds = app.round(), "session ended");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        let now = Instant::now();
        let area = terminal.draw(|f| ui::draw(f, app, now))?.area;
        app.note_chart_height(ui::chart_pixel_height(area));

        // The provisional frame is on screen; swap in round 1.
        if app.is_provisional() {
            app.load_initial(Instant::now())
                .context("generating round 1")?;
            continue;
        }

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key, Instant::now());
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}
