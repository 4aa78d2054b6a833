//! Tick Plot - Terminal UI for SpryWare print/quote data
//!
//! Loads both vendor files, colorizes the prints against the standing
//! quote, and renders an interactive chart with pan/zoom controls.
//!
//! Controls: q quits; u toggles uniform time intervals; l/o toggle
//! print/quote connecting lines; t/T and p/P zoom the time and price
//! axes; arrow keys pan; r resets the view; the mouse wheel zooms both
//! axes.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::time::Duration;

use tickplot::visualizer::viewport::{SCROLL_SCALE, ZOOM_IN_FRACTION, ZOOM_OUT_FRACTION};
use tickplot::visualizer::{ui, App};
use tickplot::PlotConfig;
use tickplot_viewer::bin_common::{load_config_from_env, parse_args, ConfigType};

/// Fraction of the visible range moved per pan key press
const PAN_FRACTION: f64 = 0.1;

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Note: Logging is disabled for TUI - it would corrupt the alternate screen display

    // Config path: first CLI argument, then env var, then default
    let config_path = match parse_args().into_iter().next() {
        Some(path) => ConfigType::Custom(path).default_path().into(),
        None => load_config_from_env(ConfigType::Viewer),
    };

    let config = PlotConfig::load(&config_path)?;

    // Load files and build series before touching the terminal, so load
    // errors print normally
    let mut app = App::load(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input with a 50ms timeout
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events (not release)
                    if key.kind == KeyEventKind::Press {
                        handle_key(app, key.code);
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollUp => app.viewport.zoom_scroll(1.0 / SCROLL_SCALE),
                    MouseEventKind::ScrollDown => app.viewport.zoom_scroll(SCROLL_SCALE),
                    _ => {}
                },
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => {
            app.should_quit = true;
        }
        KeyCode::Char('u') => {
            app.toggle_uniform_time();
        }
        KeyCode::Char('l') => {
            app.toggle_trade_lines();
        }
        KeyCode::Char('o') => {
            app.toggle_quote_lines();
        }
        KeyCode::Char('t') => {
            app.viewport.zoom_x(ZOOM_IN_FRACTION);
        }
        KeyCode::Char('T') => {
            app.viewport.zoom_x(ZOOM_OUT_FRACTION);
        }
        KeyCode::Char('p') => {
            app.viewport.zoom_y(ZOOM_IN_FRACTION);
        }
        KeyCode::Char('P') => {
            app.viewport.zoom_y(ZOOM_OUT_FRACTION);
        }
        KeyCode::Left => {
            app.viewport.pan_x(-PAN_FRACTION);
        }
        KeyCode::Right => {
            app.viewport.pan_x(PAN_FRACTION);
        }
        KeyCode::Up => {
            app.viewport.pan_y(PAN_FRACTION);
        }
        KeyCode::Down => {
            app.viewport.pan_y(-PAN_FRACTION);
        }
        KeyCode::Char('r') => {
            app.viewport.reset();
            app.status_message = Some("View reset".to_string());
        }
        _ => {}
    }
}
