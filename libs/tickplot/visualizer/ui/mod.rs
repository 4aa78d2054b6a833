//! UI widgets for the visualizer

pub mod chart;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::App;

/// Draw the main UI layout
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Chart
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    chart::draw(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let mode = if app.uniform_time { "uniform" } else { "wall time" };

    let header_text = format!(
        " {} + {} | {} prints, {} quotes | {} plotted | x: {}",
        short_path(&app.trades_file),
        short_path(&app.quotes_file),
        app.trades_loaded,
        app.quotes_loaded,
        app.plotted_prints(),
        mode
    );

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Tick Plot "));

    frame.render_widget(header, area);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let status = app.status_message.as_deref().unwrap_or("");

    let footer_text = if status.is_empty() {
        " q=quit u=uniform l=print-lines o=quote-lines t/T=zoom-time p/P=zoom-price arrows=pan r=reset".to_string()
    } else {
        format!(" {} | q=quit r=reset", status)
    };

    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

/// Last path component, for the header line
fn short_path(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
