//! Price/time chart widget
//!
//! Renders the series set as layered scatter datasets. Marker-area tiers
//! map to heavier glyphs, the terminal stand-in for scatter point size.
//! Draw order matches the original plot: lines underneath, trade and quote
//! scatters, then red/green print overlays on top.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use sprywarecsv::format_seconds;

use crate::series::PlotSeries;
use crate::visualizer::App;

/// Draw the chart for the current viewport
pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let mut datasets = Vec::new();

    // Connecting lines sit under every scatter
    if app.connect_trades && app.series.trades.len() > 1 {
        datasets.push(line_dataset(&app.series.trades, Color::Blue));
    }
    if app.connect_quotes {
        if app.series.bids.len() > 1 {
            datasets.push(line_dataset(&app.series.bids, Color::Cyan));
        }
        if app.series.offers.len() > 1 {
            datasets.push(line_dataset(&app.series.offers, Color::Magenta));
        }
    }

    scatter_datasets(&mut datasets, &app.series.trades, Color::Blue, Some("Trades"));
    scatter_datasets(&mut datasets, &app.series.bids, Color::Cyan, Some("Bids"));
    scatter_datasets(&mut datasets, &app.series.offers, Color::Magenta, Some("Offers"));
    scatter_datasets(&mut datasets, &app.series.red_prints, Color::Red, None);
    scatter_datasets(&mut datasets, &app.series.green_prints, Color::Green, None);

    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([app.viewport.x.0, app.viewport.x.1])
                .labels(x_labels(app)),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([app.viewport.y.0, app.viewport.y.1])
                .labels(y_labels(app)),
        );

    frame.render_widget(chart, area);
}

fn line_dataset(series: &PlotSeries, color: Color) -> Dataset<'_> {
    Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(&series.line)
}

/// Push one scatter dataset per non-empty marker tier.
///
/// Only the medium tier carries the legend name so each series appears
/// once in the legend.
fn scatter_datasets<'a>(
    datasets: &mut Vec<Dataset<'a>>,
    series: &'a PlotSeries,
    color: Color,
    name: Option<&'a str>,
) {
    let tiers = [
        (&series.fine, Marker::Braille, None),
        (&series.medium, Marker::Dot, name),
        (&series.large, Marker::Block, None),
    ];

    for (points, marker, tier_name) in tiers {
        if points.is_empty() {
            continue;
        }
        let mut dataset = Dataset::default()
            .marker(marker)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(color))
            .data(points);
        if let Some(n) = tier_name {
            dataset = dataset.name(n);
        }
        datasets.push(dataset);
    }
}

fn x_labels(app: &App) -> Vec<Span<'static>> {
    let (lo, hi) = app.viewport.x;
    let mid = (lo + hi) * 0.5;

    if app.uniform_time {
        [lo, mid, hi]
            .iter()
            .map(|v| Span::raw(format!("{:.0}", v.max(0.0))))
            .collect()
    } else {
        [lo, mid, hi]
            .iter()
            .map(|v| Span::raw(format_seconds(*v)))
            .collect()
    }
}

fn y_labels(app: &App) -> Vec<Span<'static>> {
    let (lo, hi) = app.viewport.y;
    let mid = (lo + hi) * 0.5;

    [lo, mid, hi]
        .iter()
        .map(|v| Span::raw(format!("{:.2}", v)))
        .collect()
}
