//! Main application state and logic for the visualizer

use anyhow::Result;
use tracing::info;

use sprywarecsv::{read_quotes, read_trades};

use crate::config::PlotConfig;
use crate::series::{build_series, merge_events, MarketEvent, SeriesSet, SessionWindow};
use crate::visualizer::viewport::Viewport;

/// Main application state
pub struct App {
    /// Trades file path, for the header
    pub trades_file: String,
    /// Quotes file path, for the header
    pub quotes_file: String,
    /// Prints loaded from disk (after condition filtering)
    pub trades_loaded: usize,
    /// Quotes loaded from disk
    pub quotes_loaded: usize,

    /// Evenly spaced x axis instead of wall time
    pub uniform_time: bool,
    /// Connect print points with a line
    pub connect_trades: bool,
    /// Connect bid/offer points with lines
    pub connect_quotes: bool,

    /// Plotted series for the current mode
    pub series: SeriesSet,
    /// Visible chart bounds
    pub viewport: Viewport,

    /// Whether to quit
    pub should_quit: bool,
    /// Status message to show in footer
    pub status_message: Option<String>,

    /// Merged event stream; kept so mode toggles can rebuild the series
    events: Vec<MarketEvent>,
    window: SessionWindow,
}

impl App {
    /// Load both vendor files and build the initial series
    pub fn load(config: &PlotConfig) -> Result<Self> {
        let window = config.session.window()?;

        info!("loading prints from {}", config.trades_file);
        let trades = read_trades(&config.trades_file)?;
        info!("loading quotes from {}", config.quotes_file);
        let quotes = read_quotes(&config.quotes_file)?;

        let events = merge_events(&trades, &quotes);
        let series = build_series(&events, &window, config.uniform_time);
        let viewport = Viewport::fit(&series);

        Ok(Self {
            trades_file: config.trades_file.clone(),
            quotes_file: config.quotes_file.clone(),
            trades_loaded: trades.len(),
            quotes_loaded: quotes.len(),
            uniform_time: config.uniform_time,
            connect_trades: config.connect_trades,
            connect_quotes: config.connect_quotes,
            series,
            viewport,
            should_quit: false,
            status_message: None,
            events,
            window,
        })
    }

    /// Switch between uniform and wall-time x axes.
    ///
    /// Every x coordinate changes, so the series is rebuilt and the
    /// viewport refitted.
    pub fn toggle_uniform_time(&mut self) {
        self.uniform_time = !self.uniform_time;
        self.series = build_series(&self.events, &self.window, self.uniform_time);
        self.viewport = Viewport::fit(&self.series);
        self.status_message = Some(
            if self.uniform_time {
                "Uniform time intervals".to_string()
            } else {
                "Wall-clock time".to_string()
            },
        );
    }

    /// Toggle the print connecting line
    pub fn toggle_trade_lines(&mut self) {
        self.connect_trades = !self.connect_trades;
        self.status_message = Some(format!(
            "Print lines {}",
            if self.connect_trades { "on" } else { "off" }
        ));
    }

    /// Toggle the bid/offer connecting lines
    pub fn toggle_quote_lines(&mut self) {
        self.connect_quotes = !self.connect_quotes;
        self.status_message = Some(format!(
            "Quote lines {}",
            if self.connect_quotes { "on" } else { "off" }
        ));
    }

    /// Number of prints currently plotted
    pub fn plotted_prints(&self) -> usize {
        self.series.trades.len()
    }
}
