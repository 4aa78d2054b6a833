//! Series construction
//!
//! Turns parsed print/quote records into the coordinate series the chart
//! renders: one pass to merge and sort events, one pass to sample quotes at
//! trade times, color each print, and place it on the chosen x axis.

pub mod builder;
pub mod color;
pub mod events;
pub mod marker;

pub use builder::{build_series, PlotSeries, SeriesSet};
pub use color::PrintColor;
pub use events::{merge_events, MarketEvent, QuoteEvent, TradeEvent};
pub use marker::size_to_area;

/// Inclusive seconds-since-midnight window; events outside are ignored
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionWindow {
    pub start: f64,
    pub end: f64,
}

impl SessionWindow {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// True when a timestamp falls inside the session
    pub fn contains(&self, seconds: f64) -> bool {
        seconds >= self.start && seconds <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_is_inclusive() {
        let window = SessionWindow::new(34200.0, 39600.0);
        assert!(window.contains(34200.0));
        assert!(window.contains(39600.0));
        assert!(window.contains(36000.0));
        assert!(!window.contains(34199.999));
        assert!(!window.contains(39600.001));
    }
}
