//! Coordinate series construction
//!
//! One pass over the merged event stream. Quotes update the standing
//! bid/ask; each print inside the session window emits one point into the
//! trades series plus sampled bid and offer points at the same x, and a
//! red or green overlay point when it matched a quote side.

use rust_decimal::prelude::ToPrimitive;
use tracing::info;

use super::color::PrintColor;
use super::events::{MarketEvent, QuoteEvent};
use super::marker::size_to_area;
use super::SessionWindow;

// Marker-area tiers for terminal rendering. The linear size regime
// (under 100 shares) produces areas 2-10; the log regime starts at 12.
const MEDIUM_AREA: u32 = 7;
const LARGE_AREA: u32 = 12;

/// Points for one plotted series, bucketed by marker area
#[derive(Debug, Clone, Default)]
pub struct PlotSeries {
    /// Every point in input order, for line rendering and counting
    pub line: Vec<(f64, f64)>,
    /// Points with small marker area
    pub fine: Vec<(f64, f64)>,
    /// Points with medium marker area
    pub medium: Vec<(f64, f64)>,
    /// Points with large marker area
    pub large: Vec<(f64, f64)>,
}

impl PlotSeries {
    /// Append a point, routing it to an area bucket.
    ///
    /// Area 0 points join the line only - they have no visible marker.
    pub fn push(&mut self, x: f64, y: f64, area: u32) {
        self.line.push((x, y));
        match area {
            0 => {}
            a if a >= LARGE_AREA => self.large.push((x, y)),
            a if a >= MEDIUM_AREA => self.medium.push((x, y)),
            _ => self.fine.push((x, y)),
        }
    }

    /// Number of plotted points
    pub fn len(&self) -> usize {
        self.line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }
}

/// All series the chart renders
#[derive(Debug, Clone, Default)]
pub struct SeriesSet {
    /// Every displayed print
    pub trades: PlotSeries,
    /// Standing bid sampled at each print's time
    pub bids: PlotSeries,
    /// Standing offer sampled at each print's time
    pub offers: PlotSeries,
    /// Prints that hit the bid
    pub red_prints: PlotSeries,
    /// Prints that lifted the offer
    pub green_prints: PlotSeries,
}

impl SeriesSet {
    /// Minimum and maximum x over all series
    pub fn x_extent(&self) -> Option<(f64, f64)> {
        extent(self.all_points().map(|(x, _)| x))
    }

    /// Minimum and maximum y over all series
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.all_points().map(|(_, y)| y))
    }

    fn all_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.trades
            .line
            .iter()
            .chain(self.bids.line.iter())
            .chain(self.offers.line.iter())
            .copied()
    }
}

fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut result: Option<(f64, f64)> = None;
    for v in values {
        result = Some(match result {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    result
}

/// Build every plotted series from the merged event stream.
///
/// In uniform-time mode each plotted print advances x by one regardless of
/// elapsed time; otherwise x is the print's wall time in seconds. Prints
/// seen before the first quote are skipped - there is nothing to classify
/// against.
pub fn build_series(events: &[MarketEvent], window: &SessionWindow, uniform_time: bool) -> SeriesSet {
    let mut set = SeriesSet::default();
    let mut last_quote: Option<&QuoteEvent> = None;
    let mut index = 0usize;

    for event in events {
        if !window.contains(event.seconds()) {
            continue;
        }

        match event {
            MarketEvent::Quote(quote) => {
                last_quote = Some(quote);
            }
            MarketEvent::Trade(trade) => {
                let Some(quote) = last_quote else {
                    continue;
                };

                let x = if uniform_time { index as f64 } else { trade.seconds };

                // Sample the standing quote at this print's time
                let bid = quote.bid_price.to_f64().unwrap_or_default();
                let ask = quote.ask_price.to_f64().unwrap_or_default();
                set.bids.push(x, bid, size_to_area(quote.bid_size));
                set.offers.push(x, ask, size_to_area(quote.ask_size));

                let price = trade.price.to_f64().unwrap_or_default();
                let area = size_to_area(trade.size);
                set.trades.push(x, price, area);

                match PrintColor::classify(trade.price, quote.bid_price, quote.ask_price) {
                    PrintColor::Red => set.red_prints.push(x, price, area),
                    PrintColor::Green => set.green_prints.push(x, price, area),
                    PrintColor::White => {}
                }

                index += 1;
            }
        }
    }

    info!(
        "built series: {} prints ({} red, {} green)",
        set.trades.len(),
        set.red_prints.len(),
        set.green_prints.len()
    );
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::events::{QuoteEvent, TradeEvent};
    use rust_decimal::Decimal;

    fn quote(seconds: f64, bid: i64, ask: i64) -> MarketEvent {
        MarketEvent::Quote(QuoteEvent {
            seconds,
            bid_price: Decimal::new(bid, 2),
            bid_size: 500,
            ask_price: Decimal::new(ask, 2),
            ask_size: 200,
        })
    }

    fn trade(seconds: f64, price: i64, size: u64) -> MarketEvent {
        MarketEvent::Trade(TradeEvent {
            seconds,
            price: Decimal::new(price, 2),
            size,
        })
    }

    fn window() -> SessionWindow {
        SessionWindow::new(0.0, 86400.0)
    }

    #[test]
    fn test_uniform_mode_evenly_spaced() {
        let events = vec![
            quote(10.0, 1234, 1236),
            trade(11.0, 1235, 100),
            trade(50.0, 1235, 100),
            trade(900.0, 1235, 100),
        ];

        let set = build_series(&events, &window(), true);
        let xs: Vec<f64> = set.trades.line.iter().map(|(x, _)| *x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0]);
        // Quote samples share the trade x coordinates
        let quote_xs: Vec<f64> = set.bids.line.iter().map(|(x, _)| *x).collect();
        assert_eq!(quote_xs, xs);
    }

    #[test]
    fn test_real_time_mode_monotonic() {
        let events = vec![
            quote(10.0, 1234, 1236),
            trade(11.0, 1235, 100),
            trade(11.0, 1235, 50),
            trade(900.0, 1235, 100),
        ];

        let set = build_series(&events, &window(), false);
        let xs: Vec<f64> = set.trades.line.iter().map(|(x, _)| *x).collect();
        assert_eq!(xs, vec![11.0, 11.0, 900.0]);
        assert!(xs.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_trades_before_first_quote_skipped() {
        let events = vec![
            trade(5.0, 1235, 100),
            quote(10.0, 1234, 1236),
            trade(11.0, 1235, 100),
        ];

        let set = build_series(&events, &window(), true);
        assert_eq!(set.trades.len(), 1);
        assert_eq!(set.trades.line[0].0, 0.0);
    }

    #[test]
    fn test_session_window_filters_events() {
        let events = vec![
            quote(10.0, 1234, 1236),
            trade(11.0, 1235, 100),
            trade(200.0, 1235, 100),
        ];

        let set = build_series(&events, &SessionWindow::new(0.0, 100.0), false);
        assert_eq!(set.trades.len(), 1);
    }

    #[test]
    fn test_print_coloring() {
        let events = vec![
            quote(10.0, 1234, 1236),
            trade(11.0, 1234, 100), // at bid -> red
            trade(12.0, 1236, 100), // at ask -> green
            trade(13.0, 1235, 100), // inside spread -> white
            quote(14.0, 1235, 1237),
            trade(15.0, 1235, 100), // at the new bid -> red
        ];

        let set = build_series(&events, &window(), true);
        assert_eq!(set.trades.len(), 4);
        assert_eq!(set.red_prints.len(), 2);
        assert_eq!(set.green_prints.len(), 1);
        assert_eq!(set.red_prints.line, vec![(0.0, 12.34), (3.0, 12.35)]);
    }

    #[test]
    fn test_area_bucketing() {
        let events = vec![
            quote(10.0, 1234, 1236),
            trade(11.0, 1235, 0),      // area 0 -> line only
            trade(12.0, 1235, 50),     // area 6 -> fine
            trade(13.0, 1235, 90),     // area 10 -> medium
            trade(14.0, 1235, 10_000), // area 16 -> large
        ];

        let set = build_series(&events, &window(), true);
        assert_eq!(set.trades.line.len(), 4);
        assert_eq!(set.trades.fine.len(), 1);
        assert_eq!(set.trades.medium.len(), 1);
        assert_eq!(set.trades.large.len(), 1);
    }

    #[test]
    fn test_extents() {
        let events = vec![
            quote(10.0, 1200, 1300),
            trade(11.0, 1250, 100),
            trade(20.0, 1280, 100),
        ];

        let set = build_series(&events, &window(), false);
        assert_eq!(set.x_extent(), Some((11.0, 20.0)));
        assert_eq!(set.y_extent(), Some((12.0, 13.0)));

        assert_eq!(SeriesSet::default().x_extent(), None);
    }
}
