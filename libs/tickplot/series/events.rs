//! Merged event sequence
//!
//! Prints and quotes are loaded from separate files but the plot needs one
//! time-ordered stream so each print can be compared against the quote
//! standing at its moment.

use rust_decimal::Decimal;
use tracing::info;

use sprywarecsv::{seconds_since_midnight, QuoteRecord, TradeRecord};

/// A print placed on the merged timeline
#[derive(Debug, Clone, PartialEq)]
pub struct TradeEvent {
    /// Seconds since the day began
    pub seconds: f64,
    pub price: Decimal,
    pub size: u64,
}

impl From<&TradeRecord> for TradeEvent {
    fn from(record: &TradeRecord) -> Self {
        Self {
            seconds: seconds_since_midnight(record.time),
            price: record.price,
            size: record.size,
        }
    }
}

/// A quote placed on the merged timeline
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteEvent {
    /// Seconds since the day began
    pub seconds: f64,
    pub bid_price: Decimal,
    pub bid_size: u64,
    pub ask_price: Decimal,
    pub ask_size: u64,
}

impl From<&QuoteRecord> for QuoteEvent {
    fn from(record: &QuoteRecord) -> Self {
        Self {
            seconds: seconds_since_midnight(record.time),
            bid_price: record.bid_price,
            bid_size: record.bid_size,
            ask_price: record.ask_price,
            ask_size: record.ask_size,
        }
    }
}

/// One observed market event
#[derive(Debug, Clone, PartialEq)]
pub enum MarketEvent {
    Trade(TradeEvent),
    Quote(QuoteEvent),
}

impl MarketEvent {
    /// Event time as seconds since the day began
    pub fn seconds(&self) -> f64 {
        match self {
            MarketEvent::Trade(t) => t.seconds,
            MarketEvent::Quote(q) => q.seconds,
        }
    }
}

/// Merge prints and quotes into one sequence sorted by time.
///
/// The sort is stable and trades are enqueued first, so at equal timestamps
/// a print precedes the quote update.
pub fn merge_events(trades: &[TradeRecord], quotes: &[QuoteRecord]) -> Vec<MarketEvent> {
    let mut events = Vec::with_capacity(trades.len() + quotes.len());

    for trade in trades {
        events.push(MarketEvent::Trade(trade.into()));
    }
    for quote in quotes {
        events.push(MarketEvent::Quote(quote.into()));
    }

    info!("sorting {} events", events.len());
    events.sort_by(|a, b| a.seconds().total_cmp(&b.seconds()));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprywarecsv::{parse_quote_line, parse_trade_line};

    fn trade(time: &str) -> TradeRecord {
        parse_trade_line(&format!("20160104,{},ABC,T,1,0,4,1,N,123450,100", time)).unwrap()
    }

    fn quote(time: &str) -> QuoteRecord {
        parse_quote_line(&format!(
            "20160104,{},ABC,Q,2,0,4,1,N,123400,500,N,123600,200",
            time
        ))
        .unwrap()
    }

    #[test]
    fn test_merge_sorts_by_time() {
        let trades = vec![trade("9:31:00.000"), trade("9:30:00.000")];
        let quotes = vec![quote("9:30:30.000")];

        let events = merge_events(&trades, &quotes);
        let times: Vec<f64> = events.iter().map(|e| e.seconds()).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn test_trade_precedes_quote_at_equal_time() {
        let trades = vec![trade("9:30:00.000")];
        let quotes = vec![quote("9:30:00.000")];

        let events = merge_events(&trades, &quotes);
        assert!(matches!(events[0], MarketEvent::Trade(_)));
        assert!(matches!(events[1], MarketEvent::Quote(_)));
    }
}
