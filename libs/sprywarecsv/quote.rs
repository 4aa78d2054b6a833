//! Quote rows

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::ParseError;
use crate::price::scaled_price;
use crate::time::parse_time_of_day;

/// Field count of a vendor quote row
pub const QUOTE_FIELD_COUNT: usize = 14;

// Row layout:
// date, time, symbol, trans_type, item_type, condition, scale, sequence,
// bid_exchange, bid_price, bid_size, ask_exchange, ask_price, ask_size
const TIME: usize = 1;
const SCALE: usize = 6;
const BID_PRICE: usize = 9;
const BID_SIZE: usize = 10;
const ASK_PRICE: usize = 12;
const ASK_SIZE: usize = 13;

/// A single bid/ask pair from a SpryWare quotes file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    /// Event time of day
    pub time: NaiveTime,
    /// Best bid price
    pub bid_price: Decimal,
    /// Size available at the bid
    pub bid_size: u64,
    /// Best ask price
    pub ask_price: Decimal,
    /// Size available at the ask
    pub ask_size: u64,
}

/// Parse a single quote row.
///
/// Expected format: 14 comma separated fields, no header. Bid and ask
/// prices share the row's scale field.
pub fn parse_quote_line(line: &str) -> Result<QuoteRecord, ParseError> {
    let fields: Vec<&str> = line.split(',').map(|s| s.trim()).collect();

    if fields.len() != QUOTE_FIELD_COUNT {
        return Err(ParseError::FieldCount {
            expected: QUOTE_FIELD_COUNT,
            found: fields.len(),
        });
    }

    let time = parse_time_of_day(fields[TIME])?;

    let scale: u32 = fields[SCALE].parse().map_err(|e: std::num::ParseIntError| {
        ParseError::InvalidScale(fields[SCALE].to_string(), e.to_string())
    })?;

    let bid_price = scaled_price(fields[BID_PRICE], scale)?;
    let bid_size: u64 = fields[BID_SIZE].parse().map_err(|e: std::num::ParseIntError| {
        ParseError::InvalidSize(fields[BID_SIZE].to_string(), e.to_string())
    })?;

    let ask_price = scaled_price(fields[ASK_PRICE], scale)?;
    let ask_size: u64 = fields[ASK_SIZE].parse().map_err(|e: std::num::ParseIntError| {
        ParseError::InvalidSize(fields[ASK_SIZE].to_string(), e.to_string())
    })?;

    Ok(QuoteRecord {
        time,
        bid_price,
        bid_size,
        ask_price,
        ask_size,
    })
}
