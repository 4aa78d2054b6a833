//! Trade (print) rows

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::ParseError;
use crate::price::scaled_price;
use crate::time::parse_time_of_day;

/// Field count of a vendor trade row
pub const TRADE_FIELD_COUNT: usize = 11;

// Row layout:
// date, time, symbol, trans_type, item_type, condition, scale, sequence,
// exchange, price, size
const TIME: usize = 1;
const CONDITION: usize = 5;
const SCALE: usize = 6;
const PRICE: usize = 9;
const SIZE: usize = 10;

/// A single print from a SpryWare trades file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRecord {
    /// Event time of day
    pub time: NaiveTime,
    /// Execution price
    pub price: Decimal,
    /// Executed size in shares
    pub size: u64,
    /// Vendor sale condition code
    pub condition: u16,
}

/// Parse a single trade row.
///
/// Expected format: 11 comma separated fields, no header.
pub fn parse_trade_line(line: &str) -> Result<TradeRecord, ParseError> {
    let fields: Vec<&str> = line.split(',').map(|s| s.trim()).collect();

    if fields.len() != TRADE_FIELD_COUNT {
        return Err(ParseError::FieldCount {
            expected: TRADE_FIELD_COUNT,
            found: fields.len(),
        });
    }

    let time = parse_time_of_day(fields[TIME])?;

    let condition: u16 = fields[CONDITION].parse().map_err(|e: std::num::ParseIntError| {
        ParseError::InvalidCondition(fields[CONDITION].to_string(), e.to_string())
    })?;

    let scale: u32 = fields[SCALE].parse().map_err(|e: std::num::ParseIntError| {
        ParseError::InvalidScale(fields[SCALE].to_string(), e.to_string())
    })?;

    let price = scaled_price(fields[PRICE], scale)?;

    let size: u64 = fields[SIZE].parse().map_err(|e: std::num::ParseIntError| {
        ParseError::InvalidSize(fields[SIZE].to_string(), e.to_string())
    })?;

    Ok(TradeRecord {
        time,
        price,
        size,
        condition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const GOOD_LINE: &str = "20160104,9:30:01.250,ABC,T,1,0,4,1001,N,123450,300";

    #[test]
    fn test_parse_trade_line() {
        let trade = parse_trade_line(GOOD_LINE).unwrap();
        assert_eq!(trade.time, parse_time_of_day("9:30:01.250").unwrap());
        assert_eq!(trade.price, Decimal::from_str("12.3450").unwrap());
        assert_eq!(trade.size, 300);
        assert_eq!(trade.condition, 0);
    }

    #[test]
    fn test_parse_trade_wrong_field_count() {
        let err = parse_trade_line("20160104,9:30:01.250,ABC").unwrap_err();
        assert!(err.is_field_count());
    }

    #[test]
    fn test_parse_trade_bad_fields() {
        let bad_time = GOOD_LINE.replace("9:30:01.250", "9:30");
        assert!(parse_trade_line(&bad_time).is_err());

        let bad_size = GOOD_LINE.replace(",300", ",lots");
        assert!(parse_trade_line(&bad_size).is_err());

        let bad_condition = GOOD_LINE.replace(",0,4,", ",x,4,");
        assert!(parse_trade_line(&bad_condition).is_err());
    }
}
