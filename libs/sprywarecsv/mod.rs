//! SpryWare market data CSV parsing
//!
//! Reads the vendor's print (trade) and quote files for a single symbol.
//! Rows are comma separated with no header; prices arrive as scaled
//! integers, times as decimalized time-of-day strings.

pub mod condition;
pub mod error;
pub mod price;
pub mod quote;
pub mod reader;
pub mod time;
pub mod trade;

pub use condition::{is_displayable_condition, EXCLUDED_CONDITIONS};
pub use error::ParseError;
pub use price::scaled_price;
pub use quote::{parse_quote_line, QuoteRecord};
pub use reader::{read_quotes, read_trades, QuoteReader, TradeReader};
pub use time::{format_seconds, parse_time_of_day, seconds_since_midnight};
pub use trade::{parse_trade_line, TradeRecord};
