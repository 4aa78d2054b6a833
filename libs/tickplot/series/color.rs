//! Print color classification
//!
//! A print at the standing bid traded into resting buy interest (someone
//! sold down to the bid); a print at the standing ask traded into resting
//! sell interest. Everything else stays the base color.

use rust_decimal::Decimal;

/// Display color assigned to a print
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintColor {
    /// Print at the standing bid
    Red,
    /// Print at the standing ask
    Green,
    /// Neither side matched
    White,
}

impl PrintColor {
    /// Classify a print against the quote standing at its time.
    ///
    /// Comparison is exact - prices are Decimals, so 12.30 equals 12.3.
    pub fn classify(price: Decimal, bid: Decimal, ask: Decimal) -> Self {
        if price == bid {
            PrintColor::Red
        } else if price == ask {
            PrintColor::Green
        } else {
            PrintColor::White
        }
    }
}
