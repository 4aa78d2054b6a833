//! Scaled vendor prices
//!
//! SpryWare ships prices as an integer mantissa plus a decimal scale:
//! real price = mantissa / 10^scale.

use rust_decimal::Decimal;

use crate::error::ParseError;

// Decimal supports at most 28 fractional digits
const MAX_SCALE: u32 = 28;

/// Convert a raw mantissa and scale into an exact `Decimal` price.
pub fn scaled_price(raw: &str, scale: u32) -> Result<Decimal, ParseError> {
    if scale > MAX_SCALE {
        return Err(ParseError::InvalidScale(
            scale.to_string(),
            format!("scale exceeds maximum of {}", MAX_SCALE),
        ));
    }

    let mantissa: i64 = raw
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ParseError::InvalidPrice(raw.to_string(), e.to_string()))?;

    Ok(Decimal::new(mantissa, scale))
}
