//! Streaming readers over vendor files
//!
//! The vendor files end with a trailer row of a different column count, so
//! the readers treat a field-count mismatch as end of data. Blank lines
//! are skipped; any other malformed field surfaces as an error.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info};

use crate::condition::is_displayable_condition;
use crate::error::ParseError;
use crate::quote::{parse_quote_line, QuoteRecord};
use crate::trade::{parse_trade_line, TradeRecord};

/// Iterator over prints in a trades file or reader
pub struct TradeReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    done: bool,
}

impl<R: Read> TradeReader<R> {
    /// Create a new reader over any `Read` source
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            done: false,
        }
    }

    /// Current line number (1-based)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: Read> Iterator for TradeReader<R> {
    type Item = Result<TradeRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        next_record(&mut self.reader, &mut self.line_number, &mut self.done, parse_trade_line)
    }
}

/// Iterator over quotes in a quotes file or reader
pub struct QuoteReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    done: bool,
}

impl<R: Read> QuoteReader<R> {
    /// Create a new reader over any `Read` source
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            done: false,
        }
    }

    /// Current line number (1-based)
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: Read> Iterator for QuoteReader<R> {
    type Item = Result<QuoteRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        next_record(&mut self.reader, &mut self.line_number, &mut self.done, parse_quote_line)
    }
}

fn next_record<R, T>(
    reader: &mut BufReader<R>,
    line_number: &mut usize,
    done: &mut bool,
    parse: fn(&str) -> Result<T, ParseError>,
) -> Option<Result<T, ParseError>>
where
    R: Read,
{
    if *done {
        return None;
    }

    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return None, // EOF
            Ok(_) => {
                *line_number += 1;

                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                match parse(trimmed) {
                    Ok(record) => return Some(Ok(record)),
                    Err(e) if e.is_field_count() => {
                        // Trailer row - stop reading
                        debug!("line {}: {}, done reading", line_number, e);
                        *done = true;
                        return None;
                    }
                    Err(e) => return Some(Err(e)),
                }
            }
            Err(e) => return Some(Err(e.into())),
        }
    }
}

/// Load a trades file, dropping prints with excluded sale conditions.
pub fn read_trades(path: impl AsRef<Path>) -> Result<Vec<TradeRecord>, ParseError> {
    let file = File::open(path.as_ref())?;
    let mut trades = Vec::new();
    let mut dropped = 0usize;

    for record in TradeReader::new(file) {
        let trade = record?;
        if is_displayable_condition(trade.condition) {
            trades.push(trade);
        } else {
            dropped += 1;
        }
    }

    info!(
        "read {} prints from {} ({} dropped by sale condition)",
        trades.len(),
        path.as_ref().display(),
        dropped
    );
    Ok(trades)
}

/// Load a quotes file.
pub fn read_quotes(path: impl AsRef<Path>) -> Result<Vec<QuoteRecord>, ParseError> {
    let file = File::open(path.as_ref())?;
    let mut quotes = Vec::new();

    for record in QuoteReader::new(file) {
        quotes.push(record?);
    }

    info!("read {} quotes from {}", quotes.len(), path.as_ref().display());
    Ok(quotes)
}
