//! Domain types for the sentiment/price merge: calendar days, validated
//! tickers, and the three record shapes that flow through the pipeline.
//!
//! All types are immutable values with validating constructors; an invalid
//! score, price range, or day string never becomes a record.

use thiserror::Error;

mod day;
mod models;
mod ticker;

pub use day::Day;
pub use models::{MergedRecord, PriceRecord, SentimentClass, SentimentRecord};
pub use ticker::Ticker;

/// Construction-time validation failures for domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("ticker must not be empty")]
    EmptyTicker,

    #[error("ticker is {len} characters long, maximum is {max}")]
    TickerTooLong { len: usize, max: usize },

    #[error("ticker must start with an ASCII letter, found '{ch}'")]
    TickerInvalidStart { ch: char },

    #[error("ticker contains invalid character '{ch}' at position {index}")]
    TickerInvalidChar { ch: char, index: usize },

    #[error("unparseable calendar day '{value}'")]
    InvalidDay { value: String },

    #[error("timestamp {seconds} is outside the representable date range")]
    TimestampOutOfRange { seconds: i64 },

    #[error("{field} must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("{field} must not be negative")]
    NegativeValue { field: &'static str },

    #[error("price high is below low")]
    InvalidPriceRange,

    #[error("price close is outside the high/low range")]
    InvalidPriceBounds,
}
