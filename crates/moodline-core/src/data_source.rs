//! Source traits and the adapter-level error type.
//!
//! The two external collaborators are modeled as traits so the merge
//! pipeline can be exercised offline with scripted transports: a
//! [`SentimentSource`] returning the daily index newest first, and a
//! [`PriceSource`] returning daily OHLCV rows for a bounded date span.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;

use crate::domain::{Day, PriceRecord, SentimentRecord, Ticker};

/// Adapter-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    /// The upstream service was unreachable or returned a malformed payload.
    Unavailable,
    /// The price source does not recognize the requested ticker.
    UnknownTicker,
    /// The request was rejected before any upstream call was made.
    InvalidRequest,
}

/// Structured source error carried out of adapter calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    kind: SourceErrorKind,
    message: String,
}

impl SourceError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::Unavailable,
            message: message.into(),
        }
    }

    pub fn unknown_ticker(ticker: &Ticker) -> Self {
        Self {
            kind: SourceErrorKind::UnknownTicker,
            message: format!("price source does not recognize ticker {ticker}"),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: SourceErrorKind::InvalidRequest,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> SourceErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            SourceErrorKind::Unavailable => "source.unavailable",
            SourceErrorKind::UnknownTicker => "source.unknown_ticker",
            SourceErrorKind::InvalidRequest => "source.invalid_request",
        }
    }
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for SourceError {}

/// Provider of the daily sentiment index.
///
/// Implementations return at most `limit` records, newest day first, each
/// with the score parsed to a float and the date truncated to a calendar
/// day. A `limit` of zero is rejected as an invalid request.
pub trait SentimentSource: Send + Sync {
    fn fetch_sentiment<'a>(
        &'a self,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SentimentRecord>, SourceError>> + Send + 'a>>;
}

/// Provider of daily price/volume history.
///
/// Implementations cover the inclusive `start..=end` day span at daily
/// granularity; non-trading days simply produce no record. An unrecognized
/// ticker surfaces as [`SourceErrorKind::UnknownTicker`].
pub trait PriceSource: Send + Sync {
    fn fetch_prices<'a>(
        &'a self,
        ticker: &'a Ticker,
        start: Day,
        end: Day,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PriceRecord>, SourceError>> + Send + 'a>>;
}
