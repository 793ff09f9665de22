//! Date-range resolution over a fetched sentiment history.

use thiserror::Error;

use crate::domain::{Day, SentimentRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("cannot resolve a date range from an empty sentiment history")]
    EmptyInput,
}

/// Earliest and latest day present in `records`, independent of input order.
///
/// The pair scopes the price fetch to the span the sentiment series can
/// actually be joined against.
pub fn resolve_range(records: &[SentimentRecord]) -> Result<(Day, Day), RangeError> {
    let mut days = records.iter().map(|r| r.day);
    let Some(first) = days.next() else {
        return Err(RangeError::EmptyInput);
    };

    let (start, end) = days.fold((first, first), |(earliest, latest), day| {
        (earliest.min(day), latest.max(day))
    });
    Ok((start, end))
}
