//! Outer join of the two daily series and windowed-mean imputation of
//! missing sentiment scores.
//!
//! Ordering matters here: [`outer_join`] sorts newest first, and
//! [`impute_scores`] indexes the gap and its averaging window by position
//! in that order. Both functions are pure; inputs are never mutated.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::{Day, MergedRecord, PriceRecord, SentimentRecord};

/// Records on each side of the gap that contribute to the imputation mean.
pub const IMPUTATION_WINDOW: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImputeError {
    #[error("imputation window around the score gap contains no scores to average")]
    WindowEmpty,
}

/// Full outer join of sentiment and price records on calendar day.
///
/// One output record per day present in either input, newest first. A day
/// missing on one side leaves that side's fields `None`. Duplicate days
/// within one input keep the first occurrence.
pub fn outer_join(sentiment: &[SentimentRecord], prices: &[PriceRecord]) -> Vec<MergedRecord> {
    let mut by_day: BTreeMap<Day, (Option<&SentimentRecord>, Option<&PriceRecord>)> =
        BTreeMap::new();

    for record in sentiment {
        let slot = by_day.entry(record.day).or_default();
        if slot.0.is_none() {
            slot.0 = Some(record);
        }
    }
    for record in prices {
        let slot = by_day.entry(record.day).or_default();
        if slot.1.is_none() {
            slot.1 = Some(record);
        }
    }

    by_day
        .into_iter()
        .rev()
        .map(|(day, (s, p))| MergedRecord::from_parts(day, s, p))
        .collect()
}

/// Fill missing scores with the windowed mean around the gap.
///
/// The gap region spans from the first record with a `None` score to the
/// last, in the sequence's newest-first order. Non-contiguous gaps are
/// deliberately treated as one region covering everything between them.
/// The fill value is the mean of the scores present in the region extended
/// by [`IMPUTATION_WINDOW`] records on each side (clipped to the sequence
/// bounds), truncated toward zero. Every missing score in the region
/// receives that single value.
///
/// A sequence with no missing scores is returned unchanged, which makes
/// the operation idempotent.
pub fn impute_scores(records: Vec<MergedRecord>) -> Result<Vec<MergedRecord>, ImputeError> {
    let Some(first_gap) = records.iter().position(|r| r.score.is_none()) else {
        return Ok(records);
    };
    let last_gap = records
        .iter()
        .rposition(|r| r.score.is_none())
        .unwrap_or(first_gap);

    let window_start = first_gap.saturating_sub(IMPUTATION_WINDOW);
    let window_end = (last_gap + IMPUTATION_WINDOW).min(records.len() - 1);

    let mut sum = 0.0;
    let mut count = 0usize;
    for record in &records[window_start..=window_end] {
        if let Some(score) = record.score {
            sum += score;
            count += 1;
        }
    }
    if count == 0 {
        return Err(ImputeError::WindowEmpty);
    }
    let fill = (sum / count as f64).trunc();

    let mut records = records;
    for record in &mut records[first_gap..=last_gap] {
        if record.score.is_none() {
            record.score = Some(fill);
        }
    }
    Ok(records)
}
