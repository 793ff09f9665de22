//! Behavior-driven tests for the outer join, range resolution, and
//! windowed-mean imputation.
//!
//! The merged sequence is ordered newest first; every positional claim
//! below (window clipping, gap regions) is stated in that order.

use moodline_tests::*;
use time::macros::date;

fn jan(day_of_month: u8) -> Day {
    Day::new(
        date!(2024 - 01 - 01)
            .replace_day(day_of_month)
            .expect("valid day of month"),
    )
}

// =============================================================================
// Outer join
// =============================================================================

#[test]
fn when_date_sets_are_disjoint_join_length_is_sum_of_inputs() {
    // Given: sentiment on odd days, prices on even days
    let sentiment_rows = vec![
        sentiment(jan(1), 10.0),
        sentiment(jan(3), 30.0),
        sentiment(jan(5), 50.0),
    ];
    let price_rows = vec![price(jan(2), 100.0), price(jan(4), 200.0)];

    // When: the series are outer-joined
    let joined = outer_join(&sentiment_rows, &price_rows);

    // Then: every day from either side appears exactly once
    assert_eq!(joined.len(), sentiment_rows.len() + price_rows.len());

    // And: each record carries only its own side's fields
    for record in &joined {
        let is_odd = record.day.date().day() % 2 == 1;
        if is_odd {
            assert!(record.score.is_some(), "{}: sentiment day lost its score", record.day);
            assert!(record.close.is_none(), "{}: sentiment day gained a close", record.day);
        } else {
            assert!(record.score.is_none(), "{}: price day gained a score", record.day);
            assert!(record.close.is_some(), "{}: price day lost its close", record.day);
        }
    }
}

#[test]
fn join_is_ordered_newest_first_regardless_of_input_order() {
    // Given: inputs in no particular order
    let sentiment_rows = vec![sentiment(jan(2), 20.0), sentiment(jan(9), 90.0)];
    let price_rows = vec![price(jan(5), 100.0), price(jan(1), 90.0)];

    // When: joined
    let joined = outer_join(&sentiment_rows, &price_rows);

    // Then: days descend strictly
    let days: Vec<Day> = joined.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![jan(9), jan(5), jan(2), jan(1)]);
}

#[test]
fn a_shared_day_combines_both_sides_into_one_record() {
    let joined = outer_join(&[sentiment(jan(1), 25.0)], &[price(jan(1), 100.0)]);

    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].score, Some(25.0));
    assert_eq!(joined[0].close, Some(100.0));
    assert_eq!(joined[0].volume, Some(1_000));
}

// =============================================================================
// Range resolution
// =============================================================================

#[test]
fn resolve_range_returns_the_true_extremes() {
    let records = vec![
        sentiment(jan(12), 1.0),
        sentiment(jan(3), 2.0),
        sentiment(jan(27), 3.0),
        sentiment(jan(8), 4.0),
    ];

    let (start, end) = resolve_range(&records).expect("non-empty input");
    assert_eq!(start, jan(3));
    assert_eq!(end, jan(27));
}

#[test]
fn resolve_range_rejects_an_empty_history() {
    assert_eq!(resolve_range(&[]), Err(RangeError::EmptyInput));
}

// =============================================================================
// Imputation
// =============================================================================

#[test]
fn imputes_a_gap_with_the_truncated_window_mean() {
    // Given: a two-record gap with context scores 22, 20 above and 10, 8 below
    let records = vec![
        merged(jan(6), Some(22.0), None),
        merged(jan(5), Some(20.0), None),
        merged(jan(4), None, Some(100.0)),
        merged(jan(3), None, Some(101.0)),
        merged(jan(2), Some(10.0), None),
        merged(jan(1), Some(8.0), None),
    ];

    // When: imputed
    let imputed = impute_scores(records).expect("window has scores");

    // Then: both gap records receive mean(22, 20, 10, 8) = 15
    assert_eq!(imputed[2].score, Some(15.0));
    assert_eq!(imputed[3].score, Some(15.0));

    // And: surrounding scores and price fields are untouched
    assert_eq!(imputed[0].score, Some(22.0));
    assert_eq!(imputed[5].score, Some(8.0));
    assert_eq!(imputed[2].close, Some(100.0));
}

#[test]
fn the_mean_is_truncated_toward_zero() {
    // Given: window scores 10, 11, 12, 34 around a single gap, mean 16.75
    let records = vec![
        merged(jan(5), Some(10.0), None),
        merged(jan(4), Some(11.0), None),
        merged(jan(3), Some(12.0), None),
        merged(jan(2), None, Some(100.0)),
        merged(jan(1), Some(34.0), None),
    ];

    let imputed = impute_scores(records).expect("window has scores");

    assert_eq!(imputed[3].score, Some(16.0));
}

#[test]
fn a_gap_at_the_start_clips_the_window_to_the_sequence() {
    // Given: the two newest records are missing; only the three records
    // within reach of the window may contribute (40.0 is out of range)
    let records = vec![
        merged(jan(6), None, Some(100.0)),
        merged(jan(5), None, Some(101.0)),
        merged(jan(4), Some(10.0), None),
        merged(jan(3), Some(20.0), None),
        merged(jan(2), Some(30.0), None),
        merged(jan(1), Some(40.0), None),
    ];

    let imputed = impute_scores(records).expect("window has scores");

    // mean(10, 20, 30) = 20; including the out-of-window 40.0 would give 25
    assert_eq!(imputed[0].score, Some(20.0));
    assert_eq!(imputed[1].score, Some(20.0));
}

#[test]
fn a_gap_at_the_end_clips_the_window_to_the_sequence() {
    let records = vec![
        merged(jan(6), Some(40.0), None),
        merged(jan(5), Some(30.0), None),
        merged(jan(4), Some(20.0), None),
        merged(jan(3), Some(10.0), None),
        merged(jan(2), None, Some(100.0)),
        merged(jan(1), None, Some(101.0)),
    ];

    let imputed = impute_scores(records).expect("window has scores");

    // mean(30, 20, 10) = 20; the 40.0 at the head is out of window range
    assert_eq!(imputed[4].score, Some(20.0));
    assert_eq!(imputed[5].score, Some(20.0));
}

#[test]
fn disjoint_gaps_are_filled_as_a_single_region() {
    // Given: two separate one-record gaps with a scored record between them
    let records = vec![
        merged(jan(5), Some(50.0), None),
        merged(jan(4), None, Some(100.0)),
        merged(jan(3), Some(41.0), None),
        merged(jan(2), None, Some(101.0)),
        merged(jan(1), Some(30.0), None),
    ];

    // When: imputed
    let imputed = impute_scores(records).expect("window has scores");

    // Then: both gaps receive the same fill, mean(50, 41, 30) = 40 (truncated)
    assert_eq!(imputed[1].score, Some(40.0));
    assert_eq!(imputed[3].score, Some(40.0));

    // And: the scored record between them is untouched
    assert_eq!(imputed[2].score, Some(41.0));
}

#[test]
fn a_gap_free_sequence_is_returned_unchanged() {
    let records = vec![
        merged(jan(3), Some(30.0), Some(100.0)),
        merged(jan(2), Some(20.0), None),
        merged(jan(1), Some(10.0), Some(99.0)),
    ];

    let imputed = impute_scores(records.clone()).expect("nothing to fill");
    assert_eq!(imputed, records);
}

#[test]
fn imputation_is_idempotent() {
    let records = vec![
        merged(jan(4), Some(20.0), None),
        merged(jan(3), None, Some(100.0)),
        merged(jan(2), None, Some(101.0)),
        merged(jan(1), Some(10.0), None),
    ];

    let once = impute_scores(records).expect("window has scores");
    let twice = impute_scores(once.clone()).expect("no gap remains");
    assert_eq!(once, twice);
}

#[test]
fn after_imputation_no_score_is_missing() {
    let records = vec![
        merged(jan(9), Some(61.0), None),
        merged(jan(8), None, Some(100.0)),
        merged(jan(7), Some(55.0), Some(101.0)),
        merged(jan(6), None, Some(102.0)),
        merged(jan(5), None, Some(103.0)),
        merged(jan(4), Some(47.0), None),
        merged(jan(3), None, Some(104.0)),
        merged(jan(2), Some(44.0), None),
        merged(jan(1), Some(40.0), Some(105.0)),
    ];

    let imputed = impute_scores(records).expect("window has scores");
    assert!(imputed.iter().all(|r| r.score.is_some()));
}

#[test]
fn when_the_window_has_no_scores_imputation_fails() {
    // Given: a fetched window where every score is missing
    let records = vec![merged(jan(2), None, Some(100.0)), merged(jan(1), None, Some(101.0))];

    // When/Then: the mean is undefined
    let err = impute_scores(records).expect_err("no score to average");
    assert_eq!(err, ImputeError::WindowEmpty);
}
