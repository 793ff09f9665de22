// Shared prelude and fixture builders for moodline behavior tests.
pub use moodline_core::{
    adapters::{FearGreedAdapter, YahooAdapter, FULL_HISTORY_LIMIT},
    data_source::{PriceSource, SentimentSource, SourceError, SourceErrorKind},
    domain::{Day, MergedRecord, PriceRecord, SentimentClass, SentimentRecord, Ticker},
    http_client::{HttpError, HttpResponse, ScriptedHttpClient},
    merge::{impute_scores, outer_join, ImputeError, IMPUTATION_WINDOW},
    pipeline::{MergePipeline, PipelineError},
    range::{resolve_range, RangeError},
};
pub use std::sync::Arc;

use serde_json::json;

pub fn sentiment(day: Day, score: f64) -> SentimentRecord {
    SentimentRecord::new(day, score, None).expect("valid sentiment record")
}

pub fn price(day: Day, close: f64) -> PriceRecord {
    PriceRecord::new(day, close, close + 1.0, close - 1.0, Some(1_000)).expect("valid price record")
}

pub fn merged(day: Day, score: Option<f64>, close: Option<f64>) -> MergedRecord {
    MergedRecord {
        day,
        score,
        classification: None,
        close,
        high: close.map(|c| c + 1.0),
        low: close.map(|c| c - 1.0),
        volume: None,
    }
}

/// Fear & greed payload from `(value, value_classification, timestamp)`
/// triples, with the extra upstream fields the parser must ignore.
pub fn fng_body(entries: &[(&str, &str, &str)]) -> String {
    let data: Vec<serde_json::Value> = entries
        .iter()
        .map(|(value, classification, timestamp)| {
            json!({
                "value": value,
                "value_classification": classification,
                "timestamp": timestamp,
                "time_until_update": "21540"
            })
        })
        .collect();

    json!({
        "name": "Fear and Greed Index",
        "data": data,
        "metadata": { "error": null }
    })
    .to_string()
}

/// Chart payload with parallel per-row arrays, as the v8 endpoint returns.
pub fn chart_body(
    timestamps: &[i64],
    closes: &[Option<f64>],
    highs: &[Option<f64>],
    lows: &[Option<f64>],
    volumes: &[Option<u64>],
) -> String {
    json!({
        "chart": {
            "result": [{
                "meta": { "currency": "USD", "dataGranularity": "1d" },
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{
                        "close": closes,
                        "high": highs,
                        "low": lows,
                        "volume": volumes
                    }]
                }
            }],
            "error": null
        }
    })
    .to_string()
}

pub fn chart_error_body(code: &str, description: &str) -> String {
    json!({
        "chart": {
            "result": null,
            "error": { "code": code, "description": description }
        }
    })
    .to_string()
}
