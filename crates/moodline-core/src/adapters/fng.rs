use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::data_source::{SentimentSource, SourceError};
use crate::domain::{Day, SentimentClass, SentimentRecord};
use crate::http_client::{HttpClient, HttpRequest};

/// Upstream `limit` value that returns the entire published history.
pub const FULL_HISTORY_LIMIT: usize = 100_000;

const DEFAULT_BASE_URL: &str = "https://api.alternative.me";

/// Sentiment adapter for the fear & greed index endpoint.
///
/// The feed publishes one record per day, newest first. Requests always ask
/// for the "world" date format (`dd-mm-yyyy`) so days arrive without a
/// time-of-day to truncate.
pub struct FearGreedAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
}

impl FearGreedAdapter {
    pub fn new(http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            http_client,
            base_url: String::from(DEFAULT_BASE_URL),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    async fn fetch(&self, limit: usize) -> Result<Vec<SentimentRecord>, SourceError> {
        if limit == 0 {
            return Err(SourceError::invalid_request(
                "sentiment fetch limit must be greater than zero",
            ));
        }

        let endpoint = format!(
            "{}/fng/?limit={}&date_format=world",
            self.base_url, limit
        );
        debug!(%endpoint, "fetching fear & greed history");

        let request = HttpRequest::get(&endpoint);
        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::unavailable(format!(
                "fear & greed transport error: {}",
                e.message()
            ))
        })?;

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "fear & greed index returned status {}",
                response.status
            )));
        }

        let payload: FngResponse = serde_json::from_str(&response.body).map_err(|e| {
            SourceError::unavailable(format!("failed to parse fear & greed response: {e}"))
        })?;

        let mut records = Vec::with_capacity(payload.data.len().min(limit));
        for entry in payload.data.into_iter().take(limit) {
            let day = Day::parse_world(&entry.timestamp).map_err(|e| {
                SourceError::unavailable(format!("fear & greed entry has a bad timestamp: {e}"))
            })?;

            let score = entry.value.parse::<f64>().map_err(|_| {
                SourceError::unavailable(format!(
                    "fear & greed entry for {day} has a non-numeric value '{}'",
                    entry.value
                ))
            })?;

            let classification = entry
                .value_classification
                .map(|label| SentimentClass::from_label(&label));

            let record = SentimentRecord::new(day, score, classification).map_err(|e| {
                SourceError::unavailable(format!("fear & greed entry for {day} is invalid: {e}"))
            })?;
            records.push(record);
        }

        Ok(records)
    }
}

// Response shape: { "data": [ { value, value_classification, timestamp, ... } ] }.
// time_until_update and metadata fields are ignored.

#[derive(Deserialize)]
struct FngResponse {
    data: Vec<FngEntry>,
}

#[derive(Deserialize)]
struct FngEntry {
    value: String,
    #[serde(default)]
    value_classification: Option<String>,
    timestamp: String,
}

impl SentimentSource for FearGreedAdapter {
    fn fetch_sentiment<'a>(
        &'a self,
        limit: usize,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<SentimentRecord>, SourceError>> + Send + 'a>> {
        Box::pin(async move { self.fetch(limit).await })
    }
}
