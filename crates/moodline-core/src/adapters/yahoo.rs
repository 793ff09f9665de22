use std::collections::BTreeSet;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::data_source::{PriceSource, SourceError};
use crate::domain::{Day, PriceRecord, Ticker};
use crate::http_client::{HttpClient, HttpRequest};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Price adapter for the v8 chart endpoint.
///
/// Fetches daily OHLCV rows for an inclusive day span. Only close, high,
/// low, and volume are retained; rows missing any price field are skipped
/// rather than failing the whole fetch.
pub struct YahooAdapter {
    http_client: Arc<dyn HttpClient>,
    base_url: String,
}

impl YahooAdapter {
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

    async fn fetch(
        &self,
        ticker: &Ticker,
        start: Day,
        end: Day,
    ) -> Result<Vec<PriceRecord>, SourceError> {
        if start > end {
            return Err(SourceError::invalid_request(format!(
                "price range start {start} is after end {end}"
            )));
        }

        // period1/period2 bracket the span in unix seconds so the last day
        // is included in full.
        let endpoint = format!(
            "{}/v8/finance/chart/{}?period1={}&period2={}&interval=1d",
            self.base_url,
            urlencoding::encode(ticker.as_str()),
            start.unix_range_start(),
            end.unix_range_end()
        );
        debug!(%endpoint, %ticker, "fetching daily price history");

        let request = HttpRequest::get(&endpoint);
        let response = self.http_client.execute(request).await.map_err(|e| {
            SourceError::unavailable(format!(
                "price transport error for {ticker}: {}",
                e.message()
            ))
        })?;

        // The chart endpoint reports symbol problems inside the body, with
        // a matching 404; inspect the body before the status code.
        let chart = match serde_json::from_str::<ChartResponse>(&response.body) {
            Ok(chart) => chart,
            Err(_) if response.status == 404 => {
                return Err(SourceError::unknown_ticker(ticker));
            }
            Err(_) if !response.is_success() => {
                return Err(SourceError::unavailable(format!(
                    "price source returned status {} for {ticker}",
                    response.status
                )));
            }
            Err(e) => {
                return Err(SourceError::unavailable(format!(
                    "failed to parse price response for {ticker}: {e}"
                )));
            }
        };

        if let Some(error) = &chart.chart.error {
            if response.status == 404 || error.code.as_deref() == Some("Not Found") {
                return Err(SourceError::unknown_ticker(ticker));
            }
            return Err(SourceError::unavailable(format!(
                "price source rejected {ticker}: {}",
                error.describe()
            )));
        }

        if !response.is_success() {
            return Err(SourceError::unavailable(format!(
                "price source returned status {} for {ticker}",
                response.status
            )));
        }

        self.collect_records(ticker, chart)
    }

    fn collect_records(
        &self,
        ticker: &Ticker,
        chart: ChartResponse,
    ) -> Result<Vec<PriceRecord>, SourceError> {
        let series = chart
            .chart
            .result
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| {
                SourceError::unavailable(format!(
                    "price response for {ticker} contains no series"
                ))
            })?;

        // No timestamps means no trading days in the span.
        let timestamps = series.timestamp.unwrap_or_default();
        if timestamps.is_empty() {
            return Ok(Vec::new());
        }

        let quote = series
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| {
                SourceError::unavailable(format!(
                    "price response for {ticker} contains no quote block"
                ))
            })?;

        let mut seen = BTreeSet::new();
        let mut records = Vec::with_capacity(timestamps.len());
        for (i, &seconds) in timestamps.iter().enumerate() {
            let day = Day::from_unix_timestamp(seconds).map_err(|e| {
                SourceError::unavailable(format!(
                    "price response for {ticker} has a bad timestamp: {e}"
                ))
            })?;

            let (Some(close), Some(high), Some(low)) = (
                quote.close.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
            ) else {
                warn!(%day, %ticker, "skipping price row with missing fields");
                continue;
            };

            // Duplicate days keep the first occurrence.
            if !seen.insert(day) {
                continue;
            }

            let volume = quote.volume.get(i).copied().flatten();
            match PriceRecord::new(day, close, high, low, volume) {
                Ok(record) => records.push(record),
                Err(e) => warn!(%day, %ticker, error = %e, "skipping invalid price row"),
            }
        }

        Ok(records)
    }
}

#[derive(Deserialize)]
struct ChartResponse {
    chart: ChartBody,
}

#[derive(Deserialize)]
struct ChartBody {
    #[serde(default)]
    result: Option<Vec<ChartSeries>>,
    #[serde(default)]
    error: Option<ChartError>,
}

#[derive(Deserialize)]
struct ChartError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl ChartError {
    fn describe(&self) -> String {
        match (&self.code, &self.description) {
            (Some(code), Some(description)) => format!("{code}: {description}"),
            (Some(code), None) => code.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => String::from("unspecified chart error"),
        }
    }
}

#[derive(Deserialize)]
struct ChartSeries {
    #[serde(default)]
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Deserialize)]
struct ChartIndicators {
    #[serde(default)]
    quote: Vec<ChartQuote>,
}

#[derive(Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

impl PriceSource for YahooAdapter {
    fn fetch_prices<'a>(
        &'a self,
        ticker: &'a Ticker,
        start: Day,
        end: Day,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<PriceRecord>, SourceError>> + Send + 'a>> {
        Box::pin(async move { self.fetch(ticker, start, end).await })
    }
}
