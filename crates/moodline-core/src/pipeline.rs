//! Sequential orchestration of the four pipeline steps.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::adapters::{FearGreedAdapter, YahooAdapter, FULL_HISTORY_LIMIT};
use crate::data_source::{PriceSource, SentimentSource, SourceError};
use crate::domain::{MergedRecord, Ticker};
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::merge::{impute_scores, outer_join, ImputeError};
use crate::range::{resolve_range, RangeError};

/// Any step failing aborts the run; no partial results are returned.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Impute(#[from] ImputeError),
}

/// Fetches both series, aligns them by day, and fills sentiment gaps.
///
/// Steps run strictly one after another: sentiment fetch, date-range
/// resolution, price fetch scoped to that range, outer join, imputation.
/// There is no parallelism and no shared mutable state; callers wanting
/// multiple tickers run independent invocations.
pub struct MergePipeline {
    sentiment: Arc<dyn SentimentSource>,
    prices: Arc<dyn PriceSource>,
}

impl MergePipeline {
    pub fn new(sentiment: Arc<dyn SentimentSource>, prices: Arc<dyn PriceSource>) -> Self {
        Self { sentiment, prices }
    }

    /// Wire both adapters to their real endpoints over a shared transport.
    pub fn with_default_sources() -> Self {
        let http_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
        Self::new(
            Arc::new(FearGreedAdapter::new(Arc::clone(&http_client))),
            Arc::new(YahooAdapter::new(http_client)),
        )
    }

    pub async fn run(
        &self,
        ticker: &Ticker,
        limit: usize,
    ) -> Result<Vec<MergedRecord>, PipelineError> {
        info!(%ticker, limit, "running sentiment/price merge");

        let sentiment = self.sentiment.fetch_sentiment(limit).await?;
        let (start, end) = resolve_range(&sentiment)?;
        debug!(%start, %end, "sentiment history bounds resolved");

        let prices = self.prices.fetch_prices(ticker, start, end).await?;
        let merged = outer_join(&sentiment, &prices);
        let imputed = impute_scores(merged)?;

        info!(records = imputed.len(), "merge complete");
        Ok(imputed)
    }

    /// Run over the upstream's entire published sentiment history.
    pub async fn run_full_history(
        &self,
        ticker: &Ticker,
    ) -> Result<Vec<MergedRecord>, PipelineError> {
        self.run(ticker, FULL_HISTORY_LIMIT).await
    }
}
