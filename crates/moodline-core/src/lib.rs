//! # Moodline Core
//!
//! Retrieval and alignment of two daily market series: the "fear & greed"
//! sentiment index and an asset's price/volume history.
//!
//! ## Overview
//!
//! The library exposes four operations and a pipeline composing them:
//!
//! - fetch the sentiment history (newest first, bounded by a limit)
//! - resolve the history's earliest/latest day
//! - fetch daily prices for a ticker over that inclusive span
//! - outer-join both series on calendar day and impute missing sentiment
//!   scores with a windowed mean
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Upstream adapters (fear & greed index, yahoo chart) |
//! | [`data_source`] | Source traits and `SourceError` |
//! | [`domain`] | Calendar day, ticker, record types |
//! | [`http_client`] | Transport abstraction (reqwest / scripted) |
//! | [`merge`] | Outer join and windowed-mean imputation |
//! | [`pipeline`] | Sequential orchestration of the four steps |
//! | [`range`] | Date-range resolution |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use moodline_core::{MergePipeline, Ticker};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = MergePipeline::with_default_sources();
//!     let ticker = Ticker::parse("BTC-USD")?;
//!
//!     let merged = pipeline.run(&ticker, 365).await?;
//!     for record in merged.iter().take(5) {
//!         println!("{}: score {:?} close {:?}", record.day, record.score, record.close);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Adapter failures carry a [`data_source::SourceErrorKind`]; range
//! resolution and imputation have their own small error enums, and
//! [`pipeline::PipelineError`] aggregates all of them. Nothing is retried:
//! the first failing step fails the run.

pub mod adapters;
pub mod data_source;
pub mod domain;
pub mod http_client;
pub mod merge;
pub mod pipeline;
pub mod range;

// Re-export commonly used types at crate root for convenience

pub use adapters::{FearGreedAdapter, YahooAdapter, FULL_HISTORY_LIMIT};

pub use data_source::{PriceSource, SentimentSource, SourceError, SourceErrorKind};

pub use domain::{
    Day, MergedRecord, PriceRecord, SentimentClass, SentimentRecord, Ticker, ValidationError,
};

pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient, ScriptedHttpClient,
};

pub use merge::{impute_scores, outer_join, ImputeError, IMPUTATION_WINDOW};

pub use pipeline::{MergePipeline, PipelineError};

pub use range::{resolve_range, RangeError};
