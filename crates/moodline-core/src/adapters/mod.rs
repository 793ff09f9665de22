//! Source adapters for the two upstream services.

mod fng;
mod yahoo;

pub use fng::{FearGreedAdapter, FULL_HISTORY_LIMIT};
pub use yahoo::YahooAdapter;
