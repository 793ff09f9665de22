use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::{Day, ValidationError};

/// Textual sentiment band published alongside each score.
///
/// Unrecognized labels are preserved verbatim rather than rejected; the
/// upstream wording is not part of any contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentClass {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    ExtremeGreed,
    Other(String),
}

impl SentimentClass {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "extreme fear" => Self::ExtremeFear,
            "fear" => Self::Fear,
            "neutral" => Self::Neutral,
            "greed" => Self::Greed,
            "extreme greed" => Self::ExtremeGreed,
            _ => Self::Other(label.trim().to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ExtremeFear => "Extreme Fear",
            Self::Fear => "Fear",
            Self::Neutral => "Neutral",
            Self::Greed => "Greed",
            Self::ExtremeGreed => "Extreme Greed",
            Self::Other(label) => label,
        }
    }
}

impl Display for SentimentClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SentimentClass {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<SentimentClass> for String {
    fn from(value: SentimentClass) -> Self {
        value.as_str().to_owned()
    }
}

/// One day of the sentiment index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub day: Day,
    pub score: f64,
    pub classification: Option<SentimentClass>,
}

impl SentimentRecord {
    pub fn new(
        day: Day,
        score: f64,
        classification: Option<SentimentClass>,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("score", score)?;

        Ok(Self {
            day,
            score,
            classification,
        })
    }
}

/// One trading day of an asset's price history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub day: Day,
    pub close: f64,
    pub high: f64,
    pub low: f64,
    pub volume: Option<u64>,
}

impl PriceRecord {
    pub fn new(
        day: Day,
        close: f64,
        high: f64,
        low: f64,
        volume: Option<u64>,
    ) -> Result<Self, ValidationError> {
        validate_non_negative("close", close)?;
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;

        if high < low {
            return Err(ValidationError::InvalidPriceRange);
        }

        if close < low || close > high {
            return Err(ValidationError::InvalidPriceBounds);
        }

        Ok(Self {
            day,
            close,
            high,
            low,
            volume,
        })
    }
}

/// One day of the outer-joined series.
///
/// A side absent on that day leaves its fields `None`. After imputation the
/// `score` field is `Some` in every record; price fields stay `None` for
/// sentiment-only days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub day: Day,
    pub score: Option<f64>,
    pub classification: Option<SentimentClass>,
    pub close: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub volume: Option<u64>,
}

impl MergedRecord {
    pub fn from_parts(
        day: Day,
        sentiment: Option<&SentimentRecord>,
        price: Option<&PriceRecord>,
    ) -> Self {
        Self {
            day,
            score: sentiment.map(|s| s.score),
            classification: sentiment.and_then(|s| s.classification.clone()),
            close: price.map(|p| p.close),
            high: price.map(|p| p.high),
            low: price.map(|p| p.low),
            volume: price.and_then(|p| p.volume),
        }
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}
