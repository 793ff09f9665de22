use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::domain::ValidationError;

/// `dd-mm-yyyy`, the upstream sentiment feed's "world" rendering.
const WORLD_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day]-[month]-[year]");
const ISO_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

const SECONDS_PER_DAY: i64 = 86_400;

/// A calendar day with no time-of-day and no timezone.
///
/// Both upstream series are daily; joining on anything finer than a calendar
/// day silently misaligns records whose timestamps differ by a few hours.
/// `Day` is the only join key used in the merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(Date);

impl Day {
    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    /// Parse the sentiment feed's `dd-mm-yyyy` rendering.
    pub fn parse_world(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), WORLD_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDay {
                value: input.to_owned(),
            })
    }

    /// Parse an ISO `yyyy-mm-dd` rendering.
    pub fn parse_iso(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), ISO_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDay {
                value: input.to_owned(),
            })
    }

    /// Truncate a unix timestamp to its UTC calendar day.
    pub fn from_unix_timestamp(seconds: i64) -> Result<Self, ValidationError> {
        OffsetDateTime::from_unix_timestamp(seconds)
            .map(|dt| Self(dt.date()))
            .map_err(|_| ValidationError::TimestampOutOfRange { seconds })
    }

    /// Unix timestamp of this day's first second (00:00:00 UTC).
    pub fn unix_range_start(&self) -> i64 {
        self.0.midnight().assume_utc().unix_timestamp()
    }

    /// Unix timestamp of this day's last second (23:59:59 UTC).
    pub fn unix_range_end(&self) -> i64 {
        self.unix_range_start() + SECONDS_PER_DAY - 1
    }

    pub const fn date(&self) -> Date {
        self.0
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0.format(ISO_FORMAT) {
            Ok(rendered) => f.write_str(&rendered),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl From<Date> for Day {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse_iso(&value).map_err(serde::de::Error::custom)
    }
}
