//! Time-range tokens and the provider sampling resolution they map to.
//!
//! Both mappings are total: unrecognized tokens fall back to a one-month
//! lookback sampled daily.

use chrono::{DateTime, Months, TimeDelta, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::TrackerError;
use crate::result::Result;

/// Chart window selectable by the user.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum TimeRange {
    #[strum(serialize = "1D")]
    #[value(name = "1D")]
    OneDay,
    #[strum(serialize = "1W")]
    #[value(name = "1W")]
    OneWeek,
    #[default]
    #[strum(serialize = "1M")]
    #[value(name = "1M")]
    OneMonth,
    #[strum(serialize = "1Y")]
    #[value(name = "1Y")]
    OneYear,
    #[strum(serialize = "2Y")]
    #[value(name = "2Y")]
    TwoYears,
    #[strum(serialize = "5Y")]
    #[value(name = "5Y")]
    FiveYears,
    #[strum(serialize = "10Y")]
    #[value(name = "10Y")]
    TenYears,
    /// Thirty years back, as far as free-tier data usually goes.
    #[strum(serialize = "MAX")]
    #[value(name = "MAX")]
    Max,
}

/// Provider sampling granularity. `Display` yields the wire code.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Resolution {
    #[strum(serialize = "5")]
    FiveMinutes,
    #[strum(serialize = "60")]
    Hourly,
    #[strum(serialize = "D")]
    Daily,
    #[strum(serialize = "W")]
    Weekly,
    #[strum(serialize = "M")]
    Monthly,
}

impl TimeRange {
    /// Strict parse of a range token.
    pub fn parse(token: &str) -> Result<Self> {
        token
            .trim()
            .parse()
            .map_err(|_| TrackerError::UnknownTimeRange(token.to_string()))
    }

    /// Lenient parse: unknown tokens map to one month.
    pub fn parse_or_default(token: &str) -> Self {
        Self::parse(token).unwrap_or_default()
    }

    /// Start of the window ending at `now`, in unix seconds.
    pub fn from_timestamp(self, now: DateTime<Utc>) -> i64 {
        let from = match self {
            TimeRange::OneDay => now.checked_sub_signed(TimeDelta::days(1)),
            TimeRange::OneWeek => now.checked_sub_signed(TimeDelta::weeks(1)),
            TimeRange::OneMonth => now.checked_sub_months(Months::new(1)),
            TimeRange::OneYear => now.checked_sub_months(Months::new(12)),
            TimeRange::TwoYears => now.checked_sub_months(Months::new(2 * 12)),
            TimeRange::FiveYears => now.checked_sub_months(Months::new(5 * 12)),
            TimeRange::TenYears => now.checked_sub_months(Months::new(10 * 12)),
            TimeRange::Max => now.checked_sub_months(Months::new(30 * 12)),
        };
        from.unwrap_or(now).timestamp()
    }

    /// Sampling resolution suited to this window.
    pub fn resolution(self) -> Resolution {
        match self {
            TimeRange::OneDay => Resolution::FiveMinutes,
            TimeRange::OneWeek => Resolution::Hourly,
            TimeRange::OneMonth | TimeRange::OneYear => Resolution::Daily,
            TimeRange::TwoYears | TimeRange::FiveYears => Resolution::Weekly,
            TimeRange::TenYears | TimeRange::Max => Resolution::Monthly,
        }
    }
}

/// `from` timestamp for a raw token, defaulting to a one-month lookback.
pub fn from_timestamp_for(token: &str, now: DateTime<Utc>) -> i64 {
    TimeRange::parse_or_default(token).from_timestamp(now)
}

/// Resolution for a raw token, defaulting to daily.
pub fn resolution_for(token: &str) -> Resolution {
    TimeRange::parse_or_default(token).resolution()
}
