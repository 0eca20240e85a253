use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::timeframe::TimeFrame;

/// Normalized parameters for requesting time-series bar data.
///
/// This struct is vendor-agnostic and fully resolved: dates are absolute UTC
/// instants and the timeframe is canonical. It is the standard input for all
/// [`DataProvider`](crate::providers::DataProvider) implementations.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BarsRequestParams {
    /// The symbol to request (e.g., `"NVDA"`).
    pub symbol: String,

    /// The time interval for each bar (e.g., 5 minutes, 1 day).
    ///
    /// Validation of allowed amount/unit combinations is performed by each
    /// provider implementation, according to its own API rules.
    pub timeframe: TimeFrame,

    /// Start of the requested time range (inclusive, UTC).
    pub start: DateTime<Utc>,

    /// End of the requested time range (exclusive, UTC).
    ///
    /// No ordering against `start` is enforced here; providers decide how
    /// to treat empty or inverted ranges.
    pub end: DateTime<Utc>,
}

/// Normalized parameters for requesting news articles.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewsRequestParams {
    /// The symbol to request news for.
    pub symbol: String,

    /// Start of the requested time range (inclusive, UTC).
    pub start: DateTime<Utc>,

    /// End of the requested time range (exclusive, UTC).
    pub end: DateTime<Utc>,

    /// Maximum number of articles to return.
    pub limit: u32,
}
