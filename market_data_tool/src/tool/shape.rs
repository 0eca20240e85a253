//! Shapes fetched data into token-bounded payloads.
//!
//! The payloads feed a language model with a finite context budget, so both
//! the number of records and the fields per record are capped: a bounded,
//! field-limited payload keeps worst-case cost predictable no matter how
//! wide a range the caller asked for.

use serde::{Deserialize, Serialize};

use crate::models::{bar_series::BarSeries, news::NewsItem};

/// Upper bound on the number of bars returned to the caller. Enough for
/// technical analysis over the shaped window.
pub const MAX_BARS: usize = 500;

/// One shaped bar: exactly the six fields the agent sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarRecord {
    /// RFC 3339 rendering of the bar timestamp.
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// The bars tool's output payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarsPayload {
    pub symbol: String,
    /// Most-recent-last, at most [`MAX_BARS`] records.
    pub data: Vec<BarRecord>,
    /// `data.len()`, restated for the consuming model.
    pub count: usize,
    /// Length of the full fetched series before truncation.
    pub total_bars_available: usize,
}

/// Reduces a fetched series to the bounded payload.
///
/// Keeps only timestamp/open/high/low/close/volume (trade count and VWAP
/// are dropped deliberately) and truncates to the *last* [`MAX_BARS`]
/// records, preserving the original ascending order.
pub fn shape_bars(series: &BarSeries) -> BarsPayload {
    let total_bars_available = series.bars.len();
    let skip = total_bars_available.saturating_sub(MAX_BARS);

    let data: Vec<BarRecord> = series
        .bars
        .iter()
        .skip(skip)
        .map(|bar| BarRecord {
            timestamp: bar.timestamp.to_rfc3339(),
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume as u64,
        })
        .collect();

    BarsPayload {
        symbol: series.symbol.clone(),
        count: data.len(),
        data,
        total_bars_available,
    }
}

/// One shaped article: headline and URL only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    pub headline: String,
    pub url: String,
}

/// The news tool's output payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsPayload {
    pub symbol: String,
    pub articles: Vec<NewsRecord>,
    pub count: usize,
}

/// Projects fetched articles down to headline + URL.
pub fn shape_news(items: &[NewsItem], symbol: &str) -> NewsPayload {
    let articles: Vec<NewsRecord> = items
        .iter()
        .map(|item| NewsRecord {
            headline: item.headline.clone(),
            url: item.url.clone(),
        })
        .collect();

    NewsPayload {
        symbol: symbol.to_string(),
        count: articles.len(),
        articles,
    }
}
