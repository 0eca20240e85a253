use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Deserialize;

use crate::models::{bar::Bar, news::NewsItem};

#[derive(Deserialize, Debug)]
pub struct AlpacaBar {
    #[serde(rename = "t")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "c")]
    pub close: f64,
    #[serde(rename = "v")]
    pub volume: f64,
    #[serde(rename = "n")]
    pub trade_count: u64,
    #[serde(rename = "vw")]
    pub vwap: f64,
}

impl From<AlpacaBar> for Bar {
    fn from(ab: AlpacaBar) -> Self {
        Bar {
            timestamp: ab.timestamp,
            open: ab.open,
            high: ab.high,
            low: ab.low,
            close: ab.close,
            volume: ab.volume,
            trade_count: Some(ab.trade_count),
            vwap: Some(ab.vwap),
        }
    }
}

/// Response body of `GET /v2/stocks/bars`.
///
/// `bars` is keyed by symbol; for an empty range Alpaca omits the map
/// entirely, hence the default.
#[derive(Deserialize, Debug)]
pub struct AlpacaBarsResponse {
    #[serde(default)]
    pub bars: IndexMap<String, Vec<AlpacaBar>>,
    pub next_page_token: Option<String>,
}

/// A single article from `GET /v1beta1/news`.
///
/// The API returns more fields (author, summary, content, images); only
/// what the tools consume is deserialized.
#[derive(Deserialize, Debug)]
pub struct AlpacaArticle {
    pub headline: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl From<AlpacaArticle> for NewsItem {
    fn from(article: AlpacaArticle) -> Self {
        NewsItem {
            headline: article.headline,
            url: article.url,
            created_at: article.created_at,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct AlpacaNewsResponse {
    #[serde(default)]
    pub news: Vec<AlpacaArticle>,
    pub next_page_token: Option<String>,
}
