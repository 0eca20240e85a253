//! Provider abstraction for market data sources.
//!
//! This module defines the [`DataProvider`] and [`NewsProvider`] traits,
//! which serve as the unified interface for fetching time-series bar data
//! and news articles from any market data vendor (e.g., Alpaca, Polygon.io).
//!
//! Each concrete provider implementation should implement these traits to
//! handle vendor-specific API logic. The traits are designed for async usage
//! and support dynamic dispatch (`dyn DataProvider`) for runtime selection
//! of providers.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use market_data_tool::models::{
//!     bar_series::BarSeries,
//!     request_params::BarsRequestParams,
//! };
//! use market_data_tool::providers::{DataProvider, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl DataProvider for MyProvider {
//!     async fn fetch_bars(
//!         &self,
//!         params: BarsRequestParams,
//!     ) -> Result<BarSeries, ProviderError> {
//!         Ok(BarSeries {
//!             symbol: params.symbol,
//!             timeframe: params.timeframe,
//!             bars: vec![],
//!         })
//!     }
//! }
//! ```

pub mod alpaca_rest;

use async_trait::async_trait;
use shared_utils::env::MissingEnvVarError;
use snafu::{Backtrace, Snafu};

use crate::models::{
    bar_series::BarSeries,
    news::NewsItem,
    request_params::{BarsRequestParams, NewsRequestParams},
};

/// Trait for fetching time-series bar data from a market data provider.
#[async_trait]
pub trait DataProvider {
    /// Fetches the bar series for the given request parameters.
    ///
    /// Implementations perform exactly one upstream request per call: no
    /// retry and no pagination loop. A failed fetch surfaces immediately.
    ///
    /// # Returns
    ///
    /// * `Ok(BarSeries)` - The fetched series, bars ascending by timestamp.
    /// * `Err(ProviderError)` - If the request fails.
    async fn fetch_bars(&self, params: BarsRequestParams) -> Result<BarSeries, ProviderError>;
}

/// Trait for fetching news articles from a market data provider.
#[async_trait]
pub trait NewsProvider {
    /// Fetches up to `params.limit` articles for the given symbol and range.
    async fn fetch_news(&self, params: NewsRequestParams)
    -> Result<Vec<NewsItem>, ProviderError>;
}

/// Errors that can occur during the creation of a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// A required credential environment variable is not set.
    #[snafu(display("Missing environment variable: {source}"))]
    MissingEnvVar {
        source: MissingEnvVarError,
        backtrace: Backtrace,
    },

    /// Failed to build the HTTP client.
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// API key contains invalid characters.
    #[snafu(display("Invalid API key format: {source}"))]
    InvalidApiKey {
        source: reqwest::header::InvalidHeaderValue,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a provider implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API returned a non-success response.
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::models::timeframe::{TimeFrame, TimeFrameUnit};

    use super::*;

    struct EmptyProvider;

    #[async_trait]
    impl DataProvider for EmptyProvider {
        async fn fetch_bars(&self, params: BarsRequestParams) -> Result<BarSeries, ProviderError> {
            Ok(BarSeries {
                symbol: params.symbol,
                timeframe: params.timeframe,
                bars: vec![],
            })
        }
    }

    // Providers must stay object-safe so callers can pick one at runtime.
    fn boxed() -> Box<dyn DataProvider> {
        Box::new(EmptyProvider)
    }

    #[tokio::test]
    async fn dynamic_dispatch_works() {
        let provider = boxed();

        let params = BarsRequestParams {
            symbol: "NVDA".to_string(),
            timeframe: TimeFrame::new(1, TimeFrameUnit::Day),
            start: Utc::now(),
            end: Utc::now(),
        };

        let series = provider.fetch_bars(params).await.unwrap();
        assert_eq!(series.symbol, "NVDA");
        assert!(series.bars.is_empty());
    }
}
