use async_trait::async_trait;
use reqwest::{Client, header};
use secrecy::ExposeSecret;
use shared_utils::env::get_secret_env;
use snafu::ResultExt;
use tracing::debug;

use crate::{
    models::{
        bar::Bar,
        bar_series::BarSeries,
        news::NewsItem,
        request_params::{BarsRequestParams, NewsRequestParams},
    },
    providers::{
        ApiSnafu, ClientBuildSnafu, DataProvider, InvalidApiKeySnafu, MissingEnvVarSnafu,
        NewsProvider, ProviderError, ProviderInitError, ReqwestSnafu,
        alpaca_rest::{
            params::{construct_bar_query, construct_news_query},
            response::{AlpacaBarsResponse, AlpacaNewsResponse},
        },
    },
};

const BARS_URL: &str = "https://data.alpaca.markets/v2/stocks/bars";
const NEWS_URL: &str = "https://data.alpaca.markets/v1beta1/news";

/// Market data provider backed by Alpaca's data REST API.
///
/// Constructed once at startup; the inner [`Client`] carries the credential
/// headers and is safe to reuse read-only across sequential invocations.
pub struct AlpacaProvider {
    client: Client,
}

impl AlpacaProvider {
    /// Creates a new Alpaca provider.
    ///
    /// Reads API keys from the `APCA_API_KEY_ID` and `APCA_API_SECRET_KEY`
    /// environment variables. A missing key is fatal here, never a per-call
    /// error.
    pub fn new() -> Result<Self, ProviderInitError> {
        let api_key = get_secret_env("APCA_API_KEY_ID").context(MissingEnvVarSnafu)?;
        let secret_key = get_secret_env("APCA_API_SECRET_KEY").context(MissingEnvVarSnafu)?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "APCA-API-KEY-ID",
            header::HeaderValue::from_str(api_key.expose_secret())
                .context(InvalidApiKeySnafu)?,
        );
        headers.insert(
            "APCA-API-SECRET-KEY",
            header::HeaderValue::from_str(secret_key.expose_secret())
                .context(InvalidApiKeySnafu)?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context(ClientBuildSnafu)?;

        Ok(Self { client })
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ProviderError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown API error".to_string());
        ApiSnafu {
            message: format!("{status}: {body}"),
        }
        .fail()
    }
}

#[async_trait]
impl DataProvider for AlpacaProvider {
    async fn fetch_bars(&self, params: BarsRequestParams) -> Result<BarSeries, ProviderError> {
        let query = construct_bar_query(&params);
        debug!(symbol = %params.symbol, "requesting bars");

        let response = self
            .client
            .get(BARS_URL)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;
        let response = Self::check_status(response).await?;

        let parsed = response
            .json::<AlpacaBarsResponse>()
            .await
            .context(ReqwestSnafu)?;

        if parsed.next_page_token.is_some() {
            // Single-request contract: later pages are intentionally left
            // unfetched. The shaper caps the payload anyway.
            debug!(symbol = %params.symbol, "range exceeds one page; extra bars not fetched");
        }

        let bars: Vec<Bar> = parsed
            .bars
            .into_iter()
            .filter(|(symbol, _)| *symbol == params.symbol)
            .flat_map(|(_, bars)| bars)
            .map(Bar::from)
            .collect();

        Ok(BarSeries {
            symbol: params.symbol,
            timeframe: params.timeframe,
            bars,
        })
    }
}

#[async_trait]
impl NewsProvider for AlpacaProvider {
    async fn fetch_news(
        &self,
        params: NewsRequestParams,
    ) -> Result<Vec<NewsItem>, ProviderError> {
        let query = construct_news_query(&params);
        debug!(symbol = %params.symbol, limit = params.limit, "requesting news");

        let response = self
            .client
            .get(NEWS_URL)
            .query(&query)
            .send()
            .await
            .context(ReqwestSnafu)?;
        let response = Self::check_status(response).await?;

        let parsed = response
            .json::<AlpacaNewsResponse>()
            .await
            .context(ReqwestSnafu)?;

        Ok(parsed.news.into_iter().map(NewsItem::from).collect())
    }
}
