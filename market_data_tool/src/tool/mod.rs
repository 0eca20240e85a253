//! Agent-facing tools: normalize → fetch → classify → shape.
//!
//! Each tool invocation is a single pass through that pipeline. The only
//! I/O happens inside the provider fetch; everything before it is pure, so
//! a malformed input never costs a network call. There is no retry: a
//! failed fetch surfaces immediately and the caller decides what to do.

pub mod dates;
pub mod schema;
pub mod shape;

use chrono::Utc;
use snafu::{IntoError, ResultExt};
use tracing::info;

use crate::{
    errors::{DateSnafu, FetchSnafu, ToolError},
    models::{
        request_params::{BarsRequestParams, NewsRequestParams},
        timeframe::{TimeFrame, TimeFrameUnit},
    },
    providers::{DataProvider, NewsProvider, ProviderError},
    tool::{
        schema::{GetBarsParams, GetNewsParams},
        shape::{BarsPayload, NewsPayload},
    },
};

/// Substrings (matched case-insensitively) that mark a fetch failure as a
/// credentials or subscription problem.
const AUTH_SIGNATURES: [&str; 3] = ["subscription", "403", "unauthorized"];

const REMEDIATION_CHECKLIST: &str = "\
This usually indicates a credentials or subscription problem. Check the following:
  1. The API key pair belongs to the right environment (production keys for live data, not sandbox/paper keys).
  2. Your market data subscription tier covers the requested feed.
  3. APCA_API_KEY_ID and APCA_API_SECRET_KEY are set to the intended values.
  4. If all of the above look right, contact the data provider's support.";

/// Classifies a fetch failure.
///
/// Failures whose message carries an auth/subscription signature are
/// re-raised with the remediation checklist appended to the original text;
/// everything else passes through verbatim. This is the only place failure
/// messages are enriched.
fn classify_fetch_error(err: ProviderError) -> ToolError {
    let original = err.to_string();
    let lowered = original.to_ascii_lowercase();

    if AUTH_SIGNATURES.iter().any(|sig| lowered.contains(sig)) {
        return ToolError::CredentialOrSubscription {
            message: format!("{original}\n\n{REMEDIATION_CHECKLIST}"),
        };
    }
    FetchSnafu.into_error(err)
}

/// Fetches OHLCV bars for a symbol over a loosely-specified time range and
/// shapes them for a token-constrained consumer.
///
/// Holds the provider handle for the life of the process; each invocation
/// is otherwise stateless.
pub struct BarsTool<P> {
    provider: P,
}

impl<P: DataProvider> BarsTool<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Runs one tool invocation.
    ///
    /// Resolves the date expressions and timeframe, performs the single
    /// bounded fetch, and returns the shaped payload. Date errors are
    /// raised before any network traffic.
    pub async fn get_bars(&self, params: GetBarsParams) -> Result<BarsPayload, ToolError> {
        let now = Utc::now();
        let start = dates::resolve_start(&params.start, now).context(DateSnafu)?;
        let end = dates::resolve_end(&params.end, now).context(DateSnafu)?;
        let timeframe = TimeFrame::new(
            params.timeframe_amount,
            TimeFrameUnit::resolve(&params.timeframe_unit),
        );

        let request = BarsRequestParams {
            symbol: params.symbol,
            timeframe,
            start,
            end,
        };

        let series = self
            .provider
            .fetch_bars(request)
            .await
            .map_err(classify_fetch_error)?;

        let payload = shape::shape_bars(&series);
        info!(
            symbol = %payload.symbol,
            count = payload.count,
            total = payload.total_bars_available,
            "shaped bars payload"
        );
        Ok(payload)
    }
}

/// Fetches recent news headlines for a symbol over a loosely-specified
/// time range.
pub struct NewsTool<P> {
    provider: P,
}

impl<P: NewsProvider> NewsTool<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Runs one tool invocation; same pipeline as the bars tool.
    pub async fn get_news(&self, params: GetNewsParams) -> Result<NewsPayload, ToolError> {
        let now = Utc::now();
        let start = dates::resolve_start(&params.start, now).context(DateSnafu)?;
        let end = dates::resolve_end(&params.end, now).context(DateSnafu)?;

        let request = NewsRequestParams {
            symbol: params.symbol.clone(),
            start,
            end,
            limit: params.limit,
        };

        let items = self
            .provider
            .fetch_news(request)
            .await
            .map_err(classify_fetch_error)?;

        let payload = shape::shape_news(&items, &params.symbol);
        info!(symbol = %payload.symbol, count = payload.count, "shaped news payload");
        Ok(payload)
    }
}
