//! Query-string construction for the Alpaca data API.

use chrono::SecondsFormat;

use crate::models::{
    request_params::{BarsRequestParams, NewsRequestParams},
    timeframe::{TimeFrame, TimeFrameUnit},
};

/// Maximum page size accepted by the bars endpoint. The request is bounded
/// to a single page; downstream shaping caps the payload far below this.
pub const PAGE_LIMIT: u32 = 10_000;

/// Renders a [`TimeFrame`] as Alpaca's timeframe token (e.g. `5Min`, `1Day`).
pub fn timeframe_token(timeframe: &TimeFrame) -> String {
    let unit = match timeframe.unit {
        TimeFrameUnit::Minute => "Min",
        TimeFrameUnit::Hour => "Hour",
        TimeFrameUnit::Day => "Day",
        TimeFrameUnit::Week => "Week",
        TimeFrameUnit::Month => "Month",
    };
    format!("{}{}", timeframe.amount, unit)
}

/// Builds the query parameters for a single bounded bars request.
pub fn construct_bar_query(params: &BarsRequestParams) -> Vec<(String, String)> {
    vec![
        ("symbols".to_string(), params.symbol.clone()),
        (
            "timeframe".to_string(),
            timeframe_token(&params.timeframe),
        ),
        (
            "start".to_string(),
            params.start.to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
        (
            "end".to_string(),
            params.end.to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
        ("limit".to_string(), PAGE_LIMIT.to_string()),
        ("sort".to_string(), "asc".to_string()),
    ]
}

/// Builds the query parameters for a single bounded news request.
pub fn construct_news_query(params: &NewsRequestParams) -> Vec<(String, String)> {
    vec![
        ("symbols".to_string(), params.symbol.clone()),
        (
            "start".to_string(),
            params.start.to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
        (
            "end".to_string(),
            params.end.to_rfc3339_opts(SecondsFormat::Secs, true),
        ),
        ("limit".to_string(), params.limit.to_string()),
    ]
}
