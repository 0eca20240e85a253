//! Serde schemas for the tool-facing input records.
//!
//! These mirror what the agent layer sends: free-form strings for dates and
//! timeframe units, with defaults for the optional fields. Normalization
//! happens in the tool drivers, not here.

use serde::{Deserialize, Serialize};

/// Input record for the bars tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetBarsParams {
    /// Stock ticker symbol (e.g., "AAPL", "NVDA").
    pub symbol: String,
    /// Start expression: ISO-8601 or relative like "1 days ago".
    pub start: String,
    /// End expression: ISO-8601 or "now".
    pub end: String,
    /// Amount for the timeframe (e.g., 1, 5, 15).
    #[serde(default = "default_timeframe_amount")]
    pub timeframe_amount: u32,
    /// Timeframe unit: "Minute", "Hour", "Day", "Week", "Month".
    #[serde(default = "default_timeframe_unit")]
    pub timeframe_unit: String,
}

fn default_timeframe_amount() -> u32 {
    1
}

fn default_timeframe_unit() -> String {
    "Minute".to_string()
}

/// Input record for the news tool.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetNewsParams {
    /// Stock ticker symbol.
    pub symbol: String,
    /// Start expression: ISO-8601 or relative like "1 days ago".
    pub start: String,
    /// End expression: ISO-8601 or "now".
    pub end: String,
    /// Maximum number of articles to return.
    #[serde(default = "default_news_limit")]
    pub limit: u32,
}

fn default_news_limit() -> u32 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_params_apply_defaults() {
        let params: GetBarsParams = serde_json::from_str(
            r#"{"symbol": "NVDA", "start": "1 days ago", "end": "now"}"#,
        )
        .unwrap();

        assert_eq!(params.timeframe_amount, 1);
        assert_eq!(params.timeframe_unit, "Minute");
    }

    #[test]
    fn bars_params_accept_explicit_values() {
        let params: GetBarsParams = serde_json::from_str(
            r#"{"symbol": "NVDA", "start": "1 days ago", "end": "now",
                "timeframe_amount": 5, "timeframe_unit": "hour"}"#,
        )
        .unwrap();

        assert_eq!(params.timeframe_amount, 5);
        assert_eq!(params.timeframe_unit, "hour");
    }

    #[test]
    fn news_params_default_limit_is_five() {
        let params: GetNewsParams = serde_json::from_str(
            r#"{"symbol": "NVDA", "start": "1 days ago", "end": "now"}"#,
        )
        .unwrap();

        assert_eq!(params.limit, 5);
    }
}
