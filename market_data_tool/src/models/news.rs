//! Canonical in-memory representation of a news article.

use chrono::{DateTime, Utc};

/// A single news article as reported by a provider.
///
/// Providers return richer objects (author, summary, body, related
/// symbols); only the fields the downstream tools care about are kept here.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsItem {
    /// Article headline.
    pub headline: String,
    /// Canonical URL of the article.
    pub url: String,
    /// Publication timestamp (UTC).
    pub created_at: DateTime<Utc>,
}
