use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use market_data_tool::{
    models::{news::NewsItem, request_params::NewsRequestParams},
    providers::{NewsProvider, ProviderError},
    tool::{NewsTool, schema::GetNewsParams},
};

/// Serves synthetic articles, honoring the requested limit.
struct FixtureNews {
    available: usize,
}

#[async_trait]
impl NewsProvider for FixtureNews {
    async fn fetch_news(
        &self,
        params: NewsRequestParams,
    ) -> Result<Vec<NewsItem>, ProviderError> {
        let published = Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap();
        Ok((0..self.available.min(params.limit as usize))
            .map(|i| NewsItem {
                headline: format!("Headline {i}"),
                url: format!("https://example.com/{i}"),
                created_at: published + Duration::hours(i as i64),
            })
            .collect())
    }
}

#[tokio::test]
async fn news_payload_is_projected_to_headline_and_url() {
    let tool = NewsTool::new(FixtureNews { available: 12 });

    let payload = tool
        .get_news(GetNewsParams {
            symbol: "NVDA".to_string(),
            start: "1 days ago".to_string(),
            end: "now".to_string(),
            limit: 5,
        })
        .await
        .unwrap();

    assert_eq!(payload.symbol, "NVDA");
    assert_eq!(payload.count, 5);
    assert_eq!(payload.articles[0].headline, "Headline 0");
    assert_eq!(payload.articles[4].url, "https://example.com/4");

    let json = serde_json::to_value(&payload).unwrap();
    assert!(json["articles"][0].get("created_at").is_none());
}

#[tokio::test]
async fn fewer_articles_than_the_limit_is_fine() {
    let tool = NewsTool::new(FixtureNews { available: 2 });

    let payload = tool
        .get_news(GetNewsParams {
            symbol: "NVDA".to_string(),
            start: "1 days ago".to_string(),
            end: "now".to_string(),
            limit: 5,
        })
        .await
        .unwrap();

    assert_eq!(payload.count, 2);
}
