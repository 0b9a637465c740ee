use std::time::Duration;

use httpmock::{Method::GET, MockServer};
use macrofeed::{CalendarFetcher, FeedClient};
use url::Url;

#[tokio::test]
async fn missing_api_key_returns_empty_without_calling_the_provider() {
    let server = MockServer::start();

    let any_call = server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    // An empty key collapses to "missing", regardless of the environment.
    let client = FeedClient::builder()
        .base_calendar(Url::parse(&format!("{}/news/api/calendar/", server.base_url())).unwrap())
        .calendar_api_key("")
        .build()
        .unwrap();

    let mut fetcher = CalendarFetcher::new(&client).rate_limit_window(Duration::ZERO);

    assert!(fetcher.fetch().await.is_empty());
    any_call.assert_hits(0);

    // The failure is stable: the cache was not touched, so a second call
    // takes the same path.
    assert!(fetcher.fetch().await.is_empty());
    any_call.assert_hits(0);
}
