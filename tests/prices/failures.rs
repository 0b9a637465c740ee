use std::time::Duration;

use httpmock::{Method::GET, MockServer};
use macrofeed::{FeedError, MarketPricesBuilder, PriceRecord};
use serde_json::json;

fn chart_body(open: f64, close: f64) -> String {
    json!({
        "chart": {
            "result": [{
                "timestamp": [1_704_067_200],
                "indicators": {
                    "quote": [{
                        "open": [open],
                        "high": [close],
                        "low": [open],
                        "close": [close],
                        "volume": [1_000_000]
                    }]
                }
            }],
            "error": null
        }
    })
    .to_string()
}

#[tokio::test]
async fn one_bad_ticker_does_not_sink_the_batch() {
    let server = MockServer::start();

    let gold = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/GC=F");
        then.status(404);
    });
    let spy = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/SPY");
        then.status(200)
            .header("content-type", "application/json")
            .body(chart_body(100.0, 105.0));
    });

    let client = crate::common::client_for(&server);
    let prices = MarketPricesBuilder::new(&client)
        .instruments([("Gold", "GC=F"), ("S&P 500", "SPY")])
        .delay(Duration::ZERO)
        .fetch()
        .await
        .unwrap();

    gold.assert();
    spy.assert();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices["Gold"], PriceRecord::ZERO);
    assert_eq!(prices["S&P 500"].price, 105.0);
    assert_eq!(prices["S&P 500"].change, 5.0);
}

#[tokio::test]
async fn empty_instrument_table_is_a_top_level_error() {
    let server = MockServer::start();
    let client = crate::common::client_for(&server);

    let err = MarketPricesBuilder::new(&client)
        .instruments(Vec::<(String, String)>::new())
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, FeedError::Data(_)));
}

#[tokio::test]
async fn default_table_is_fetched_in_full() {
    let server = MockServer::start();

    // One catch-all mock: every ticker resolves, including the duplicated
    // ^TNX and DX-Y.NYB entries.
    let all = server.mock(|when, then| {
        when.method(GET);
        then.status(200)
            .header("content-type", "application/json")
            .body(chart_body(100.0, 101.0));
    });

    let client = crate::common::client_for(&server);
    let prices = MarketPricesBuilder::new(&client)
        .delay(Duration::ZERO)
        .fetch()
        .await
        .unwrap();

    assert_eq!(all.hits(), 28);
    assert_eq!(prices.len(), 28, "28 distinct names in the default table");
    assert_eq!(prices["VIX (Volatility Index)"].price, 101.0);
    assert_eq!(prices["Risk Sentiment"].price, 101.0);
}
