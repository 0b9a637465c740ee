use std::time::Duration;

use httpmock::{Method::GET, MockServer};
use macrofeed::MarketPricesBuilder;
use serde_json::json;

fn chart_body(open: f64, close: f64) -> String {
    json!({
        "chart": {
            "result": [{
                "timestamp": [1_704_067_200],
                "indicators": {
                    "quote": [{
                        "open": [open],
                        "high": [close + 1.0],
                        "low": [open - 1.0],
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
async fn change_is_measured_from_the_days_open() {
    let server = MockServer::start();

    let gold = server.mock(|when, then| {
        when.method(GET)
            .path("/v8/finance/chart/GC=F")
            .query_param("interval", "1d")
            .query_param("includePrePost", "true")
            .query_param("events", "div,splits,capitalGains");
        then.status(200)
            .header("content-type", "application/json")
            .body(chart_body(100.0, 105.0));
    });

    let client = crate::common::client_for(&server);
    let prices = MarketPricesBuilder::new(&client)
        .instruments([("Gold", "GC=F")])
        .delay(Duration::ZERO)
        .fetch()
        .await
        .unwrap();

    gold.assert();
    let rec = prices["Gold"];
    assert_eq!(rec.price, 105.0);
    assert_eq!(rec.change, 5.0);
    assert_eq!(rec.change_percent, 5.0);
}

#[tokio::test]
async fn every_instrument_in_the_table_is_fetched() {
    let server = MockServer::start();

    let spy = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/SPY");
        then.status(200)
            .header("content-type", "application/json")
            .body(chart_body(500.0, 510.0));
    });
    let iwf = server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/IWF");
        then.status(200)
            .header("content-type", "application/json")
            .body(chart_body(380.0, 376.2));
    });

    let client = crate::common::client_for(&server);
    let prices = MarketPricesBuilder::new(&client)
        .instruments([("S&P 500", "SPY"), ("Growth Stocks", "IWF")])
        .delay(Duration::ZERO)
        .fetch()
        .await
        .unwrap();

    spy.assert();
    iwf.assert();
    assert_eq!(prices.len(), 2);
    assert_eq!(prices["S&P 500"].price, 510.0);
    assert_eq!(prices["S&P 500"].change, 10.0);
    assert_eq!(prices["S&P 500"].change_percent, 2.0);
    assert_eq!(prices["Growth Stocks"].price, 376.2);
    assert_eq!(prices["Growth Stocks"].change, -3.8);
    assert_eq!(prices["Growth Stocks"].change_percent, -1.0);
}

#[tokio::test]
async fn only_the_last_row_of_the_day_counts() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v8/finance/chart/CL=F");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "chart": {
                        "result": [{
                            "timestamp": [1_704_067_200, 1_704_070_800],
                            "indicators": {
                                "quote": [{
                                    "open": [70.0, 80.0],
                                    "high": [71.0, 85.0],
                                    "low": [69.0, 79.0],
                                    "close": [70.5, 82.0],
                                    "volume": [500_000, 600_000]
                                }]
                            }
                        }],
                        "error": null
                    }
                })
                .to_string(),
            );
    });

    let client = crate::common::client_for(&server);
    let prices = MarketPricesBuilder::new(&client)
        .instruments([("Crude Oil", "CL=F")])
        .delay(Duration::ZERO)
        .fetch()
        .await
        .unwrap();

    let rec = prices["Crude Oil"];
    assert_eq!(rec.price, 82.0);
    assert_eq!(rec.change, 2.0);
    assert_eq!(rec.change_percent, 2.5);
}
