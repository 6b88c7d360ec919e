use chrono::NaiveDate;
use httpmock::Method::GET;
use quandl_rs::{MarketDataBuilder, SortOrder, Timeframe, Transformation};

use crate::common::{TOKEN, client_for, fixture, setup_server};

#[tokio::test]
async fn row_limit_request_sends_expected_params() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/datasets/WIKI/AAPL.json")
            .query_param("sort_order", "asc")
            .query_param("exclude_headers", "true")
            .query_param("rows", "3")
            .query_param("column", "4")
            .query_param("collapse", "weekly")
            .query_param("transformation", "diff")
            .query_param("auth_token", TOKEN);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("market_data", "WIKI_AAPL", "json"));
    });
    let client = client_for(&server);

    let out = MarketDataBuilder::new(&client, "WIKI", "AAPL")
        .sort_order(SortOrder::Ascending)
        .exclude_headers(true)
        .rows(3)
        .column(4)
        .timeframe(Timeframe::Weekly)
        .transformation(Transformation::Diff)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(out.succeeded());
}

#[tokio::test]
async fn date_range_request_sends_trim_bounds() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/datasets/WIKI/AAPL.json")
            .query_param("trim_start", "2014-03-25")
            .query_param("trim_end", "2014-03-27")
            .query_param("sort_order", "desc")
            .query_param("exclude_headers", "false")
            .query_param("collapse", "none")
            .query_param("transformation", "none");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("market_data", "WIKI_AAPL", "json"));
    });
    let client = client_for(&server);

    let builder = MarketDataBuilder::new(&client, "WIKI", "AAPL")
        .rows(10)
        .between(
            NaiveDate::from_ymd_opt(2014, 3, 25).unwrap(),
            NaiveDate::from_ymd_opt(2014, 3, 27).unwrap(),
        );
    let out = builder.fetch().await.unwrap();

    mock.assert();
    assert_eq!(out.payload().map(Vec::len), Some(3));
}
