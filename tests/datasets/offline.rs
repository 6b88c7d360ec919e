use httpmock::Method::GET;
use quandl_rs::{
    DatasetSearchBuilder, PagingOptions, QdError, QuandlProvider, TickerQuery, search,
};

use crate::common::{TOKEN, client_for, fixture, setup_server};

#[tokio::test]
async fn search_mode_counts_returned_tickers() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/datasets.json")
            .query_param("query", "apple")
            .query_param_missing("source_code")
            .query_param("per_page", "2")
            .query_param("page", "1")
            .query_param("auth_token", TOKEN);
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("datasets", "search_apple", "json"));
    });
    let client = client_for(&server);

    let out = client
        .tickers(&TickerQuery::new("apple", true), PagingOptions::new(2, 1))
        .await
        .unwrap();
    mock.assert();

    let data = out.payload().expect("dataset");
    assert_eq!(data.tickers.len(), 2);
    // the provider reported 3021; search mode reports what came back
    assert_eq!(data.total_count, 2);
    assert_eq!(data.tickers[1].quandl_code(), "GOOG/NASDAQ_AAPL");
    assert_eq!(data.sources.len(), 2);
    assert_eq!(data.sources[1].count, 62349);
}

#[tokio::test]
async fn source_mode_keeps_provider_total() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/datasets.json")
            .query_param("query", "*")
            .query_param("source_code", "WIKI")
            .query_param("per_page", "2")
            .query_param("page", "2");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("datasets", "source_WIKI", "json"));
    });
    let client = client_for(&server);

    let out = DatasetSearchBuilder::new(&client, TickerQuery::Source("WIKI".into()))
        .per_page(2)
        .page(2)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    let data = out.into_payload().unwrap();
    assert_eq!(data.total_count, 3021);
    assert_eq!(data.current_page, 2);
    assert_eq!(
        data.tickers.iter().map(|t| t.code.as_str()).collect::<Vec<_>>(),
        vec!["AA", "AAL"]
    );
}

#[tokio::test]
async fn free_function_uses_default_paging() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/datasets.json")
            .query_param("query", "apple")
            .query_param("per_page", "20")
            .query_param("page", "1");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("datasets", "search_apple", "json"));
    });
    let client = client_for(&server);

    let out = search(&client, "apple").await.unwrap();
    mock.assert();
    assert!(out.succeeded());
}

#[tokio::test]
async fn garbage_body_is_a_parsing_fault() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/datasets.json");
        then.status(200).body("{\"docs\": [");
    });
    let client = client_for(&server);

    let err = search(&client, "apple").await.unwrap_err();
    mock.assert();

    assert!(matches!(err, QdError::Json(_)), "got {err:?}");
}
