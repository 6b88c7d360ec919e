use httpmock::Method::GET;
use quandl_rs::{
    CATALOG_UNAVAILABLE, DataSource, LIVE_CATALOG_TRANSPORT_POLICY, NO_DATA_FOUND, QdError,
    QuandlProvider, TransportPolicy, load_all_data_sources,
};

use crate::common::{client_for, fixture, mock_catalog_page, setup_server, unreachable_client};

#[tokio::test]
async fn offline_catalog_skips_header_and_parses_counts() {
    let server = setup_server();
    let mock = mock_catalog_page(&server, fixture("catalog", "data-sources", "html"));
    let client = client_for(&server);

    let out = load_all_data_sources(&client).await.unwrap();
    mock.assert();

    let sources = out.payload().expect("catalog rows");
    assert_eq!(
        sources,
        &vec![
            DataSource::new(
                "Wiki EOD Stock Prices",
                3021,
                "End of day stock prices for US companies",
                "WIKI"
            ),
            DataSource::new(
                "Google Finance",
                62349,
                "Stock prices from Google Finance",
                "GOOG"
            ),
            DataSource::new("Bitcoin Charts", 120, "Bitcoin exchange rates", "BCHARTS"),
        ]
    );
}

#[tokio::test]
async fn missing_anchor_is_a_failure() {
    let server = setup_server();
    let mock = mock_catalog_page(&server, fixture("catalog", "no-anchor", "html"));
    let client = client_for(&server);

    let out = client.all_data_sources().await.unwrap();
    mock.assert();

    assert_eq!(out.message(), Some(CATALOG_UNAVAILABLE));
}

#[tokio::test]
async fn header_only_table_is_a_failure() {
    let server = setup_server();
    let mock = mock_catalog_page(&server, fixture("catalog", "header-only", "html"));
    let client = client_for(&server);

    let out = load_all_data_sources(&client).await.unwrap();
    mock.assert();

    assert_eq!(out.message(), Some(NO_DATA_FOUND));
}

#[tokio::test]
async fn malformed_row_is_a_fault() {
    let server = setup_server();
    let html = "<html><body><h2 id=\"Financial-Data\">Financial</h2>\n<table><tbody>\
        <tr>\n<td>Only a name</td>\n<td>12</td>\n</tr></tbody></table></body></html>";
    let mock = mock_catalog_page(&server, html.to_string());
    let client = client_for(&server);

    let err = load_all_data_sources(&client).await.unwrap_err();
    mock.assert();

    assert!(matches!(err, QdError::Scrape(_)), "got {err:?}");
}

#[tokio::test]
async fn server_error_is_a_fault() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/resources/data-sources");
        then.status(503).body("maintenance");
    });
    let client = client_for(&server);

    let err = load_all_data_sources(&client).await.unwrap_err();
    mock.assert();

    match err {
        QdError::Status { status, url, .. } => {
            assert_eq!(status, 503);
            assert!(url.contains("/resources/data-sources"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_page_is_a_fault() {
    assert_eq!(LIVE_CATALOG_TRANSPORT_POLICY, TransportPolicy::Fault);

    let err = load_all_data_sources(&unreachable_client())
        .await
        .unwrap_err();
    assert!(matches!(err, QdError::Http(_)), "got {err:?}");
}
