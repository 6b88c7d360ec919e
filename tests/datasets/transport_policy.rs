use httpmock::Method::GET;
use quandl_rs::{
    DatasetSearchBuilder, MarketDataBuilder, QdError, TickerQuery, TransportPolicy, search,
};

use crate::common::{client_for, setup_server, unreachable_client};

#[test]
fn policies_differ_per_operation() {
    assert_eq!(DatasetSearchBuilder::TRANSPORT_POLICY, TransportPolicy::Failure);
    assert_eq!(MarketDataBuilder::TRANSPORT_POLICY, TransportPolicy::Fault);
}

#[tokio::test]
async fn unreachable_host_degrades_search_but_faults_market_data() {
    let client = unreachable_client();

    let out = DatasetSearchBuilder::new(&client, TickerQuery::Search("apple".into()))
        .fetch()
        .await
        .unwrap();
    let failure = out.message().expect("failure message").to_string();
    assert!(!failure.is_empty());

    let fault = MarketDataBuilder::new(&client, "WIKI", "AAPL")
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(fault, QdError::Http(_)), "got {fault:?}");
    assert!(
        fault.to_string().contains(&failure),
        "`{fault}` should contain `{failure}`"
    );
}

#[tokio::test]
async fn provider_error_message_round_trips_in_both_policies() {
    let server = setup_server();
    let body = r#"{"quandl_error":{"code":"QELx01","message":"You have exceeded the anonymous user limit."}}"#;
    let search_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/datasets.json");
        then.status(429)
            .header("content-type", "application/json")
            .body(body);
    });
    let data_mock = server.mock(|when, then| {
        when.method(GET).path("/api/v1/datasets/WIKI/AAPL.json");
        then.status(429)
            .header("content-type", "application/json")
            .body(body);
    });
    let client = client_for(&server);
    let expected = "QELx01: You have exceeded the anonymous user limit.";

    let out = search(&client, "apple").await.unwrap();
    search_mock.assert();
    assert_eq!(out.message(), Some(expected));

    let err = MarketDataBuilder::new(&client, "WIKI", "AAPL")
        .fetch()
        .await
        .unwrap_err();
    data_mock.assert();
    match err {
        QdError::Status {
            status, message, ..
        } => {
            assert_eq!(status, 429);
            assert_eq!(message, expected);
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}
