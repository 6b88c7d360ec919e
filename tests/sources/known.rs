use quandl_rs::{DataSource, NO_DATA_FOUND, OperationResult, QdClient, QuandlProvider, known_data_sources};

#[test]
fn seeded_catalog_is_returned_as_is() {
    let catalog = vec![
        DataSource::new("Wiki EOD Stock Prices", 3021, "End of day prices", "WIKI"),
        DataSource::new("Currency Exchange Rates", 812, "FX", "CURRFX"),
    ];
    let client = QdClient::builder()
        .data_sources(catalog.clone())
        .build()
        .unwrap();

    let out = known_data_sources(&client);
    assert_eq!(out, OperationResult::Success(catalog));
}

#[test]
fn empty_catalog_is_a_failure() {
    let client = QdClient::builder().data_sources(vec![]).build().unwrap();

    let out = client.data_sources();
    assert!(!out.succeeded());
    assert_eq!(out.message(), Some(NO_DATA_FOUND));
    assert!(out.payload().is_none());
}

#[test]
fn default_catalog_is_not_empty_and_stable() {
    let client = QdClient::default();
    let first = client.data_sources();
    let second = client.data_sources();
    assert!(first.succeeded());
    assert_eq!(first, second);
    assert!(
        first
            .payload()
            .unwrap()
            .iter()
            .any(|ds| ds.code == "WIKI")
    );
}
