use chrono::NaiveDate;
use quandl_rs::{BitcoinBar, MarketDataBuilder, MarketDataPoint, StockBar};

use crate::common::{client_for, fixture, mock_dataset, setup_server};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

async fn first_point(source: &str, ticker: &str) -> MarketDataPoint {
    let server = setup_server();
    let key = format!("{source}_{ticker}");
    let mock = mock_dataset(&server, source, ticker, fixture("market_data", &key, "json"));
    let client = client_for(&server);

    let out = MarketDataBuilder::new(&client, source, ticker)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    out.into_payload()
        .unwrap_or_else(|| panic!("{key}: expected points"))
        .remove(0)
}

fn plain_bar(date: NaiveDate) -> StockBar {
    StockBar {
        date,
        open: Some(540.02),
        high: Some(541.5),
        low: Some(535.12),
        close: Some(537.46),
        volume: Some(7_362_500.0),
        ex_dividend: None,
        split_ratio: None,
        adj_open: None,
        adj_high: None,
        adj_low: None,
        adj_close: None,
        adj_volume: None,
    }
}

#[tokio::test]
async fn wiki_layout_fills_every_field() {
    let expected = StockBar {
        ex_dividend: Some(0.0),
        split_ratio: Some(1.0),
        adj_open: Some(540.02),
        adj_high: Some(541.5),
        adj_low: Some(535.12),
        adj_close: Some(537.46),
        adj_volume: Some(7_362_500.0),
        ..plain_bar(d(2014, 3, 27))
    };
    assert_eq!(
        first_point("WIKI", "AAPL").await,
        MarketDataPoint::Stock(expected)
    );
}

#[tokio::test]
async fn goog_layout_has_no_adjusted_fields() {
    assert_eq!(
        first_point("GOOG", "NASDAQ_AAPL").await,
        MarketDataPoint::Stock(plain_bar(d(2014, 3, 27)))
    );
}

#[tokio::test]
async fn yahoo_adjusted_close_is_not_read_as_dividend() {
    let expected = StockBar {
        adj_close: Some(76.78),
        ..plain_bar(d(2014, 3, 27))
    };
    assert_eq!(
        first_point("YAHOO", "AAPL").await,
        MarketDataPoint::Stock(expected)
    );
}

#[tokio::test]
async fn bcharts_layout_fills_every_field() {
    assert_eq!(
        first_point("BCHARTS", "BITSTAMPUSD").await,
        MarketDataPoint::Bitcoin(BitcoinBar {
            date: d(2014, 3, 27),
            open: Some(580.0),
            high: Some(590.5),
            low: Some(560.1),
            close: Some(575.25),
            volume_btc: Some(12345.5),
            volume_currency: Some(7_101_234.0),
            weighted_price: Some(577.3),
        })
    );
}
