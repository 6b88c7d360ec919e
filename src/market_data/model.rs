use chrono::NaiveDate;
use serde::Serialize;

/// A single dated observation. The variant depends on the data source's column layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MarketDataPoint {
    /// End-of-day equity prices (WIKI, GOOG, YAHOO).
    Stock(StockBar),
    /// Exchange rate quotes (CURRFX).
    Currency(CurrencyRate),
    /// Per-exchange bitcoin prices (BCHARTS).
    Bitcoin(BitcoinBar),
    /// A single value per date (FRED, or any single-column request).
    Value(Observation),
}

impl MarketDataPoint {
    pub fn date(&self) -> NaiveDate {
        match self {
            MarketDataPoint::Stock(b) => b.date,
            MarketDataPoint::Currency(r) => r.date,
            MarketDataPoint::Bitcoin(b) => b.date,
            MarketDataPoint::Value(o) => o.date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
    /// Only present in WIKI-style layouts; YAHOO fills `adj_close` alone.
    pub ex_dividend: Option<f64>,
    pub split_ratio: Option<f64>,
    pub adj_open: Option<f64>,
    pub adj_high: Option<f64>,
    pub adj_low: Option<f64>,
    pub adj_close: Option<f64>,
    pub adj_volume: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyRate {
    pub date: NaiveDate,
    pub rate: Option<f64>,
    pub high_est: Option<f64>,
    pub low_est: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BitcoinBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume_btc: Option<f64>,
    pub volume_currency: Option<f64>,
    pub weighted_price: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub value: Option<f64>,
}
