//! Per-data-source row mapping.
//!
//! Every data source lays its columns out differently, so rows are converted by a
//! [`RowMapper`] looked up by source code in a [`MapperRegistry`]. Supporting a new
//! source means registering a mapper, not touching the request pipeline.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use super::model::{BitcoinBar, CurrencyRate, MarketDataPoint, Observation, StockBar};
use crate::core::QdError;

/// Converts one raw data row (`[date, v1, v2, ...]`) into a [`MarketDataPoint`].
///
/// Returns `Ok(None)` for rows that carry a date but no values at all; those are
/// dropped from the result. Mappers must be pure.
pub trait RowMapper: Send + Sync {
    fn map_row(&self, row: &[Value]) -> Result<Option<MarketDataPoint>, QdError>;
}

impl<F> RowMapper for F
where
    F: Fn(&[Value]) -> Result<Option<MarketDataPoint>, QdError> + Send + Sync,
{
    fn map_row(&self, row: &[Value]) -> Result<Option<MarketDataPoint>, QdError> {
        self(row)
    }
}

/// Source code → mapper lookup. Codes are matched case-insensitively.
#[derive(Clone)]
pub struct MapperRegistry {
    mappers: BTreeMap<String, Arc<dyn RowMapper>>,
}

impl MapperRegistry {
    /// A registry with no mappers at all.
    pub fn empty() -> Self {
        Self {
            mappers: BTreeMap::new(),
        }
    }

    pub fn register(&mut self, code: impl Into<String>, mapper: impl RowMapper + 'static) {
        self.mappers
            .insert(code.into().to_ascii_uppercase(), Arc::new(mapper));
    }

    /// Looks up the mapper for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`QdError::UnsupportedDataSource`] if nothing is registered for it.
    pub fn get(&self, code: &str) -> Result<&dyn RowMapper, QdError> {
        self.mappers
            .get(&code.to_ascii_uppercase())
            .map(|m| &**m)
            .ok_or_else(|| QdError::UnsupportedDataSource(code.to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.mappers.keys().map(String::as_str)
    }
}

impl Default for MapperRegistry {
    fn default() -> Self {
        let mut r = Self::empty();
        r.register("WIKI", StockMapper::WIKI);
        r.register("GOOG", StockMapper::GOOG);
        r.register("YAHOO", StockMapper::YAHOO);
        r.register("CURRFX", CurrencyMapper);
        r.register("BCHARTS", BitcoinMapper);
        r.register("FRED", ValueMapper);
        r
    }
}

impl fmt::Debug for MapperRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.mappers.keys()).finish()
    }
}

/* ---------------- built-in mappers ---------------- */

/// Column layouts of the stock sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockLayout {
    /// `Date, Open, High, Low, Close, Volume, Ex-Dividend, Split Ratio, Adj. Open,
    /// Adj. High, Adj. Low, Adj. Close, Adj. Volume`
    Wiki,
    /// `Date, Open, High, Low, Close, Volume`
    Google,
    /// `Date, Open, High, Low, Close, Volume, Adjusted Close`
    Yahoo,
}

/// Maps stock rows by position according to a [`StockLayout`].
#[derive(Debug, Clone, Copy)]
pub struct StockMapper {
    layout: StockLayout,
}

impl StockMapper {
    pub const WIKI: Self = Self::new(StockLayout::Wiki);
    pub const GOOG: Self = Self::new(StockLayout::Google);
    pub const YAHOO: Self = Self::new(StockLayout::Yahoo);

    pub const fn new(layout: StockLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> StockLayout {
        self.layout
    }
}

impl RowMapper for StockMapper {
    fn map_row(&self, row: &[Value]) -> Result<Option<MarketDataPoint>, QdError> {
        let date = cell_date(row)?;
        let mut bar = StockBar {
            date,
            open: cell_f64(row, 1)?,
            high: cell_f64(row, 2)?,
            low: cell_f64(row, 3)?,
            close: cell_f64(row, 4)?,
            volume: cell_f64(row, 5)?,
            ex_dividend: None,
            split_ratio: None,
            adj_open: None,
            adj_high: None,
            adj_low: None,
            adj_close: None,
            adj_volume: None,
        };
        match self.layout {
            StockLayout::Wiki => {
                bar.ex_dividend = cell_f64(row, 6)?;
                bar.split_ratio = cell_f64(row, 7)?;
                bar.adj_open = cell_f64(row, 8)?;
                bar.adj_high = cell_f64(row, 9)?;
                bar.adj_low = cell_f64(row, 10)?;
                bar.adj_close = cell_f64(row, 11)?;
                bar.adj_volume = cell_f64(row, 12)?;
            }
            StockLayout::Google => {}
            StockLayout::Yahoo => bar.adj_close = cell_f64(row, 6)?,
        }

        let present = [
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume,
            bar.ex_dividend,
            bar.split_ratio,
            bar.adj_open,
            bar.adj_high,
            bar.adj_low,
            bar.adj_close,
            bar.adj_volume,
        ];
        Ok(any_present(&present).then_some(MarketDataPoint::Stock(bar)))
    }
}

/// `Date, Rate, High (est), Low (est)`
#[derive(Debug, Clone, Copy)]
pub struct CurrencyMapper;

impl RowMapper for CurrencyMapper {
    fn map_row(&self, row: &[Value]) -> Result<Option<MarketDataPoint>, QdError> {
        let date = cell_date(row)?;
        let v = values(row, 3)?;
        Ok(any_present(&v).then(|| {
            MarketDataPoint::Currency(CurrencyRate {
                date,
                rate: v[0],
                high_est: v[1],
                low_est: v[2],
            })
        }))
    }
}

/// `Date, Open, High, Low, Close, Volume (BTC), Volume (Currency), Weighted Price`
#[derive(Debug, Clone, Copy)]
pub struct BitcoinMapper;

impl RowMapper for BitcoinMapper {
    fn map_row(&self, row: &[Value]) -> Result<Option<MarketDataPoint>, QdError> {
        let date = cell_date(row)?;
        let v = values(row, 7)?;
        Ok(any_present(&v).then(|| {
            MarketDataPoint::Bitcoin(BitcoinBar {
                date,
                open: v[0],
                high: v[1],
                low: v[2],
                close: v[3],
                volume_btc: v[4],
                volume_currency: v[5],
                weighted_price: v[6],
            })
        }))
    }
}

/// `Date, Value`
#[derive(Debug, Clone, Copy)]
pub struct ValueMapper;

impl RowMapper for ValueMapper {
    fn map_row(&self, row: &[Value]) -> Result<Option<MarketDataPoint>, QdError> {
        let date = cell_date(row)?;
        let value = cell_f64(row, 1)?;
        Ok(value.map(|value| MarketDataPoint::Value(Observation { date, value: Some(value) })))
    }
}

/* ---------------- cell helpers ---------------- */

fn cell_date(row: &[Value]) -> Result<NaiveDate, QdError> {
    match row.first() {
        Some(Value::String(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| QdError::Parsing(format!("date `{s}`: {e}"))),
        Some(other) => Err(QdError::Parsing(format!("date cell is not a string: {other}"))),
        None => Err(QdError::Parsing("empty data row".into())),
    }
}

/// Numeric cell at `idx`; missing columns and JSON nulls are `None`.
fn cell_f64(row: &[Value], idx: usize) -> Result<Option<f64>, QdError> {
    match row.get(idx) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| QdError::Parsing(format!("column {idx}: {n} is not representable"))),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| QdError::Parsing(format!("column {idx}: `{s}`: {e}"))),
        Some(other) => Err(QdError::Parsing(format!(
            "column {idx}: unexpected value {other}"
        ))),
    }
}

/// The `n` value cells following the date.
fn values(row: &[Value], n: usize) -> Result<Vec<Option<f64>>, QdError> {
    (1..=n).map(|i| cell_f64(row, i)).collect()
}

fn any_present(v: &[Option<f64>]) -> bool {
    v.iter().any(Option::is_some)
}
