//! quandl-rs: ergonomic Quandl client.
//!
//! Four operations are exposed, both as builders/free functions and through the
//! [`QuandlProvider`] trait implemented by [`QdClient`]:
//!
//! - [`known_data_sources`]: the client's seeded catalog (no I/O).
//! - [`load_all_data_sources`]: the live catalog, scraped from the provider's HTML page.
//! - [`MarketDataBuilder`]: the rows of one dataset, mapped per data source.
//! - [`DatasetSearchBuilder`]: ticker search, or every ticker of one source.
//!
//! Every operation returns an [`OperationResult`]: `Success(payload)` or
//! `Failure(message)` for expected empty outcomes. Faults (network errors, garbage
//! payloads, unsupported data sources) are returned as `Err(QdError)`.
//!
//! ```no_run
//! use quandl_rs::{QdClientBuilder, QuandlProvider, MarketDataRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), quandl_rs::QdError> {
//! let client = QdClientBuilder::from_env().build()?;
//! let out = client.market_data(&MarketDataRequest::new("WIKI", "AAPL")).await?;
//! println!("succeeded: {}", out.succeeded());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod datasets;
pub mod market_data;
pub mod sources;

pub use crate::core::{
    CATALOG_UNAVAILABLE, DataSource, NO_DATA_FOUND, NO_MARKET_DATA, OperationResult,
    PagingOptions, QdClient, QdClientBuilder, QdError, QuandlProvider, TransportPolicy,
};
pub use datasets::{Dataset, DatasetSearchBuilder, TickerInfo, TickerQuery, search};
pub use market_data::mapper::{MapperRegistry, RowMapper};
pub use market_data::{
    BitcoinBar, CurrencyRate, MarketDataBuilder, MarketDataPoint, MarketDataRequest,
    Observation, RowSelection, SortOrder, StockBar, Timeframe, Transformation,
};
pub use sources::{LIVE_CATALOG_TRANSPORT_POLICY, known_data_sources, load_all_data_sources};
