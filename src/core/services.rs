use futures::future::BoxFuture;

use crate::core::{DataSource, OperationResult, PagingOptions, QdClient, QdError};
use crate::datasets::{Dataset, DatasetSearchBuilder, TickerQuery};
use crate::market_data::{MarketDataBuilder, MarketDataPoint, MarketDataRequest};
use crate::sources;

/// The four provider operations behind one seam.
///
/// Implemented by [`QdClient`]. Code that consumes market data can depend on this trait
/// and substitute a stub in tests.
pub trait QuandlProvider: Send + Sync {
    /// Lists the pre-seeded catalog of data sources. Performs no I/O.
    fn data_sources(&self) -> OperationResult<Vec<DataSource>>;

    /// Scrapes the live catalog page for every financial data source.
    fn all_data_sources(&self)
    -> BoxFuture<'_, Result<OperationResult<Vec<DataSource>>, QdError>>;

    /// Fetches the rows of one dataset.
    fn market_data<'a>(
        &'a self,
        request: &'a MarketDataRequest,
    ) -> BoxFuture<'a, Result<OperationResult<Vec<MarketDataPoint>>, QdError>>;

    /// Searches tickers, or lists the tickers of one data source.
    fn tickers<'a>(
        &'a self,
        query: &'a TickerQuery,
        paging: PagingOptions,
    ) -> BoxFuture<'a, Result<OperationResult<Dataset>, QdError>>;
}

impl QuandlProvider for QdClient {
    fn data_sources(&self) -> OperationResult<Vec<DataSource>> {
        sources::known_data_sources(self)
    }

    fn all_data_sources(
        &self,
    ) -> BoxFuture<'_, Result<OperationResult<Vec<DataSource>>, QdError>> {
        Box::pin(sources::load_all_data_sources(self))
    }

    fn market_data<'a>(
        &'a self,
        request: &'a MarketDataRequest,
    ) -> BoxFuture<'a, Result<OperationResult<Vec<MarketDataPoint>>, QdError>> {
        Box::pin(MarketDataBuilder::from_request(self, request.clone()).fetch())
    }

    fn tickers<'a>(
        &'a self,
        query: &'a TickerQuery,
        paging: PagingOptions,
    ) -> BoxFuture<'a, Result<OperationResult<Dataset>, QdError>> {
        Box::pin(
            DatasetSearchBuilder::new(self, query.clone())
                .paging(paging)
                .fetch(),
        )
    }
}
