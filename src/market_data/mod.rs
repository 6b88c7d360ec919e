//! Time-series market data for a single dataset (`{source}/{ticker}.json`).

pub mod mapper;
mod model;
mod params;
mod wire;

pub use model::{BitcoinBar, CurrencyRate, MarketDataPoint, Observation, StockBar};
pub use params::{RowSelection, SortOrder, Timeframe, Transformation};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::net::{self, TransportPolicy, log_fault};
use crate::core::{NO_DATA_FOUND, NO_MARKET_DATA, OperationResult, QdClient, QdError};
use mapper::{RowMapper, ValueMapper};
use params::format_date;
use wire::DatasetEnvelope;

/// Everything that describes one market-data query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDataRequest {
    /// Data source code, e.g. `WIKI`.
    pub data_source: String,
    /// Dataset code within the source, e.g. `AAPL`.
    pub ticker: String,
    pub sort_order: SortOrder,
    /// Ask the provider to leave column headers out of the response.
    pub exclude_headers: bool,
    pub selection: RowSelection,
    /// Restrict the response to a single column (1-based, the date is always included).
    pub column: Option<u32>,
    pub timeframe: Timeframe,
    pub transformation: Transformation,
}

impl MarketDataRequest {
    /// A request for the latest rows of `data_source/ticker` with provider defaults.
    pub fn new(data_source: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self {
            data_source: data_source.into(),
            ticker: ticker.into(),
            sort_order: SortOrder::default(),
            exclude_headers: false,
            selection: RowSelection::default(),
            column: None,
            timeframe: Timeframe::default(),
            transformation: Transformation::default(),
        }
    }

    /// Builds the request URL under `base`, without the auth token.
    pub(crate) fn to_url(&self, base: &Url) -> Result<Url, QdError> {
        if self.data_source.is_empty() || self.ticker.is_empty() {
            return Err(QdError::Config(
                "data source and ticker must not be empty".into(),
            ));
        }

        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| QdError::Config(format!("cannot extend base URL {base}")))?
            .pop_if_empty()
            .push(&self.data_source)
            .push(&format!("{}.json", self.ticker));
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("sort_order", self.sort_order.as_str());
            qp.append_pair(
                "exclude_headers",
                if self.exclude_headers { "true" } else { "false" },
            );

            match self.selection {
                RowSelection::Rows(n) => {
                    qp.append_pair("rows", &n.to_string());
                }
                RowSelection::DateRange { from, to } => {
                    qp.append_pair("trim_start", &format_date(from));
                    qp.append_pair("trim_end", &format_date(to));
                }
            }

            if let Some(c) = self.column {
                qp.append_pair("column", &c.to_string());
            }

            qp.append_pair("collapse", self.timeframe.as_str());
            qp.append_pair("transformation", self.transformation.as_str());
        }
        Ok(url)
    }
}

/// A builder for fetching the rows of one dataset.
///
/// ```no_run
/// # use quandl_rs::{MarketDataBuilder, QdClient, Timeframe};
/// # #[tokio::main]
/// # async fn main() -> Result<(), quandl_rs::QdError> {
/// let client = QdClient::builder().auth_token("my-token").build()?;
/// let out = MarketDataBuilder::new(&client, "WIKI", "AAPL")
///     .rows(30)
///     .timeframe(Timeframe::Weekly)
///     .fetch()
///     .await?;
/// match out.payload() {
///     Some(points) => println!("{} points", points.len()),
///     None => println!("nothing: {}", out.message().unwrap_or_default()),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarketDataBuilder {
    client: QdClient,
    request: MarketDataRequest,
}

impl MarketDataBuilder {
    /// Transport failures are faults for this operation.
    pub const TRANSPORT_POLICY: TransportPolicy = TransportPolicy::Fault;

    /// Creates a new `MarketDataBuilder` for `data_source/ticker`.
    pub fn new(client: &QdClient, data_source: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self::from_request(client, MarketDataRequest::new(data_source, ticker))
    }

    /// Creates a builder from a fully specified request.
    pub fn from_request(client: &QdClient, request: MarketDataRequest) -> Self {
        Self {
            client: client.clone(),
            request,
        }
    }

    pub fn request(&self) -> &MarketDataRequest {
        &self.request
    }

    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.request.sort_order = order;
        self
    }

    pub fn exclude_headers(mut self, yes: bool) -> Self {
        self.request.exclude_headers = yes;
        self
    }

    /// Return the latest `n` rows. Overrides any previous `between()`.
    pub fn rows(mut self, n: u32) -> Self {
        self.request.selection = RowSelection::Rows(n);
        self
    }

    /// Return rows dated `from..=to`. Overrides any previous `rows()`.
    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.request.selection = RowSelection::DateRange { from, to };
        self
    }

    /// Restrict the response to one column; rows are then mapped as plain observations.
    pub fn column(mut self, column: u32) -> Self {
        self.request.column = Some(column);
        self
    }

    pub fn timeframe(mut self, timeframe: Timeframe) -> Self {
        self.request.timeframe = timeframe;
        self
    }

    pub fn transformation(mut self, transformation: Transformation) -> Self {
        self.request.transformation = transformation;
        self
    }

    /// Executes the request.
    ///
    /// Returns `Failure` when the dataset has no columns or rows, or when none of its rows
    /// carried a value.
    ///
    /// # Errors
    ///
    /// Transport failures, malformed JSON, unparseable rows and data sources without a
    /// registered mapper are returned as `QdError`, after being logged.
    pub async fn fetch(self) -> Result<OperationResult<Vec<MarketDataPoint>>, QdError> {
        self.fetch_inner()
            .await
            .map_err(|e| log_fault("market_data", e))
    }

    async fn fetch_inner(self) -> Result<OperationResult<Vec<MarketDataPoint>>, QdError> {
        let mut url = self.request.to_url(self.client.base_query())?;
        self.client.append_auth_token(&mut url);

        let body = match net::get_text(&self.client, &url, "application/json").await {
            Ok(body) => body,
            Err(e) => return Self::TRANSPORT_POLICY.resolve(e),
        };

        let env: DatasetEnvelope = serde_json::from_str(&body)?;
        map_market_data(&self.client, &self.request, env)
    }
}

/// Maps a decoded dataset payload into points, in row order.
fn map_market_data(
    client: &QdClient,
    request: &MarketDataRequest,
    env: DatasetEnvelope,
) -> Result<OperationResult<Vec<MarketDataPoint>>, QdError> {
    if env.data.is_empty() || env.column_names.is_empty() {
        return Ok(OperationResult::failure(NO_MARKET_DATA));
    }

    // An unknown source is rejected even for single-column requests.
    let source_mapper = client.mappers().get(&request.data_source)?;
    let mapper: &dyn RowMapper = if request.column.is_some() {
        &ValueMapper
    } else {
        source_mapper
    };

    let mut points = Vec::with_capacity(env.data.len());
    for row in &env.data {
        if let Some(p) = mapper.map_row(row)? {
            points.push(p);
        }
    }

    if points.is_empty() {
        return Ok(OperationResult::failure(NO_DATA_FOUND));
    }
    Ok(OperationResult::Success(points))
}
