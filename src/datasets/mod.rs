//! Ticker (dataset) search and per-source listings via `datasets.json`.

mod model;
mod wire;

pub use model::{Dataset, TickerInfo, TickerQuery};

use chrono::NaiveDate;
use url::Url;

use crate::core::net::{self, TransportPolicy, log_fault};
use crate::core::{DataSource, OperationResult, PagingOptions, QdClient, QdError};
use wire::{DocNode, SearchEnvelope, SourceNode};

/// Searches tickers by free text.
///
/// # Errors
///
/// Returns `QdError` if the response cannot be parsed. Transport failures come back as
/// `Failure`.
pub async fn search(client: &QdClient, query: &str) -> Result<OperationResult<Dataset>, QdError> {
    DatasetSearchBuilder::new(client, TickerQuery::Search(query.to_string()))
        .fetch()
        .await
}

/// A builder for searching tickers, or listing all tickers of one data source.
#[derive(Debug, Clone)]
pub struct DatasetSearchBuilder {
    client: QdClient,
    query: TickerQuery,
    paging: PagingOptions,
}

impl DatasetSearchBuilder {
    /// Transport failures are reported as `Failure` for this operation.
    pub const TRANSPORT_POLICY: TransportPolicy = TransportPolicy::Failure;

    pub fn new(client: &QdClient, query: TickerQuery) -> Self {
        Self {
            client: client.clone(),
            query,
            paging: PagingOptions::default(),
        }
    }

    /// Sets the page size and page number.
    pub fn paging(mut self, paging: PagingOptions) -> Self {
        self.paging = paging;
        self
    }

    pub fn per_page(mut self, n: u32) -> Self {
        self.paging.per_page = n;
        self
    }

    pub fn page(mut self, n: u32) -> Self {
        self.paging.page = n;
        self
    }

    /// Executes the search.
    ///
    /// In search mode the returned `total_count` is the number of tickers on this page.
    ///
    /// # Errors
    ///
    /// Returns `QdError` (after logging it) if the body is not valid search JSON.
    pub async fn fetch(self) -> Result<OperationResult<Dataset>, QdError> {
        let url = self.build_url()?;

        let body = match net::get_text(&self.client, &url, "application/json").await {
            Ok(body) => body,
            Err(e) => return Self::TRANSPORT_POLICY.resolve(log_fault("tickers", e)),
        };

        let env: SearchEnvelope =
            serde_json::from_str(&body).map_err(|e| log_fault("tickers", e.into()))?;
        let mut data = map_dataset(env);

        if self.query.is_search() {
            data.total_count = data.tickers.len() as u64;
        }

        Ok(OperationResult::Success(data))
    }

    fn build_url(&self) -> Result<Url, QdError> {
        let mut url = self
            .client
            .base_search()
            .join("datasets.json")
            .map_err(|e| log_fault("tickers", e.into()))?;
        {
            let mut qp = url.query_pairs_mut();
            match &self.query {
                TickerQuery::Search(text) => {
                    qp.append_pair("query", text);
                }
                TickerQuery::Source(code) => {
                    qp.append_pair("query", "*");
                    qp.append_pair("source_code", code);
                }
            }
            qp.append_pair("per_page", &self.paging.per_page.to_string());
            qp.append_pair("page", &self.paging.page.to_string());
        }
        self.client.append_auth_token(&mut url);
        Ok(url)
    }
}

/// Flattens the provider's search payload into a [`Dataset`].
pub(crate) fn map_dataset(env: SearchEnvelope) -> Dataset {
    let tickers: Vec<TickerInfo> = env.docs.into_iter().map(map_doc).collect();
    Dataset {
        total_count: env.total_count.unwrap_or(tickers.len() as u64),
        current_page: env.current_page.unwrap_or(1),
        per_page: env.per_page.unwrap_or(tickers.len() as u32),
        sources: env.sources.into_iter().map(map_source).collect(),
        tickers,
    }
}

fn map_doc(d: DocNode) -> TickerInfo {
    TickerInfo {
        source_code: d.source_code.unwrap_or_default(),
        code: d.code.unwrap_or_default(),
        name: d.name.unwrap_or_default(),
        description: d.description.filter(|s| !s.is_empty()),
        frequency: d.frequency,
        from_date: d.from_date.as_deref().and_then(parse_date),
        to_date: d.to_date.as_deref().and_then(parse_date),
        column_names: d.column_names,
    }
}

fn map_source(s: SourceNode) -> DataSource {
    DataSource {
        name: s.name.unwrap_or_default(),
        count: s.datasets_count.unwrap_or_default(),
        description: s.description.unwrap_or_default(),
        code: s.code.unwrap_or_default(),
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
