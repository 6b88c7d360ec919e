//! Data-source catalogs: the client's seeded list, and the live list scraped from the
//! provider's catalog page.

pub(crate) mod scrape;

use crate::core::net::{self, TransportPolicy, log_fault};
use crate::core::{
    CATALOG_UNAVAILABLE, DataSource, NO_DATA_FOUND, OperationResult, QdClient, QdError,
};
use scrape::{CatalogScrape, parse_catalog};

/// Transport failures while loading the catalog page are faults.
pub const LIVE_CATALOG_TRANSPORT_POLICY: TransportPolicy = TransportPolicy::Fault;

/// Returns the catalog the client was seeded with. Performs no I/O.
pub fn known_data_sources(client: &QdClient) -> OperationResult<Vec<DataSource>> {
    let sources = client.seeded_data_sources();
    if sources.is_empty() {
        return OperationResult::failure(NO_DATA_FOUND);
    }
    OperationResult::Success(sources.to_vec())
}

/// Scrapes every financial data source listed on the provider's catalog page.
///
/// Returns `Failure` if the page no longer has the financial-data section, or if that
/// section's table has no data rows.
///
/// # Errors
///
/// Network errors, non-2xx statuses and rows that cannot be read are returned as
/// `QdError`, after being logged.
pub async fn load_all_data_sources(
    client: &QdClient,
) -> Result<OperationResult<Vec<DataSource>>, QdError> {
    let url = client.sources_page();
    let body = match net::get_text(client, url, "text/html").await {
        Ok(body) => body,
        Err(e) => return LIVE_CATALOG_TRANSPORT_POLICY.resolve(log_fault("all_data_sources", e)),
    };

    match parse_catalog(&body).map_err(|e| log_fault("all_data_sources", e))? {
        CatalogScrape::AnchorMissing => {
            tracing::warn!(anchor = scrape::ANCHOR_ID, "catalog anchor not found");
            Ok(OperationResult::failure(CATALOG_UNAVAILABLE))
        }
        CatalogScrape::Rows(rows) if rows.is_empty() => Ok(OperationResult::failure(NO_DATA_FOUND)),
        CatalogScrape::Rows(rows) => Ok(OperationResult::Success(rows)),
    }
}
