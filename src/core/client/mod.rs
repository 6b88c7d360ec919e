//! Public client surface + builder.
//! Internals are split into `auth` (API token handling) and `constants` (UA + defaults).

mod auth;
mod constants;

pub(crate) use auth::redact_url;

use crate::core::models::DataSource;
use crate::core::QdError;
use crate::market_data::mapper::{MapperRegistry, RowMapper};
use constants::{
    AUTH_TOKEN_ENV, DEFAULT_BASE_QUERY, DEFAULT_BASE_SEARCH, DEFAULT_SOURCES_PAGE, SEED_CATALOG,
    USER_AGENT,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// A configured connection to the Quandl API.
///
/// The client carries everything an operation needs: the HTTP connection pool, the three
/// provider endpoints, the optional auth token, the seeded catalog of known data sources and
/// the registry of per-source row mappers. It holds no mutable state, so clones are cheap
/// and can be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct QdClient {
    http: Client,
    base_query: Url,
    base_search: Url,
    sources_page: Url,
    auth_token: Option<String>,
    data_sources: Arc<[DataSource]>,
    mappers: Arc<MapperRegistry>,
}

impl Default for QdClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl QdClient {
    /// Create a new builder.
    pub fn builder() -> QdClientBuilder {
        QdClientBuilder::default()
    }

    /// The catalog of data sources this client was seeded with.
    pub fn seeded_data_sources(&self) -> &[DataSource] {
        &self.data_sources
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_query(&self) -> &Url {
        &self.base_query
    }
    pub(crate) fn base_search(&self) -> &Url {
        &self.base_search
    }
    pub(crate) fn sources_page(&self) -> &Url {
        &self.sources_page
    }
    pub(crate) fn mappers(&self) -> &MapperRegistry {
        &self.mappers
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`QdClient`]. Every field has a working default except the auth token,
/// which Quandl only needs beyond the anonymous request quota.
pub struct QdClientBuilder {
    user_agent: Option<String>,
    base_query: Option<Url>,
    base_search: Option<Url>,
    sources_page: Option<Url>,
    auth_token: Option<String>,
    data_sources: Option<Vec<DataSource>>,
    mappers: MapperRegistry,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl Default for QdClientBuilder {
    fn default() -> Self {
        Self {
            user_agent: None,
            base_query: None,
            base_search: None,
            sources_page: None,
            auth_token: None,
            data_sources: None,
            mappers: MapperRegistry::default(),
            timeout: None,
            connect_timeout: None,
        }
    }
}

impl QdClientBuilder {
    /// Starts a builder with the auth token taken from `QUANDL_AUTH_TOKEN`, if set.
    pub fn from_env() -> Self {
        let token = std::env::var(AUTH_TOKEN_ENV)
            .ok()
            .filter(|t| !t.trim().is_empty());
        Self {
            auth_token: token,
            ..Self::default()
        }
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the datasets API base (e.g., `https://www.quandl.com/api/v1/datasets/`).
    pub fn base_query(mut self, url: Url) -> Self {
        self.base_query = Some(url);
        self
    }

    /// Override the search API root (e.g., `https://www.quandl.com/api/v1/`).
    pub fn base_search(mut self, url: Url) -> Self {
        self.base_search = Some(url);
        self
    }

    /// Override the HTML page scraped by the live data-source catalog.
    pub fn sources_page(mut self, url: Url) -> Self {
        self.sources_page = Some(url);
        self
    }

    /// Set the API auth token sent as `auth_token` on every API request.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Replace the seeded catalog of known data sources.
    pub fn data_sources(mut self, sources: Vec<DataSource>) -> Self {
        self.data_sources = Some(sources);
        self
    }

    /// Replace the seeded catalog from a JSON array of data sources.
    pub fn data_sources_json(self, json: &str) -> Result<Self, QdError> {
        let sources: Vec<DataSource> = serde_json::from_str(json)?;
        Ok(self.data_sources(sources))
    }

    /// Register (or replace) the row mapper used for a data source code.
    pub fn register_mapper(
        mut self,
        code: impl Into<String>,
        mapper: impl RowMapper + 'static,
    ) -> Self {
        self.mappers.register(code, mapper);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<QdClient, QdError> {
        let base_query = directory_url(self.base_query, DEFAULT_BASE_QUERY)?;
        let base_search = directory_url(self.base_search, DEFAULT_BASE_SEARCH)?;
        let sources_page = match self.sources_page {
            Some(u) => u,
            None => Url::parse(DEFAULT_SOURCES_PAGE)?,
        };

        if let Some(token) = &self.auth_token
            && token.trim().is_empty()
        {
            return Err(QdError::Config("auth token is empty".into()));
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        let data_sources = self.data_sources.unwrap_or_else(seed_catalog);

        Ok(QdClient {
            http,
            base_query,
            base_search,
            sources_page,
            auth_token: self.auth_token,
            data_sources: data_sources.into(),
            mappers: Arc::new(self.mappers),
        })
    }
}

/// Resolves a base URL that relative paths are joined onto; it must end in `/`
/// or `Url::join` would replace its last segment.
fn directory_url(url: Option<Url>, default: &str) -> Result<Url, QdError> {
    let mut url = match url {
        Some(u) => u,
        None => Url::parse(default)?,
    };
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn seed_catalog() -> Vec<DataSource> {
    SEED_CATALOG
        .iter()
        .map(|(code, name, description)| DataSource::new(*name, 0, *description, *code))
        .collect()
}
