//! Centralized constants for default endpoints, UA and the seeded catalog.

/// Default desktop UA; the catalog page is served to browsers.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Quandl datasets API base (`{source}/{ticker}.json` is appended).
pub(crate) const DEFAULT_BASE_QUERY: &str = "https://www.quandl.com/api/v1/datasets/";

/// Quandl API root for dataset search (`datasets.json` is appended).
pub(crate) const DEFAULT_BASE_SEARCH: &str = "https://www.quandl.com/api/v1/";

/// HTML page listing every data source the provider offers.
pub(crate) const DEFAULT_SOURCES_PAGE: &str = "https://www.quandl.com/resources/data-sources";

/// Environment variable read by [`QdClientBuilder::from_env`](super::QdClientBuilder::from_env).
pub(crate) const AUTH_TOKEN_ENV: &str = "QUANDL_AUTH_TOKEN";

/// `(code, name, description)` for the data sources the default mapper registry understands.
/// Dataset counts are unknown until the live catalog is scraped.
pub(crate) const SEED_CATALOG: &[(&str, &str, &str)] = &[
    (
        "WIKI",
        "Wiki EOD Stock Prices",
        "End of day stock prices, dividends and splits for US companies.",
    ),
    (
        "GOOG",
        "Google Finance",
        "Daily stock prices from Google Finance.",
    ),
    (
        "YAHOO",
        "Yahoo Finance",
        "Daily stock and index prices from Yahoo Finance.",
    ),
    (
        "CURRFX",
        "Currency Exchange Rates",
        "Daily exchange rates for major and minor currency pairs.",
    ),
    (
        "BCHARTS",
        "Bitcoin Charts Exchange Rate Data",
        "Bitcoin exchange rates against major currencies, per exchange.",
    ),
    (
        "FRED",
        "Federal Reserve Economic Data",
        "US and international economic time series from the St. Louis Fed.",
    ),
];
