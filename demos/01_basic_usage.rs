use chrono::{Duration, Utc};
use quandl_rs::{
    MarketDataBuilder, OperationResult, PagingOptions, QdClientBuilder, QuandlProvider,
    TickerQuery, Timeframe, load_all_data_sources,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Build a client; the token comes from QUANDL_AUTH_TOKEN when set.
    let client = QdClientBuilder::from_env()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    // 2. The seeded catalog needs no network.
    println!("--- Known data sources ---");
    if let Some(sources) = client.data_sources().payload() {
        for ds in sources {
            println!("  {:<8} {}", ds.code, ds.name);
        }
    }
    println!();

    // 3. The live catalog is scraped from the provider's site.
    println!("--- Live catalog ---");
    match load_all_data_sources(&client).await? {
        OperationResult::Success(sources) => {
            for ds in sources.iter().take(10) {
                println!("  {:<8} {:>8} datasets  {}", ds.code, ds.count, ds.name);
            }
        }
        OperationResult::Failure(msg) => println!("  unavailable: {msg}"),
    }
    println!();

    // 4. Weekly closes for the last three months.
    let today = Utc::now().date_naive();
    let out = MarketDataBuilder::new(&client, "WIKI", "AAPL")
        .between(today - Duration::days(90), today)
        .timeframe(Timeframe::Weekly)
        .fetch()
        .await?;
    println!("--- WIKI/AAPL weekly ---");
    match out {
        OperationResult::Success(points) => {
            for p in points {
                println!("  {:?}", p);
            }
        }
        OperationResult::Failure(msg) => println!("  {msg}"),
    }
    println!();

    // 5. Search tickers.
    println!("--- Search: crude oil ---");
    let found = client
        .tickers(&TickerQuery::new("crude oil", true), PagingOptions::new(5, 1))
        .await?;
    match found {
        OperationResult::Success(ds) => {
            for t in ds.tickers {
                println!("  {:<24} {}", t.quandl_code(), t.name);
            }
        }
        OperationResult::Failure(msg) => println!("  search failed: {msg}"),
    }

    Ok(())
}
