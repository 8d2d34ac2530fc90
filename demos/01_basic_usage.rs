use std::time::Duration;

use quote_snapshot::{QuoteClient, QuoteSnapshotCollector, archive};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let api_key = std::env::var("ALPHAVANTAGE_API_KEY").unwrap_or_else(|_| "demo".to_string());
    let path = std::env::temp_dir().join("quote_snapshot_demo.json");

    // 1. A client with a 10-second timeout; the collector itself enforces none.
    let client = QuoteClient::builder()
        .api_key(api_key)
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. One snapshot for three symbols, labeled with the current UTC time.
    let collector = QuoteSnapshotCollector::builder()
        .client(client)
        .symbols(["IBM", "AAPL", "MSFT"])
        .timestamp_now()
        .target_path(&path)
        .build()?;

    println!(
        "--- Collecting {} symbols under {} ---",
        collector.symbols().len(),
        collector.timestamp_label()
    );
    collector.collect_and_save().await;

    // 3. Show what ended up on disk.
    let doc = archive::load_archive(&path).into_document();
    println!("{} holds {} snapshot(s):", path.display(), doc.len());
    println!("{}", archive::render_archive(&doc)?);

    Ok(())
}
