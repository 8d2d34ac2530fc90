use std::time::Duration;

use quote_snapshot::{QuoteClient, quote, snapshot};

// Collects a few snapshots in memory without touching the archive, printing
// which symbols were dropped each round.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ALPHAVANTAGE_API_KEY").unwrap_or_else(|_| "demo".to_string());
    let client = QuoteClient::new(api_key)?;
    let symbols = ["IBM", "NOT-A-TICKER"];

    for round in 1..=3 {
        let label = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        let snap = snapshot::collect_snapshot(&client, &symbols, &label).await;
        println!("round {round} @ {}: {} quote(s)", snap.label, snap.quotes.len());
        for q in &snap.quotes {
            println!("  {:<8} {:>10.4}", q.symbol_name, q.price);
        }

        // The single-symbol call exposes why a symbol was skipped.
        if let Err(e) = quote::try_fetch_quote(&client, symbols[1]).await {
            println!("  {} skipped: {e}", symbols[1]);
        }

        tokio::time::sleep(Duration::from_secs(15)).await;
    }

    Ok(())
}
