//! Single-symbol fetch against the `GLOBAL_QUOTE` endpoint.
//!
//! [`try_fetch_quote`] is the plain fallible call. [`fetch_quote`] wraps it in
//! a [`QuoteOutcome`] and logs the failure, so batch code can keep or drop a
//! symbol by matching on a variant instead of handling errors.

use serde_json::Value;

use crate::core::{
    Quote, QuoteClient, SnapshotError,
    client::redact_url,
    net,
    wire::{GlobalQuoteEnvelope, extract_price},
};

/// Why a symbol produced no quote.
#[derive(Debug)]
pub enum AbsentReason {
    /// The provider answered with valid JSON that lacks a usable price.
    MissingPrice(String),
    /// The request failed: transport error, non-2xx status, or a body that is not JSON.
    Request(SnapshotError),
}

/// Result of one per-symbol fetch. Never an error.
#[derive(Debug)]
pub enum QuoteOutcome {
    Fetched(Quote),
    Absent { symbol: String, reason: AbsentReason },
}

impl QuoteOutcome {
    /// The quote, if the fetch succeeded.
    pub fn into_quote(self) -> Option<Quote> {
        match self {
            Self::Fetched(q) => Some(q),
            Self::Absent { .. } => None,
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }
}

/// Fetch one symbol and classify the result.
///
/// A missing price is logged as a warning, a failed request as an error.
/// Nothing is retried.
#[tracing::instrument(skip(client))]
pub async fn fetch_quote(client: &QuoteClient, symbol: &str) -> QuoteOutcome {
    match try_fetch_quote(client, symbol).await {
        Ok(q) => QuoteOutcome::Fetched(q),
        Err(SnapshotError::MissingPrice { detail, .. }) => {
            tracing::warn!(%symbol, %detail, "no price in quote response; skipping symbol");
            QuoteOutcome::Absent {
                symbol: symbol.to_string(),
                reason: AbsentReason::MissingPrice(detail),
            }
        }
        Err(e) => {
            tracing::error!(%symbol, error = %e, "quote request failed; skipping symbol");
            QuoteOutcome::Absent {
                symbol: symbol.to_string(),
                reason: AbsentReason::Request(e),
            }
        }
    }
}

/// Fetch one symbol's latest price.
///
/// The returned [`Quote`] reuses `symbol` as its `company name`.
///
/// # Errors
///
/// - [`SnapshotError::Http`] / [`SnapshotError::Status`] when the request fails.
/// - [`SnapshotError::Json`] when the body is not JSON.
/// - [`SnapshotError::MissingPrice`] when the JSON lacks `Global Quote` / `05. price`
///   or the price does not parse as a finite number.
pub async fn try_fetch_quote(client: &QuoteClient, symbol: &str) -> Result<Quote, SnapshotError> {
    let url = client.global_quote_url(symbol);
    tracing::debug!(url = %redact_url(&url), "requesting global quote");

    let resp = client
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await
        .map_err(|e| SnapshotError::Http(e.without_url()))?;
    let body = net::get_text(resp, &url).await?;

    let raw: Value = serde_json::from_str(&body)?;
    let price = serde_json::from_value::<GlobalQuoteEnvelope>(raw)
        .map_err(|e| format!("unexpected response shape: {e}"))
        .and_then(|env| extract_price(&env))
        .map_err(|detail| SnapshotError::MissingPrice {
            symbol: symbol.to_string(),
            detail,
        })?;

    Ok(Quote::new(symbol, price))
}
