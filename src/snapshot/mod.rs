use futures::future::join_all;

use crate::core::{QuoteClient, Snapshot};
use crate::quote::{QuoteOutcome, fetch_quote};

/// Fetch every symbol concurrently and gather the survivors under `label`.
///
/// All requests are in flight at once (no cap) and the call returns only after
/// each one has resolved. Quotes come back in `symbols` order regardless of
/// which response arrived first; symbols whose fetch came back
/// [`QuoteOutcome::Absent`] are left out. If every fetch fails the snapshot is
/// still returned, with an empty quote list.
#[tracing::instrument(skip(client, symbols), fields(count = symbols.len()))]
pub async fn collect_snapshot<S>(client: &QuoteClient, symbols: &[S], label: &str) -> Snapshot
where
    S: AsRef<str>,
{
    let outcomes = join_all(symbols.iter().map(|s| fetch_quote(client, s.as_ref()))).await;
    snapshot_from_outcomes(label, outcomes)
}

/// Drop absent outcomes, keeping the order of the rest.
pub(crate) fn snapshot_from_outcomes(label: &str, outcomes: Vec<QuoteOutcome>) -> Snapshot {
    let requested = outcomes.len();
    let quotes: Vec<_> = outcomes
        .into_iter()
        .filter_map(QuoteOutcome::into_quote)
        .collect();

    tracing::info!(
        %label,
        requested,
        fetched = quotes.len(),
        skipped = requested - quotes.len(),
        "snapshot assembled"
    );

    Snapshot::new(label, quotes)
}
