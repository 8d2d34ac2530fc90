use std::path::{Path, PathBuf};

use crate::archive::{ArchiveLoad, load_archive, merge_snapshot, write_archive};
use crate::core::{ArchiveDocument, QuoteClient, SnapshotError};
use crate::snapshot::collect_snapshot;

/// Fetches one snapshot of quotes and merges it into a JSON archive file.
///
/// A collector is configured once with its API key, symbols, timestamp label
/// and target file, then run with [`collect_and_save`](Self::collect_and_save).
/// Running it never fails from the caller's point of view: request failures
/// drop the affected symbols, an unreadable archive is replaced, and a failed
/// write is logged.
///
/// Concurrent runs against the same file are not coordinated; the last
/// writer wins.
///
/// # Example
///
/// ```no_run
/// # use quote_snapshot::QuoteSnapshotCollector;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let collector = QuoteSnapshotCollector::new(
///     "demo",
///     ["AAPL", "MSFT"],
///     "2024-01-01T00:00:00Z",
///     "quotes.json",
/// )?;
/// collector.collect_and_save().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QuoteSnapshotCollector {
    client: QuoteClient,
    symbols: Vec<String>,
    timestamp_label: String,
    target_path: PathBuf,
}

impl QuoteSnapshotCollector {
    /// Creates a collector against the default provider endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if a symbol is empty or the HTTP client cannot be built.
    pub fn new<I, S>(
        api_key: impl Into<String>,
        symbols: I,
        timestamp_label: impl Into<String>,
        target_path: impl Into<PathBuf>,
    ) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::builder()
            .api_key(api_key)
            .symbols(symbols)
            .timestamp_label(timestamp_label)
            .target_path(target_path)
            .build()
    }

    pub fn builder() -> CollectorBuilder {
        CollectorBuilder::default()
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn timestamp_label(&self) -> &str {
        &self.timestamp_label
    }

    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Fetch all symbols, then merge the snapshot into the archive file.
    ///
    /// Completes once every fetch has resolved and the file has been written
    /// (or the write has failed and been logged). No error is returned.
    #[tracing::instrument(skip(self), fields(label = %self.timestamp_label, path = %self.target_path.display()))]
    pub async fn collect_and_save(&self) {
        let snapshot = collect_snapshot(&self.client, &self.symbols, &self.timestamp_label).await;

        let existing = match load_archive(&self.target_path) {
            ArchiveLoad::Parsed(doc) => doc,
            ArchiveLoad::Missing => {
                tracing::debug!("no archive yet; starting a new one");
                ArchiveDocument::new()
            }
            ArchiveLoad::Blank => ArchiveDocument::new(),
            ArchiveLoad::Malformed(e) => {
                tracing::error!(error = %e, "existing archive is unusable; it will be overwritten");
                ArchiveDocument::new()
            }
        };

        let merged = match merge_snapshot(existing, &snapshot) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::error!(error = %e, "could not merge snapshot; archive left untouched");
                return;
            }
        };

        match write_archive(&self.target_path, &merged) {
            Ok(()) => tracing::info!(
                quotes = snapshot.quotes.len(),
                snapshots = merged.len(),
                "archive written"
            ),
            Err(e) => tracing::error!(error = %e, "failed to write archive"),
        }
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`QuoteSnapshotCollector`].
///
/// `api_key` (or a prebuilt `client`), `timestamp_label` and `target_path`
/// are required.
#[derive(Default)]
pub struct CollectorBuilder {
    api_key: Option<String>,
    client: Option<QuoteClient>,
    symbols: Vec<String>,
    timestamp_label: Option<String>,
    target_path: Option<PathBuf>,
}

impl CollectorBuilder {
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Use a preconfigured client (custom endpoint, timeouts). Takes
    /// precedence over [`api_key`](Self::api_key).
    #[must_use]
    pub fn client(mut self, client: QuoteClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Set the symbols to query, replacing any set before.
    #[must_use]
    pub fn symbols<I, S>(mut self, syms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols = syms.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single symbol.
    #[must_use]
    pub fn add_symbol(mut self, sym: impl Into<String>) -> Self {
        self.symbols.push(sym.into());
        self
    }

    /// Archive key for this run. Treated as an opaque string.
    #[must_use]
    pub fn timestamp_label(mut self, label: impl Into<String>) -> Self {
        self.timestamp_label = Some(label.into());
        self
    }

    /// Label the run with the current UTC time, RFC 3339 with second precision
    /// (e.g. `2024-01-01T00:00:00Z`).
    #[must_use]
    pub fn timestamp_now(self) -> Self {
        let label = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        self.timestamp_label(label)
    }

    #[must_use]
    pub fn target_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.target_path = Some(path.into());
        self
    }

    /// # Errors
    ///
    /// Returns [`SnapshotError::InvalidParams`] if a required field is missing
    /// or a symbol is empty, and any error from building the HTTP client.
    pub fn build(self) -> Result<QuoteSnapshotCollector, SnapshotError> {
        if self.symbols.iter().any(|s| s.trim().is_empty()) {
            return Err(SnapshotError::InvalidParams("symbols must be non-empty".into()));
        }
        let timestamp_label = self
            .timestamp_label
            .ok_or_else(|| SnapshotError::InvalidParams("timestamp label is required".into()))?;
        let target_path = self
            .target_path
            .ok_or_else(|| SnapshotError::InvalidParams("target path is required".into()))?;
        let client = match (self.client, self.api_key) {
            (Some(c), _) => c,
            (None, Some(key)) => QuoteClient::new(key)?,
            (None, None) => {
                return Err(SnapshotError::InvalidParams(
                    "an api key or a client is required".into(),
                ));
            }
        };

        Ok(QuoteSnapshotCollector {
            client,
            symbols: self.symbols,
            timestamp_label,
            target_path,
        })
    }
}
