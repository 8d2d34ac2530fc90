//! quote-snapshot: periodic stock quote snapshots into a JSON archive.
//!
//! A [`QuoteSnapshotCollector`] fetches the latest price for each configured
//! symbol from Alpha Vantage's `GLOBAL_QUOTE` function, groups the successful
//! quotes under a caller-supplied timestamp label, and merges that entry into
//! a JSON file keyed by label:
//!
//! ```json
//! {
//!   "2024-01-01T00:00:00Z": [
//!     { "company name": "AAPL", "price": 180.25 }
//!   ]
//! }
//! ```
//!
//! Failures never reach the caller. A symbol whose request fails or whose
//! response has no price is left out of the snapshot; an archive that cannot
//! be parsed is replaced. Both are reported through `tracing`.
//!
//! The pieces are public for callers that want a different policy:
//! [`quote::try_fetch_quote`] / [`quote::fetch_quote`] for one symbol,
//! [`snapshot::collect_snapshot`] for the concurrent batch, and the
//! [`archive`] functions for loading, merging and writing the file.

pub mod archive;
pub mod collector;
pub mod core;
pub mod quote;
pub mod snapshot;

pub use archive::ArchiveLoad;
pub use collector::{CollectorBuilder, QuoteSnapshotCollector};
pub use crate::core::{ArchiveDocument, Quote, QuoteClient, QuoteClientBuilder, Snapshot, SnapshotError};
pub use quote::{AbsentReason, QuoteOutcome};
