//! Core components of the `quote-snapshot` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`QuoteClient`] and its builder.
//! - The primary [`SnapshotError`] type.
//! - Shared data models like [`Quote`], [`Snapshot`] and [`ArchiveDocument`].
//! - Internal networking and wire parsing.

/// The HTTP client (`QuoteClient`), builder, and configuration.
pub mod client;
/// The primary error type (`SnapshotError`) for the crate.
pub mod error;
/// Shared data models used across the fetch, aggregation and archive modules.
pub mod models;
pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::QuoteClient`
pub use client::{QuoteClient, QuoteClientBuilder};
pub use error::SnapshotError;
pub use models::{ArchiveDocument, Quote, Snapshot};
