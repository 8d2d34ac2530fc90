//! Load, merge and persist the on-disk archive.
//!
//! The archive is a single JSON object mapping timestamp labels to quote
//! arrays. Reads and writes are plain blocking `std::fs` calls, and nothing
//! guards the read-merge-write sequence: two runs against the same file at
//! the same time can lose one run's snapshot.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::core::{ArchiveDocument, Snapshot, SnapshotError};

/// What was found at the archive path.
#[derive(Debug)]
pub enum ArchiveLoad {
    /// No file at the path.
    Missing,
    /// The file exists but is empty or whitespace.
    Blank,
    /// A JSON object.
    Parsed(ArchiveDocument),
    /// Unreadable, not JSON, or JSON that is not an object.
    Malformed(SnapshotError),
}

impl ArchiveLoad {
    /// The document to merge into. Anything but [`ArchiveLoad::Parsed`] is empty.
    pub fn into_document(self) -> ArchiveDocument {
        match self {
            Self::Parsed(doc) => doc,
            Self::Missing | Self::Blank | Self::Malformed(_) => ArchiveDocument::new(),
        }
    }
}

/// Read and classify the archive at `path`.
pub fn load_archive(path: impl AsRef<Path>) -> ArchiveLoad {
    let text = match std::fs::read_to_string(path.as_ref()) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => return ArchiveLoad::Missing,
        Err(e) => return ArchiveLoad::Malformed(e.into()),
    };
    parse_archive(&text)
}

/// Classify archive text without touching the filesystem.
pub fn parse_archive(text: &str) -> ArchiveLoad {
    if text.trim().is_empty() {
        return ArchiveLoad::Blank;
    }
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(doc)) => ArchiveLoad::Parsed(doc),
        Ok(other) => ArchiveLoad::Malformed(SnapshotError::Archive(format!(
            "archive top level must be a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => ArchiveLoad::Malformed(e.into()),
    }
}

/// Overlay `snapshot` onto `doc`.
///
/// The snapshot's label replaces any existing value under that key; every
/// other key is left as it was. A new label goes at the end.
///
/// # Errors
///
/// Propagates a failure to convert the snapshot's quotes to JSON.
pub fn merge_snapshot(
    mut doc: ArchiveDocument,
    snapshot: &Snapshot,
) -> Result<ArchiveDocument, SnapshotError> {
    let (label, quotes) = snapshot.to_entry()?;
    doc.insert(label, quotes);
    Ok(doc)
}

/// Render `doc` the way it is stored: pretty JSON with two-space indents.
///
/// # Errors
///
/// Returns [`SnapshotError::Json`] if serialization fails.
pub fn render_archive(doc: &ArchiveDocument) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(doc)?)
}

/// Replace the file at `path` with `doc` in one write.
///
/// # Errors
///
/// Returns [`SnapshotError::Io`] if the write fails, [`SnapshotError::Json`]
/// if rendering does.
pub fn write_archive(path: impl AsRef<Path>, doc: &ArchiveDocument) -> Result<(), SnapshotError> {
    let text = render_archive(doc)?;
    std::fs::write(path.as_ref(), text)?;
    Ok(())
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
