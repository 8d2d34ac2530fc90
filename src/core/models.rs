use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The persisted archive: timestamp label -> snapshot quotes.
///
/// Values are kept as raw JSON so entries written by older runs (or by hand)
/// pass through a merge untouched. Key order is preserved.
pub type ArchiveDocument = Map<String, Value>;

/* ----- QUOTES ----- */

/// One symbol's price at collection time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The requested ticker symbol, stored under the `company name` key.
    #[serde(rename = "company name")]
    pub symbol_name: String,
    pub price: f64,
}

impl Quote {
    pub fn new(symbol_name: impl Into<String>, price: f64) -> Self {
        Self {
            symbol_name: symbol_name.into(),
            price,
        }
    }
}

/* ----- SNAPSHOTS ----- */

/// One timestamp-labeled batch of quotes from a single collection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub label: String,
    /// Successful quotes, in input symbol order.
    pub quotes: Vec<Quote>,
}

impl Snapshot {
    pub fn new(label: impl Into<String>, quotes: Vec<Quote>) -> Self {
        Self {
            label: label.into(),
            quotes,
        }
    }

    /// The `(label, quotes)` pair as it is stored in an [`ArchiveDocument`].
    ///
    /// # Errors
    ///
    /// Propagates any failure from `serde_json::to_value`.
    pub fn to_entry(&self) -> Result<(String, Value), serde_json::Error> {
        Ok((self.label.clone(), serde_json::to_value(&self.quotes)?))
    }

    /// This snapshot alone, as a one-key document.
    ///
    /// # Errors
    ///
    /// See [`Snapshot::to_entry`].
    pub fn to_document(&self) -> Result<ArchiveDocument, serde_json::Error> {
        let (k, v) = self.to_entry()?;
        let mut doc = ArchiveDocument::new();
        doc.insert(k, v);
        Ok(doc)
    }
}
