// Minimal serde for the GLOBAL_QUOTE response.
//
// Only the price is read. Everything else the provider sends (open, volume,
// change percent, ...) is ignored, and rate-limit notices such as
// `{"Note": "..."}` or `{"Information": "..."}` deserialize with
// `global_quote: None`.
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub(crate) struct GlobalQuoteEnvelope {
    #[serde(rename = "Global Quote")]
    pub(crate) global_quote: Option<GlobalQuoteNode>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct GlobalQuoteNode {
    #[serde(rename = "05. price")]
    pub(crate) price: Option<String>,
}

impl GlobalQuoteEnvelope {
    /// Provider-side message explaining an empty body, if any.
    pub(crate) fn notice(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }
}

/// Pull a finite price out of a parsed envelope, or say why there isn't one.
pub(crate) fn extract_price(env: &GlobalQuoteEnvelope) -> Result<f64, String> {
    let Some(node) = env.global_quote.as_ref() else {
        return Err(match env.notice() {
            Some(msg) => format!("missing \"Global Quote\" object ({msg})"),
            None => "missing \"Global Quote\" object".to_string(),
        });
    };
    let raw = node
        .price
        .as_deref()
        .ok_or_else(|| "missing \"05. price\" field".to_string())?;
    match raw.trim().parse::<f64>() {
        Ok(p) if p.is_finite() => Ok(p),
        _ => Err(format!("unparsable \"05. price\" value {raw:?}")),
    }
}
