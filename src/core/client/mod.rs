//! Public client surface + builder.
//! Defaults (endpoint, UA) live in `constants`.

mod constants;

use crate::core::SnapshotError;
use constants::{DEFAULT_BASE_QUERY, GLOBAL_QUOTE_FUNCTION, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// HTTP handle for the quote provider.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct QuoteClient {
    http: Client,
    base_query: Url,
    api_key: String,
}

impl fmt::Debug for QuoteClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuoteClient")
            .field("base_query", &self.base_query.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl QuoteClient {
    /// Create a new builder.
    pub fn builder() -> QuoteClientBuilder {
        QuoteClientBuilder::default()
    }

    /// Build a client for `api_key` against the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>) -> Result<Self, SnapshotError> {
        Self::builder().api_key(api_key).build()
    }

    /// The query endpoint requests are sent to.
    pub fn base_query(&self) -> &Url {
        &self.base_query
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Full `GLOBAL_QUOTE` request URL for one symbol.
    pub(crate) fn global_quote_url(&self, symbol: &str) -> Url {
        let mut url = self.base_query.clone();
        url.query_pairs_mut()
            .append_pair("function", GLOBAL_QUOTE_FUNCTION)
            .append_pair("symbol", symbol)
            .append_pair("apikey", &self.api_key);
        url
    }
}

/// Strip the `apikey` value from a request URL before it reaches a log line or error.
pub(crate) fn redact_url(url: &Url) -> String {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".to_string() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct QuoteClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl QuoteClientBuilder {
    /// API key passed verbatim as the `apikey` query parameter.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the query endpoint (e.g., a mock server in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// # Errors
    ///
    /// Returns an error if no API key was given, the default endpoint fails to
    /// parse, or the HTTP client cannot be built.
    pub fn build(self) -> Result<QuoteClient, SnapshotError> {
        let api_key = self
            .api_key
            .ok_or_else(|| SnapshotError::InvalidParams("api key is required".into()))?;
        let base_query = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUERY)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(QuoteClient {
            http,
            base_query,
            api_key,
        })
    }
}
