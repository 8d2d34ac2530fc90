//! Centralized constants for default endpoints and UA.

/// UA sent with every quote request unless overridden on the builder.
pub(crate) const USER_AGENT: &str = concat!("quote-snapshot/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint; the function and its arguments go in the query string.
pub(crate) const DEFAULT_BASE_QUERY: &str = "https://www.alphavantage.co/query";

/// Value of the `function` query parameter for single-symbol latest quotes.
pub(crate) const GLOBAL_QUOTE_FUNCTION: &str = "GLOBAL_QUOTE";
