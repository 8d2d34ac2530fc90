#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use quote_snapshot::QuoteClient;
use std::time::Duration;
use url::Url;

pub const API_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn client_for(server: &MockServer) -> QuoteClient {
    QuoteClient::builder()
        .api_key(API_KEY)
        .base_url(Url::parse(&server.url("/query")).unwrap())
        .build()
        .unwrap()
}

/// A realistic GLOBAL_QUOTE payload for `symbol` at `price`.
pub fn global_quote_body(symbol: &str, price: &str) -> String {
    format!(
        r#"{{
    "Global Quote": {{
        "01. symbol": "{symbol}",
        "02. open": "{price}",
        "03. high": "{price}",
        "04. low": "{price}",
        "05. price": "{price}",
        "06. volume": "1000",
        "07. latest trading day": "2024-01-05",
        "08. previous close": "{price}",
        "09. change": "0.0000",
        "10. change percent": "0.0000%"
    }}
}}"#
    )
}

pub fn mock_body<'a>(server: &'a MockServer, symbol: &str, status: u16, body: String) -> Mock<'a> {
    let symbol = symbol.to_string();
    server.mock(move |when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "GLOBAL_QUOTE")
            .query_param("symbol", symbol.as_str())
            .query_param("apikey", API_KEY);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub fn mock_price<'a>(server: &'a MockServer, symbol: &str, price: &str) -> Mock<'a> {
    mock_body(server, symbol, 200, global_quote_body(symbol, price))
}

pub fn mock_price_delayed<'a>(
    server: &'a MockServer,
    symbol: &str,
    price: &str,
    delay: Duration,
) -> Mock<'a> {
    let symbol = symbol.to_string();
    let body = global_quote_body(&symbol, price);
    server.mock(move |when, then| {
        when.method(GET)
            .path("/query")
            .query_param("symbol", symbol.as_str());
        then.status(200)
            .header("content-type", "application/json")
            .delay(delay)
            .body(body);
    })
}
