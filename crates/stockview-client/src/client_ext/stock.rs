use crate::endpoints::Endpoints;
use crate::schema::{SearchRequest, SearchResult, StockRecord};
use crate::Result;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;

/// Stock screener requests, as add-on methods for an HTTP client.
///
/// Implemented for [`reqwest::Client`]; anything else that can answer the two
/// routes (a fixture, a recording) can implement it too.
///
/// [`reqwest::Client`]: https://docs.rs/reqwest/latest/reqwest/struct.Client.html
pub trait ClientStockExt {
    /// GET the main stock list.
    fn get_main_stocks(
        &self,
        endpoints: &Endpoints,
    ) -> impl Future<Output = Result<Vec<StockRecord>>> + Send;

    /// POST `{"symbol": symbol}` and read back a record or an error message.
    fn search_stock(
        &self,
        endpoints: &Endpoints,
        symbol: &str,
    ) -> impl Future<Output = Result<SearchResult>> + Send;
}

impl ClientStockExt for Client {
    async fn get_main_stocks(&self, endpoints: &Endpoints) -> Result<Vec<StockRecord>> {
        let url = endpoints.main_stocks();
        log::trace!("GET {url}");
        let response = self.get(url.clone()).send().await?;
        let stocks: Vec<StockRecord> = decode(response).await?;
        log::debug!("{} stocks received from {url}", stocks.len());
        Ok(stocks)
    }

    async fn search_stock(&self, endpoints: &Endpoints, symbol: &str) -> Result<SearchResult> {
        let url = endpoints.search_stock();
        log::trace!("POST {url} [{symbol}]");

        // `.json()` sets `Content-Type: application/json`
        let response = self
            .post(url.clone())
            .json(&SearchRequest { symbol })
            .send()
            .await?;
        decode(response).await
    }
}

/// Read the body as JSON whatever the status; the backend reports its own
/// failures in the body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        log::debug!("{} answered with status {status}", response.url());
    }
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Field;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn main_stocks_keep_array_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/get_main_stocks");
                then.status(200).json_body(json!([
                    { "name": "Apple", "price": 150, "change": 1.2, "volume": 1000000 },
                    { "name": "Microsoft", "price": "N/A", "change": -0.4, "volume": 20 }
                ]));
            })
            .await;

        let endpoints = Endpoints::new(&server.base_url()).unwrap();
        let stocks = Client::new().get_main_stocks(&endpoints).await.unwrap();

        mock.assert_async().await;
        assert_eq!(stocks.len(), 2);
        assert_eq!(stocks[0].name, Field::from("Apple"));
        assert_eq!(stocks[1].cells(), ["Microsoft", "N/A", "-0.4", "20"]);
    }

    #[tokio::test]
    async fn search_posts_symbol_as_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/search_stock")
                    .header("content-type", "application/json")
                    .json_body(json!({ "symbol": "AAPL" }));
                then.status(200)
                    .json_body(json!({ "name": "Apple", "price": 150, "change": 1.2, "volume": 1000000 }));
            })
            .await;

        let endpoints = Endpoints::new(&server.base_url()).unwrap();
        let result = Client::new().search_stock(&endpoints, "AAPL").await.unwrap();

        mock.assert_async().await;
        assert!(matches!(result, SearchResult::Found(_)));
    }

    #[tokio::test]
    async fn error_body_is_read_regardless_of_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/search_stock");
                then.status(404).json_body(json!({ "error": "Not found" }));
            })
            .await;

        let endpoints = Endpoints::new(&server.base_url()).unwrap();
        let result = Client::new().search_stock(&endpoints, "ZZZZ").await.unwrap();
        assert_eq!(result, SearchResult::Failed("Not found".to_string()));
    }

    #[tokio::test]
    async fn non_json_body_is_a_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/get_main_stocks");
                then.status(500).body("<html>Internal Server Error</html>");
            })
            .await;

        let endpoints = Endpoints::new(&server.base_url()).unwrap();
        let err = Client::new().get_main_stocks(&endpoints).await.unwrap_err();
        assert!(matches!(err, crate::Error::Decode(_)));
    }
}
