#![allow(dead_code)]

// Re-export helpers so tests can `use helpers::*;`
pub mod mock_client;

pub use mock_client::{decode_error, MockClient};

use serde_json::json;
use std::sync::Arc;
use stockview::{Page, StockView, TableId};
use stockview_client::schema::{SearchResult, StockRecord};
use stockview_client::Endpoints;
use tokio::sync::Mutex;

pub const AAPL: &str = "AAPL";
pub const MSFT: &str = "MSFT";

pub fn apple() -> StockRecord {
    serde_json::from_value(json!({
        "name": "Apple",
        "price": 150,
        "change": 1.2,
        "volume": 1000000
    }))
    .expect("valid record")
}

pub fn microsoft() -> StockRecord {
    serde_json::from_value(json!({
        "name": "Microsoft",
        "price": "410.5",
        "change": -0.8,
        "volume": "22M"
    }))
    .expect("valid record")
}

pub fn found(record: StockRecord) -> Option<SearchResult> {
    Some(SearchResult::Found(record))
}

pub fn not_found(message: &str) -> Option<SearchResult> {
    Some(SearchResult::Failed(message.to_string()))
}

/// Cells as strings, for comparing against rendered rows.
pub fn cells(values: [&str; 4]) -> [String; 4] {
    values.map(String::from)
}

/// A view over `client` drawing on a fresh [`Page`]; the base url is never dialled.
pub fn view(client: MockClient) -> StockView<MockClient, Page> {
    let endpoints = Endpoints::new("http://stocks.invalid").expect("valid url");
    StockView::new(client, endpoints, Arc::new(Mutex::new(Page::new())))
}

pub async fn rows(view: &StockView<MockClient, Page>, table: TableId) -> Vec<[String; 4]> {
    view.surface().lock().await.rows(table).to_vec()
}

pub async fn alerts(view: &StockView<MockClient, Page>) -> Vec<String> {
    view.surface().lock().await.alerts().to_vec()
}
