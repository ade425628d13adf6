use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use stockview_client::client_ext::stock::ClientStockExt;
use stockview_client::schema::{SearchResult, StockRecord};
use stockview_client::{Endpoints, Error, Result};
use tokio::sync::oneshot;

/// A failure as the real client would report an unreadable body.
pub fn decode_error() -> Error {
    Error::Decode(serde_json::from_str::<serde_json::Value>("<html>").unwrap_err())
}

struct Scripted {
    reply: Option<SearchResult>,
    gate: Option<oneshot::Receiver<()>>,
}

/// In-process stand-in for the backend.
///
/// Search replies are scripted per symbol. A gated reply is held back until
/// its sender fires, which lets tests choose the order responses land in.
#[derive(Default)]
pub struct MockClient {
    main: Mutex<Option<Vec<StockRecord>>>,
    searches: Mutex<HashMap<String, Scripted>>,
    requested: Mutex<Vec<String>>,
    main_calls: AtomicUsize,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main list reply; without one, the main list fails to decode.
    pub fn with_main(self, stocks: Vec<StockRecord>) -> Self {
        *self.main.lock().unwrap() = Some(stocks);
        self
    }

    /// Reply to `symbol` with `reply`, or with a transport-style failure for `None`.
    pub fn script(&self, symbol: &str, reply: Option<SearchResult>) {
        self.insert(symbol, reply, None);
    }

    /// As [`script`](Self::script), but held until the returned sender fires.
    pub fn script_gated(&self, symbol: &str, reply: Option<SearchResult>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.insert(symbol, reply, Some(rx));
        tx
    }

    fn insert(&self, symbol: &str, reply: Option<SearchResult>, gate: Option<oneshot::Receiver<()>>) {
        self.searches
            .lock()
            .unwrap()
            .insert(symbol.to_string(), Scripted { reply, gate });
    }

    /// Symbols sent to `search_stock`, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    pub fn main_calls(&self) -> usize {
        self.main_calls.load(Ordering::SeqCst)
    }
}

impl ClientStockExt for MockClient {
    async fn get_main_stocks(&self, _endpoints: &Endpoints) -> Result<Vec<StockRecord>> {
        self.main_calls.fetch_add(1, Ordering::SeqCst);
        let main = self.main.lock().unwrap().clone();
        main.ok_or_else(decode_error)
    }

    async fn search_stock(&self, _endpoints: &Endpoints, symbol: &str) -> Result<SearchResult> {
        self.requested.lock().unwrap().push(symbol.to_string());
        let scripted = self.searches.lock().unwrap().remove(symbol);
        let Some(Scripted { reply, gate }) = scripted else {
            panic!("no reply scripted for {symbol:?}");
        };

        if let Some(gate) = gate {
            let _ = gate.await;
        }
        reply.ok_or_else(decode_error)
    }
}
