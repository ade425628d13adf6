use crate::surface::{Surface, TableId};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use stockview_client::{
    client_ext::stock::ClientStockExt, schema::SearchResult, schema::StockRecord, Endpoints,
    Error, Result,
};
use tokio::sync::Mutex;

/// What a call to [`StockView::search`] ended up doing.
#[derive(Debug)]
pub enum SearchOutcome {
    /// Blank input; nothing was sent.
    Skipped,
    /// The record replaced the search results.
    Rendered(StockRecord),
    /// The backend answered with an error message, which was alerted.
    Alerted(String),
    /// A newer search was issued before this one came back; dropped.
    Stale,
    /// Transport or decoding failure; logged, nothing shown.
    Failed(Error),
}

/// Controller for the stock screener page: a main list loaded at startup and
/// a single-symbol search.
pub struct StockView<C, S> {
    client: C,
    endpoints: Endpoints,
    surface: Arc<Mutex<S>>,
    issued: AtomicU64,
    initialized: AtomicBool,
}

impl<C, S> StockView<C, S>
where
    C: ClientStockExt + Send + Sync,
    S: Surface,
{
    pub fn new(client: C, endpoints: Endpoints, surface: Arc<Mutex<S>>) -> Self {
        StockView {
            client,
            endpoints,
            surface,
            issued: AtomicU64::new(0),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn surface(&self) -> &Arc<Mutex<S>> {
        &self.surface
    }

    /// Startup entry point; loads the main list exactly once.
    ///
    /// Returns the number of rows rendered, or `None` if the view had
    /// already been initialised.
    pub async fn initialize(&self) -> Result<Option<usize>> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            log::warn!("StockView already initialised; main list not reloaded");
            return Ok(None);
        }
        log::info!("Initialising StockView against {}", self.endpoints.main_stocks());
        self.load_main_stocks().await.map(Some)
    }

    /// Fetch the main list and replace the main table with it.
    ///
    /// On failure the table keeps whatever it showed before.
    pub async fn load_main_stocks(&self) -> Result<usize> {
        let stocks = match self.client.get_main_stocks(&self.endpoints).await {
            Ok(stocks) => stocks,
            Err(e) => {
                log::error!("Failed to load main stocks: {e}");
                return Err(e);
            }
        };

        let mut surface = self.surface.lock().await;
        surface.clear(TableId::Main);
        for stock in &stocks {
            surface.append_row(TableId::Main, stock.cells());
        }
        log::debug!("Main table rendered with {} rows", stocks.len());
        Ok(stocks.len())
    }

    /// Look up `input` (trimmed) and show the result in the search table.
    ///
    /// Only the most recently issued search may touch the table; a response
    /// that arrives after a newer search was issued is dropped.
    pub async fn search(&self, input: &str) -> SearchOutcome {
        let symbol = input.trim();
        if symbol.is_empty() {
            log::trace!("Empty search input ignored");
            return SearchOutcome::Skipped;
        }

        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("Search #{seq} issued [{symbol}]");

        let result = match self.client.search_stock(&self.endpoints, symbol).await {
            Ok(result) => result,
            Err(e) => {
                log::error!("Search #{seq} [{symbol}] failed: {e}");
                return SearchOutcome::Failed(e);
            }
        };

        let mut surface = self.surface.lock().await;
        if self.issued.load(Ordering::SeqCst) != seq {
            log::debug!("Search #{seq} [{symbol}] superseded; response dropped");
            return SearchOutcome::Stale;
        }

        surface.clear(TableId::SearchResults);
        match result {
            SearchResult::Found(record) => {
                surface.append_row(TableId::SearchResults, record.cells());
                SearchOutcome::Rendered(record)
            }
            SearchResult::Failed(message) => {
                log::info!("Search #{seq} [{symbol}] answered with error: {message}");
                surface.alert(&message);
                SearchOutcome::Alerted(message)
            }
        }
    }
}
