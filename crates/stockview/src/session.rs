use crate::surface::Surface;
use crate::view::{SearchOutcome, StockView};
use std::sync::Arc;
use stockview_client::client_ext::stock::ClientStockExt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

/// What one line of interactive input asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Quit,
    Blank,
    Symbol(&'a str),
}

impl<'a> Input<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Input::Blank,
            "quit" | "exit" => Input::Quit,
            symbol => Input::Symbol(symbol),
        }
    }
}

/// Issue every search at once; the last symbol given is the one left showing.
pub async fn search_all<C, S>(view: &StockView<C, S>, symbols: &[String]) -> Vec<SearchOutcome>
where
    C: ClientStockExt + Send + Sync,
    S: Surface,
{
    let outcomes = futures::future::join_all(symbols.iter().map(|symbol| view.search(symbol))).await;
    for (symbol, outcome) in symbols.iter().zip(outcomes.iter()) {
        log::debug!("[{symbol}] {outcome:?}");
    }
    outcomes
}

/// Read symbols from `input` one line at a time until `quit`, `exit` or EOF.
///
/// Every line starts its search straight away, without waiting on the one
/// before. `on_update` is handed the surface whenever a search renders a row
/// or raises an alert. Returns once every started search has finished, with
/// the number of searches started.
pub async fn repl<R, C, S, F>(
    view: Arc<StockView<C, S>>,
    input: R,
    on_update: F,
) -> std::io::Result<usize>
where
    R: AsyncBufRead + Unpin,
    C: ClientStockExt + Send + Sync + 'static,
    S: Surface + 'static,
    F: Fn(&mut S) + Send + Sync + 'static,
{
    let on_update = Arc::new(on_update);
    let mut searches = JoinSet::new();
    let mut started = 0;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let symbol = match Input::parse(&line) {
            Input::Quit => break,
            Input::Blank => continue,
            Input::Symbol(symbol) => symbol.to_string(),
        };

        // reap what has already finished
        while let Some(done) = searches.try_join_next() {
            reap(done);
        }

        let view = view.clone();
        let on_update = on_update.clone();
        searches.spawn(async move {
            if let SearchOutcome::Rendered(_) | SearchOutcome::Alerted(_) =
                view.search(&symbol).await
            {
                (*on_update)(&mut *view.surface().lock().await);
            }
        });
        started += 1;
    }

    while let Some(done) = searches.join_next().await {
        reap(done);
    }
    log::debug!("Session closed after {started} searches");
    Ok(started)
}

fn reap(done: Result<(), tokio::task::JoinError>) {
    if let Err(e) = done {
        log::error!("Search task failed: {e}");
    }
}
