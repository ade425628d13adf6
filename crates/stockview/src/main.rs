use anyhow::Result;
use clap::Parser;
use cli::{Commands::*, Format};
use colored::Colorize;
use std::io::IsTerminal;
use std::sync::Arc;
use stockview::{render, session, Config, Page, StockView, TableId};
use stockview_client::prelude::*;
use tokio::io::BufReader;
use tokio::sync::Mutex;

mod cli;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger
    env_logger::init();
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();
    let cli = cli::Cli::parse();
    log::info!("Command line input recorded: {cli:#?}");

    let config = Config::from_env().with_base_url(cli.base_url.clone());
    log::debug!("Configuration: {config:?}");

    let client = build_client(config.user_agent.as_deref())?;
    let endpoints = Endpoints::new(&config.base_url)?;
    let page = Arc::new(Mutex::new(Page::new()));
    let view = Arc::new(StockView::new(client, endpoints, page.clone()));
    let format = cli.format;

    // cli framework:
    // "> stockview <COMMAND>"
    match &cli.command {
        // "> stockview main"
        Main => {
            view.initialize().await?;
            show(&mut *page.lock().await, TableId::Main, format)?;
        }

        // "> stockview search AAPL [MSFT ...]"
        // every search is in flight at once; only the last issued may render
        Search { symbols } => {
            session::search_all(view.as_ref(), symbols).await;
            show(&mut *page.lock().await, TableId::SearchResults, format)?;
        }

        // "> stockview repl"
        Repl => {
            if view.initialize().await.is_ok() {
                show(&mut *page.lock().await, TableId::Main, format)?;
            }
            eprintln!("{}", "Enter a symbol per line; `quit` to leave.".dimmed());

            let stdin = BufReader::new(tokio::io::stdin());
            session::repl(view, stdin, move |page: &mut Page| {
                if let Err(e) = show(page, TableId::SearchResults, format) {
                    log::error!("Failed to render search results: {e}");
                }
            })
            .await?;
        }
    }

    Ok(())
}

/// Print `table` (or the whole page, for HTML) and flush pending alerts.
fn show(page: &mut Page, table: TableId, format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for alert in page.take_alerts() {
                eprintln!("{} {alert}", "alert:".red().bold());
            }
            print!(
                "{}",
                render::text_table(page.rows(table), std::io::stdout().is_terminal())
            );
        }
        Format::Html => {
            print!("{}", render::html_page(page)?);
            page.take_alerts();
        }
    }
    Ok(())
}
