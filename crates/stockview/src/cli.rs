use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base url; overrides STOCKVIEW_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// How tables are printed.
    #[arg(long, global = true, default_value = "text")]
    pub format: Format,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load and print the main stock list.
    Main,

    /// Search one or more symbols at once; the last one given wins the results table.
    Search {
        #[arg(required = true)]
        symbols: Vec<String>,
    },

    /// Print the main list, then search each symbol typed on stdin.
    Repl,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// Aligned terminal table.
    Text,

    /// Standalone HTML page.
    Html,
}
