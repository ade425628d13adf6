/// Four text cells: name, price, change, volume.
pub type Row = [String; 4];

/// Column headers, in row order.
pub const COLUMNS: [&str; 4] = ["Name", "Price", "Change", "Volume"];

/// The two table bodies a view writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    Main,
    SearchResults,
}

impl TableId {
    /// Element id of the table body on the page.
    pub fn element_id(self) -> &'static str {
        match self {
            TableId::Main => "stocks-table-body",
            TableId::SearchResults => "search-results-body",
        }
    }
}

/// Where a [`StockView`](crate::StockView) draws.
///
/// Cells arrive as plain text. A surface that produces markup is responsible
/// for escaping them.
pub trait Surface: Send {
    /// Remove every row from `table`.
    fn clear(&mut self, table: TableId);

    /// Append `row` at the bottom of `table`.
    fn append_row(&mut self, table: TableId, row: Row);

    /// Show `message` to the user.
    fn alert(&mut self, message: &str);
}

/// In-memory surface; holds both tables and every alert raised.
#[derive(Debug, Default, Clone)]
pub struct Page {
    main: Vec<Row>,
    search_results: Vec<Row>,
    alerts: Vec<String>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self, table: TableId) -> &[Row] {
        match table {
            TableId::Main => &self.main,
            TableId::SearchResults => &self.search_results,
        }
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain the alerts raised since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    fn table_mut(&mut self, table: TableId) -> &mut Vec<Row> {
        match table {
            TableId::Main => &mut self.main,
            TableId::SearchResults => &mut self.search_results,
        }
    }
}

impl Surface for Page {
    fn clear(&mut self, table: TableId) {
        self.table_mut(table).clear();
    }

    fn append_row(&mut self, table: TableId, row: Row) {
        self.table_mut(table).push(row);
    }

    fn alert(&mut self, message: &str) {
        log::trace!("alert raised: {message}");
        self.alerts.push(message.to_string());
    }
}
