pub mod client_ext;
pub mod endpoints;
pub mod error;
pub mod schema;

pub use crate::endpoints::Endpoints;
pub use crate::error::{Error, Result};

pub mod prelude {
    pub use crate::client_ext::stock::ClientStockExt as Stocks;
    #[allow(unused_imports)]
    pub use crate::client_ext::Client;
    pub use crate::endpoints::Endpoints;
    pub use crate::schema::{Field, SearchResult, StockRecord};

    /// Build the HTTP client, attaching `user_agent` when one is configured.
    pub fn build_client(user_agent: Option<&str>) -> crate::Result<Client> {
        let mut builder = reqwest::ClientBuilder::new();
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(builder.build()?)
    }
}
