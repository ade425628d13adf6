use url::Url;

const MAIN_STOCKS: &str = "get_main_stocks";
const SEARCH_STOCK: &str = "search_stock";

/// The two backend routes, resolved against a base url.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    main_stocks: Url,
    search_stock: Url,
}

impl Endpoints {
    /// Resolve both routes under `base`, keeping any path prefix it carries.
    pub fn new(base: &str) -> crate::Result<Self> {
        let mut base = Url::parse(base)?;

        // `Url::join` replaces the last segment unless the path ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Endpoints {
            main_stocks: base.join(MAIN_STOCKS)?,
            search_stock: base.join(SEARCH_STOCK)?,
        })
    }

    pub fn main_stocks(&self) -> &Url {
        &self.main_stocks
    }

    pub fn search_stock(&self) -> &Url {
        &self.search_stock
    }
}
