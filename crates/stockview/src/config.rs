use std::env;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Runtime settings, read from the environment (and `.env`, once loaded).
///
/// | variable        | meaning                               |
/// |-----------------|---------------------------------------|
/// | `STOCKVIEW_URL` | backend base url                      |
/// | `USER_AGENT`    | user agent sent with every request    |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Config {
            base_url: non_empty("STOCKVIEW_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            user_agent: non_empty("USER_AGENT"),
        }
    }

    /// Command line flags take precedence over the environment.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = base_url;
        }
        self
    }
}
