pub mod stock;

pub use reqwest::Client;
