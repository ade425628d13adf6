pub mod config;
pub mod render;
pub mod session;
pub mod surface;
pub mod view;

pub use crate::config::Config;
pub use crate::surface::{Page, Row, Surface, TableId};
pub use crate::view::{SearchOutcome, StockView};
