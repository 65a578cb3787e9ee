pub mod fetcher;
pub mod gate;
pub mod scraper;

pub use crate::domain::model::{BatchResult, Item};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
