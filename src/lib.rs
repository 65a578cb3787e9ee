pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, HN_API_BASE};
pub use core::scraper::ThreadScraper;
pub use core::{BatchResult, Item};
pub use utils::error::{Result, ScrapeError};
