// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;

pub mod progress;
pub mod record;
pub mod scrape;
pub mod store;

pub use crate::core::{Fetch, HttpClient};
pub use error::{FetchError, ScrapeError, SinkError};
pub use record::JobAdRecord;
pub use scrape::{RunSummary, Scraper};
