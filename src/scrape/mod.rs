// src/scrape/mod.rs
mod scrape;
pub mod dispatch;
pub mod walker;

pub use dispatch::BatchDispatcher;
pub use scrape::{RunSummary, Scraper};
pub use walker::{PaginationWalker, WalkState};
