// src/config/options.rs
use std::path::PathBuf;

use crate::error::ScrapeError;
use super::consts::*;

/// Where a search lives and how results are paged and shipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Search query without the `&start=` cursor.
    pub base_link: String,
    /// Prefixed to relative detail links.
    pub origin: String,
    /// Offset increment between result pages.
    pub page_size: u32,
    /// Records per delivered batch.
    pub batch_size: usize,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_link: s!(BASE_LINK),
            origin: s!(ORIGIN),
            page_size: PAGE_SIZE,
            batch_size: BATCH_SIZE,
        }
    }
}

impl ScrapeOptions {
    pub fn with_base_link(mut self, link: impl Into<String>) -> Self {
        self.base_link = link.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Zero is clamped to one; a batch always carries at least one record.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }
}

/// One invocation: how many pages to walk, how many ads to keep per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunRequest {
    pub num_pages: u32,
    pub ads_per_page: usize,
}

impl Default for RunRequest {
    fn default() -> Self {
        Self { num_pages: 1, ads_per_page: DEFAULT_ADS_PER_PAGE }
    }
}

impl RunRequest {
    pub fn new(num_pages: u32, ads_per_page: usize) -> Self {
        Self { num_pages, ads_per_page }
    }

    pub fn validate(&self) -> Result<(), ScrapeError> {
        if self.num_pages == 0 {
            return Err(ScrapeError::InvalidRequest(s!("num_pages must be at least 1")));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SinkTarget {
    #[default]
    Stdout,
    File(PathBuf),
}
