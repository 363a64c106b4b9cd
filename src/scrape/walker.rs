// src/scrape/walker.rs
use chrono::{DateTime, Utc};
use scraper::Html;
use tracing::info;

use crate::config::{consts::CARD, options::ScrapeOptions};
use crate::core::{html::find_all, net::Fetch};
use crate::error::FetchError;
use crate::record::JobAdRecord;
use crate::specs::{card, detail};

/// Where the walker is within the current round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkState {
    Idle,
    Fetching,
    Parsing,
    Enriching,
    Advanced,
}

/// Owns the pagination cursor for one scrape run.
///
/// Each round fetches `base_link&start=<offset>`, keeps up to
/// `ads_per_page` non-sponsored cards, enriches them one at a time and
/// leaves the offset untouched until [`advance`](Self::advance).
pub struct PaginationWalker<'a, F: Fetch + ?Sized> {
    fetcher: &'a F,
    base_link: String,
    origin: String,
    page_size: u32,
    offset: u32,
    scrape_start: DateTime<Utc>,
    state: WalkState,
}

impl<'a, F: Fetch + ?Sized> PaginationWalker<'a, F> {
    pub fn new(fetcher: &'a F, opts: &ScrapeOptions, scrape_start: DateTime<Utc>) -> Self {
        Self {
            fetcher,
            base_link: opts.base_link.clone(),
            origin: opts.origin.clone(),
            page_size: opts.page_size,
            offset: 0,
            scrape_start,
            state: WalkState::Idle,
        }
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn visit_url(&self) -> String {
        format!("{}&start={}", self.base_link, self.offset)
    }

    /// One full round for the current offset. A failed search-page fetch
    /// is returned as-is; detail failures only cost that record its description.
    pub fn visit_page(&mut self, ads_per_page: usize) -> Result<Vec<JobAdRecord>, FetchError> {
        self.state = WalkState::Fetching;
        let body = self.fetcher.get(&self.visit_url())?;

        self.state = WalkState::Parsing;
        let mut records = collect_cards(&body, self.scrape_start, &self.origin, ads_per_page);

        self.state = WalkState::Enriching;
        for rec in &mut records {
            detail::enrich(self.fetcher, &self.origin, rec);
        }
        Ok(records)
    }

    pub fn advance(&mut self) {
        self.offset += self.page_size;
        self.state = WalkState::Advanced;
    }
}

/// Extract at most `cap` non-sponsored cards from a search page, in document order.
pub fn collect_cards(
    body: &str,
    scrape_start: DateTime<Utc>,
    origin: &str,
    cap: usize,
) -> Vec<JobAdRecord> {
    let doc = Html::parse_document(body);
    let cards: Vec<_> = find_all(doc.root_element(), CARD).collect();
    info!(count = cards.len(), "Found ad cards");

    let mut out = Vec::with_capacity(cards.len().min(cap));
    for c in cards {
        if out.len() >= cap {
            break;
        }
        if let Some(rec) = card::extract(c, scrape_start, origin).into_record() {
            out.push(rec);
        }
    }
    out
}
