// src/scrape/scrape.rs
use chrono::{DateTime, Utc};
use tracing::info;

use crate::{
    config::options::{RunRequest, ScrapeOptions},
    core::{dates::truncate_to_secs, net::Fetch},
    error::ScrapeError,
    progress::Progress,
    record::JobAdRecord,
    store::Sink,
};

use super::{dispatch::BatchDispatcher, walker::PaginationWalker};

/// What one run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub pages: u32,
    pub records: usize,
    pub batches: usize,
}

/// Drives a whole scrape: walk N pages, then dispatch everything once.
///
/// The sink is only touched after every page fetch has succeeded, so a
/// run aborted by a fetch failure delivers nothing.
pub struct Scraper<F: Fetch, S: Sink> {
    fetcher: F,
    sink: S,
    options: ScrapeOptions,
}

impl<F: Fetch, S: Sink> Scraper<F, S> {
    pub fn new(fetcher: F, sink: S, options: ScrapeOptions) -> Self {
        Self { fetcher, sink, options }
    }

    pub fn options(&self) -> &ScrapeOptions {
        &self.options
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn run(
        &mut self,
        request: RunRequest,
        progress: Option<&mut dyn Progress>,
    ) -> Result<RunSummary, ScrapeError> {
        self.run_at(request, Utc::now(), progress)
    }

    /// Same as [`run`](Self::run) with the scrape start time supplied;
    /// every relative post date is anchored to it.
    pub fn run_at(
        &mut self,
        request: RunRequest,
        started_at: DateTime<Utc>,
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<RunSummary, ScrapeError> {
        request.validate()?;
        let started_at = truncate_to_secs(started_at);

        if let Some(p) = progress.as_deref_mut() {
            p.begin(request.num_pages as usize);
        }

        let collected = self.collect(request, started_at, progress.as_deref_mut());
        let result = collected.and_then(|job_ads| {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Sending {} records downstream…", job_ads.len()));
            }
            let batches = BatchDispatcher::new(&mut self.sink, self.options.batch_size)
                .dispatch(&job_ads)?;
            Ok(RunSummary {
                started_at,
                pages: request.num_pages,
                records: job_ads.len(),
                batches,
            })
        });

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        result
    }

    fn collect(
        &self,
        request: RunRequest,
        started_at: DateTime<Utc>,
        mut progress: Option<&mut (dyn Progress + '_)>,
    ) -> Result<Vec<JobAdRecord>, ScrapeError> {
        let mut walker = PaginationWalker::new(&self.fetcher, &self.options, started_at);
        let mut job_ads = Vec::new();

        for _ in 0..request.num_pages {
            let offset = walker.offset();
            let page = walker.visit_page(request.ads_per_page)?;
            info!(offset, retained = page.len(), "Page done");
            if let Some(p) = progress.as_deref_mut() {
                p.page_done(offset, page.len());
            }
            job_ads.extend(page);
            walker.advance();
        }
        Ok(job_ads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::store::MemorySink;

    struct Down;
    impl Fetch for Down {
        fn get(&self, url: &str) -> Result<String, FetchError> {
            Err(FetchError::Status { url: s!(url), status: 502 })
        }
    }

    /// Serves one ordinary card per search page and an empty detail page.
    struct OneCardPerPage;
    impl Fetch for OneCardPerPage {
        fn get(&self, url: &str) -> Result<String, FetchError> {
            if url.contains("&start=") {
                Ok(s!(
                    r#"<html><body><div class="jobsearch-SerpJobCard"><a class="jobtitle" href="/rc/a">A</a></div></body></html>"#
                ))
            } else {
                Ok(s!("<html><body></body></html>"))
            }
        }
    }

    #[derive(Default)]
    struct Tally {
        begun: usize,
        pages: Vec<(u32, usize)>,
        logged: usize,
        finished: bool,
    }
    impl Progress for Tally {
        fn begin(&mut self, total: usize) {
            self.begun = total;
        }
        fn log(&mut self, _msg: &str) {
            self.logged += 1;
        }
        fn page_done(&mut self, offset: u32, retained: usize) {
            self.pages.push((offset, retained));
        }
        fn finish(&mut self) {
            self.finished = true;
        }
    }

    #[test]
    fn progress_sees_every_page_and_the_finish() {
        let opts = ScrapeOptions::default().with_base_link("https://jobs.test/jobs?q=x");
        let mut s = Scraper::new(OneCardPerPage, MemorySink::new(), opts);
        let mut tally = Tally::default();
        let summary = s.run(RunRequest::new(3, 20), Some(&mut tally)).unwrap();

        assert_eq!(summary.records, 3);
        assert_eq!(summary.batches, 1);
        assert_eq!(tally.begun, 3);
        assert_eq!(tally.pages, vec![(0, 1), (20, 1), (40, 1)]);
        assert_eq!(tally.logged, 1);
        assert!(tally.finished);
        assert_eq!(s.into_sink().batches.len(), 1);
    }

    #[test]
    fn transport_failure_aborts_without_dispatch() {
        let mut s = Scraper::new(Down, MemorySink::new(), ScrapeOptions::default());
        let mut tally = Tally::default();
        let err = s.run(RunRequest::new(2, 20), Some(&mut tally)).unwrap_err();
        assert!(matches!(err, ScrapeError::Fetch(FetchError::Status { status: 502, .. })));
        assert_eq!(tally.begun, 2);
        assert!(tally.finished);
        assert!(s.into_sink().batches.is_empty());
    }

    #[test]
    fn zero_pages_rejected_before_any_fetch() {
        let mut s = Scraper::new(Down, MemorySink::new(), ScrapeOptions::default());
        let err = s.run(RunRequest::new(0, 20), None).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidRequest(_)));
    }
}
