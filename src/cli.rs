// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::{BASE_LINK, BATCH_SIZE, DEFAULT_ADS_PER_PAGE, DEFAULT_LOG_FILE, ORIGIN};
use crate::config::options::{RunRequest, ScrapeOptions, SinkTarget};
use crate::core::net::HttpClient;
use crate::log::{self, LogOptions};
use crate::progress::Progress;
use crate::scrape::{RunSummary, Scraper};
use crate::store::{JsonLinesSink, Sink};

/// Scrape job-search result pages, enrich each ad, ship batches as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "job_scrape", version, about)]
pub struct Args {
    /// Result pages to walk
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Ads kept per page (sponsored ads never count)
    #[arg(short, long, default_value_t = DEFAULT_ADS_PER_PAGE)]
    pub ads_per_page: usize,

    /// Search query without the `&start=` cursor
    #[arg(long, default_value = BASE_LINK)]
    pub base_link: String,

    /// Prefixed to relative detail links
    #[arg(long, default_value = ORIGIN)]
    pub origin: String,

    /// Records per delivered batch
    #[arg(long, default_value_t = BATCH_SIZE)]
    pub batch_size: usize,

    /// Append batches to this file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also log to a file
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_LOG_FILE)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn options(&self) -> ScrapeOptions {
        ScrapeOptions::default()
            .with_base_link(self.base_link.clone())
            .with_origin(self.origin.clone())
            .with_batch_size(self.batch_size)
    }

    pub fn request(&self) -> RunRequest {
        RunRequest::new(self.pages, self.ads_per_page)
    }

    pub fn sink_target(&self) -> SinkTarget {
        match &self.out {
            Some(p) => SinkTarget::File(p.clone()),
            None => SinkTarget::Stdout,
        }
    }
}

/// One status line per page on stderr.
struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total_pages: usize) {
        self.total = total_pages;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, offset: u32, retained: usize) {
        self.done += 1;
        eprintln!("[{}/{}] start={offset}: {retained} ads", self.done, self.total);
    }
}

pub fn run(args: Args) -> Result<RunSummary> {
    log::init(&LogOptions { verbose: args.verbose, file: args.log_file.clone() })
        .wrap_err("could not set up logging")?;

    let fetcher = HttpClient::new().wrap_err("could not build HTTP client")?;
    let mut progress = ConsoleProgress { total: 0, done: 0 };

    let summary = match args.sink_target() {
        SinkTarget::Stdout => scrape_into(fetcher, JsonLinesSink::stdout(), &args, &mut progress)?,
        SinkTarget::File(path) => {
            let sink = JsonLinesSink::create(&path)
                .wrap_err_with(|| format!("could not open {}", path.display()))?;
            scrape_into(fetcher, sink, &args, &mut progress)?
        }
    };

    eprintln!(
        "Scraped {} pages: {} records in {} batches",
        summary.pages, summary.records, summary.batches
    );
    Ok(summary)
}

fn scrape_into<S: Sink>(
    fetcher: HttpClient,
    sink: S,
    args: &Args,
    progress: &mut dyn Progress,
) -> Result<RunSummary> {
    let mut scraper = Scraper::new(fetcher, sink, args.options());
    Ok(scraper.run(args.request(), Some(progress))?)
}
