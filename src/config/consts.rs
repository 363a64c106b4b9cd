// src/config/consts.rs
use crate::core::html::NodeSpec;

// Net config
pub const BASE_LINK: &str = "https://www.indeed.ca/jobs?l=Toronto,+ON&sort=date&fromage=1&limit=50";
pub const ORIGIN: &str = "https://www.indeed.com";
pub const USER_AGENT: &str = concat!("job_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Listings whose link starts here are paid placements
pub const SPONSORED_PREFIX: &str = "/pagead";

// Pagination
pub const PAGE_SIZE: u32 = 20;
pub const DEFAULT_ADS_PER_PAGE: usize = 20;

// Delivery
pub const BATCH_SIZE: usize = 50;

// Logging
pub const DEFAULT_LOG_FILE: &str = ".store/debug.log";

// Search page markup
pub const CARD: NodeSpec = NodeSpec::class("div", "jobsearch-SerpJobCard");
pub const TITLE: &[NodeSpec] = &[NodeSpec::class("a", "jobtitle")];
pub const METADATA: &[NodeSpec] = &[NodeSpec::class("div", "sjcl")];
pub const COMPANY: &[NodeSpec] = &[NodeSpec::class("span", "company")];
pub const LOCATION: &[NodeSpec] = &[
    NodeSpec::class("span", "location"),
    NodeSpec::class("div", "location"),
];
pub const POST_DATE: &[NodeSpec] = &[NodeSpec::class("span", "date")];

// Detail page markup
pub const DESCRIPTION: &[NodeSpec] =
    &[NodeSpec::class("div", "jobsearch-JobComponent-description")];
