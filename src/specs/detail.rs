// src/specs/detail.rs
//! Scraping *spec* for a job's detail page.
//!
//! The only thing read here is the long-form description block
//! (`div.jobsearch-JobComponent-description`), kept as markup.
//! A failed fetch or a missing block leaves the record without a
//! description; neither aborts the run.

use scraper::Html;
use tracing::warn;

use crate::config::consts::DESCRIPTION;
use crate::core::html::{find, outer_html};
use crate::core::net::Fetch;
use crate::record::JobAdRecord;

pub fn extract_description(doc: &str) -> Option<String> {
    let doc = Html::parse_document(doc);
    find(doc.root_element(), DESCRIPTION).map(outer_html)
}

/// Fetch `origin + detail_url` and attach the description.
/// Records without a detail link are left untouched.
pub fn enrich<F: Fetch + ?Sized>(fetcher: &F, origin: &str, rec: &mut JobAdRecord) {
    let Some(path) = rec.detail_url.as_deref() else { return };
    let url = join!(origin, path);

    match fetcher.get(&url) {
        Ok(body) => rec.description = extract_description(&body),
        Err(e) => warn!(error = %e, "Detail fetch failed; leaving description empty"),
    }
}
