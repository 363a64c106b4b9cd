// src/specs/card.rs
//! Scraping *spec* for one result card on the search page.
//!
//! Card layout (fields may be missing in any combination):
//! ```text
//! div.jobsearch-SerpJobCard
//!   a.jobtitle[href]            title + relative detail link
//!   div.sjcl
//!     span.company
//!     span.location | div.location
//!   span.date                   "3 hours ago", "30+ days ago", ...
//! ```
//!
//! Paid placements link under `/pagead` and are dropped before any other
//! field is read. The card subtree is only borrowed for the duration of
//! [`extract`]; the record never holds on to markup.

use chrono::{DateTime, Utc};
use scraper::ElementRef;
use tracing::debug;

use crate::config::consts::{COMPANY, LOCATION, METADATA, POST_DATE, SPONSORED_PREFIX, TITLE};
use crate::core::dates::normalize_post_date;
use crate::core::html::{find, text_of};
use crate::record::JobAdRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Card {
    /// Regular listing, possibly partial.
    Posting(JobAdRecord),
    /// Paid placement. Never part of the result set.
    Sponsored { detail_url: String },
}

impl Card {
    pub fn is_valid(&self) -> bool {
        matches!(self, Card::Posting(_))
    }

    pub fn into_record(self) -> Option<JobAdRecord> {
        match self {
            Card::Posting(rec) => Some(rec),
            Card::Sponsored { .. } => None,
        }
    }
}

pub fn extract(card: ElementRef<'_>, scrape_start: DateTime<Utc>, origin: &str) -> Card {
    let mut rec = JobAdRecord::new(scrape_start);

    if let Some(title) = find(card, TITLE) {
        rec.title = Some(text_of(title));
        if let Some(href) = title.value().attr("href") {
            if href.starts_with(SPONSORED_PREFIX) {
                debug!(%href, "Skipping sponsored card");
                return Card::Sponsored { detail_url: s!(href) };
            }
            rec.apply_url = Some(join!(origin, href));
            rec.detail_url = Some(s!(href));
        }
    }

    if let Some(meta) = find(card, METADATA) {
        rec.company = find(meta, COMPANY).map(text_of);
        rec.location = find(meta, LOCATION).map(text_of);
    }

    if let Some(date) = find(card, POST_DATE) {
        rec.posted_at = normalize_post_date(&text_of(date), scrape_start);
    }

    Card::Posting(rec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts::{CARD, ORIGIN};
    use crate::core::html::find_all;
    use scraper::Html;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_600_000_000, 0).unwrap()
    }

    fn first_card(html: &str) -> Card {
        let doc = Html::parse_document(html);
        let card = find_all(doc.root_element(), CARD).next().expect("card");
        extract(card, t0(), ORIGIN)
    }

    const FULL: &str = r#"
        <div class="row jobsearch-SerpJobCard unifiedRow">
          <h2><a class="jobtitle turnstileLink" href="/rc/clk?jk=abc123">
            Line Cook
          </a></h2>
          <div class="sjcl">
            <span class="company"> Acme Foods </span>
            <div class="location accessible-contrast-color-location">Toronto, ON</div>
          </div>
          <span class="date">3 hours ago</span>
        </div>"#;

    #[test]
    fn full_card() {
        let Card::Posting(rec) = first_card(FULL) else { panic!("expected posting") };
        assert_eq!(rec.title.as_deref(), Some("Line Cook"));
        assert_eq!(rec.detail_url.as_deref(), Some("/rc/clk?jk=abc123"));
        assert_eq!(rec.apply_url.as_deref(), Some("https://www.indeed.com/rc/clk?jk=abc123"));
        assert_eq!(rec.company.as_deref(), Some("Acme Foods"));
        assert_eq!(rec.location.as_deref(), Some("Toronto, ON"));
        assert_eq!(rec.posted_at.map(|t| t.timestamp()), Some(1_600_000_000 - 10_800));
        assert_eq!(rec.description, None);
        assert_eq!(rec.scraped_at, 1_600_000_000);
    }

    #[test]
    fn sponsored_card_is_invalid() {
        let card = first_card(
            r#"<div class="jobsearch-SerpJobCard">
                 <a class="jobtitle" href="/pagead/clk?ad=1">Promoted</a>
                 <div class="sjcl"><span class="company">Ads Inc</span></div>
               </div>"#,
        );
        assert!(!card.is_valid());
        assert_eq!(card, Card::Sponsored { detail_url: s!("/pagead/clk?ad=1") });
    }

    #[test]
    fn partial_card_is_still_valid() {
        let card = first_card(
            r#"<div class="jobsearch-SerpJobCard"><span class="date">30+ days ago</span></div>"#,
        );
        assert!(card.is_valid());
        let rec = card.into_record().unwrap();
        assert_eq!(rec.title, None);
        assert_eq!(rec.detail_url, None);
        assert_eq!(rec.apply_url, None);
        assert_eq!(rec.company, None);
        assert_eq!(rec.posted_at, None);
    }

    #[test]
    fn span_location_preferred() {
        let rec = first_card(
            r#"<div class="jobsearch-SerpJobCard"><div class="sjcl">
                 <div class="location">div-loc</div><span class="location">span-loc</span>
               </div></div>"#,
        )
        .into_record()
        .unwrap();
        assert_eq!(rec.location.as_deref(), Some("span-loc"));
    }

    #[test]
    fn extraction_is_repeatable() {
        let doc = Html::parse_document(FULL);
        let card = find_all(doc.root_element(), CARD).next().unwrap();
        assert_eq!(extract(card, t0(), ORIGIN), extract(card, t0(), ORIGIN));
    }
}
