// src/record.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::core::dates::format_timestamp;

/// One job listing as shipped downstream.
///
/// Every field the card might not carry is optional; a missing field is
/// omitted from the payload rather than sent as `null` or `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct JobAdRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Site-relative link to the detail page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,

    /// `origin + detail_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "ser_timestamp")]
    pub posted_at: Option<DateTime<Utc>>,

    /// Markup of the detail page's description block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Scrape start, epoch seconds. Same for every record of a run.
    pub scraped_at: i64,
}

impl JobAdRecord {
    pub fn new(scraped_at: DateTime<Utc>) -> Self {
        Self { scraped_at: scraped_at.timestamp(), ..Self::default() }
    }

    pub fn is_sponsored(&self, prefix: &str) -> bool {
        self.detail_url.as_deref().is_some_and(|u| u.starts_with(prefix))
    }
}

fn ser_timestamp<S: Serializer>(t: &Option<DateTime<Utc>>, ser: S) -> Result<S::Ok, S::Error> {
    match t {
        Some(t) => ser.serialize_str(&format_timestamp(t)),
        None => ser.serialize_none(),
    }
}
