// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction: *where the ground truth lives in the markup*
//! and *how to read it without falling over when it drifts*.
//!
//! ## What lives here
//! - `card`: one search-result card → [`crate::record::JobAdRecord`], with
//!   sponsored placements filtered out and post age turned into a timestamp.
//! - `detail`: the detail page's description block.
//!
//! ## What does **not** live here
//! - **Walking pages / offsets** – `scrape::walker`.
//! - **Batching and delivery** – `scrape::dispatch` and `store`.
//! - **Transport** – specs receive parsed subtrees or raw bodies; only
//!   `detail::enrich` touches a [`crate::core::Fetch`], and it never fails.
//!
//! ## Typical call chain
//! ```text
//! scrape::Scraper → PaginationWalker → specs::card::extract (per card)
//!                                    ↘ specs::detail::enrich (per kept record)
//!                 → BatchDispatcher → store::Sink
//! ```
//!
//! ## Conventions & invariants
//! - Fields are described as ordered fallback lists of `NodeSpec`s
//!   (see `config::consts`), looked up with `core::html::find`.
//! - A missing field is `None`, never an error and never `""`.
//! - Specs should be testable **offline** against inline fixtures.
pub mod card;
pub mod detail;
