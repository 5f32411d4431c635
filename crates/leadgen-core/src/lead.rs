//! Lead record produced by the collection pipeline.
//!
//! ## Observed provider detail shape
//!
//! The details endpoint may omit any of `formatted_address`,
//! `formatted_phone_number`, `website`, or `rating`. Absent string fields are
//! normalized to `""` at the pipeline boundary; an absent rating stays
//! `None` so that "unrated" is distinguishable from "rated 0.0" — the rating
//! filter relies on this distinction.

use serde::Serialize;

/// An ordered collection of leads. Insertion order is discovery order across
/// keywords and pages.
pub type LeadCollection = Vec<LeadRecord>;

/// One business lead, fully enriched and filter-approved.
///
/// Immutable value: produced once by the collector, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRecord {
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Business website URL; empty when the provider has none on file.
    pub website: String,
    /// Harvested emails: lowercased, alphabetically sorted, semicolon-joined.
    /// Empty when no website or no email was found.
    pub email: String,
    /// Star rating; `None` when the place has no rating.
    pub rating: Option<f64>,
}

impl LeadRecord {
    /// Rating rendered for tabular output: the number's shortest display
    /// form, or the empty string when unrated.
    #[must_use]
    pub fn rating_display(&self) -> String {
        self.rating.map(|r| r.to_string()).unwrap_or_default()
    }
}
