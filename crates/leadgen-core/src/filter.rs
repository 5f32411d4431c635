//! Filter specification and pure predicate evaluation.
//!
//! A [`FilterSpec`] is three independent predicates AND-ed together. Each
//! defaults to pass-through, so `FilterSpec::default()` accepts every record.

use std::str::FromStr;

use thiserror::Error;

use crate::lead::LeadRecord;

#[derive(Debug, Error)]
#[error("invalid filter value {value:?} for {field}: expected one of {expected}")]
pub struct FilterParseError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

/// Presence filter for the website and email fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresenceFilter {
    #[default]
    NoFilter,
    /// Require the field to be non-empty.
    With,
    /// Require the field to be empty.
    Without,
}

impl PresenceFilter {
    fn accepts(self, value: &str) -> bool {
        match self {
            PresenceFilter::NoFilter => true,
            PresenceFilter::With => !value.is_empty(),
            PresenceFilter::Without => value.is_empty(),
        }
    }
}

impl FromStr for PresenceFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_filter" => Ok(PresenceFilter::NoFilter),
            "with" => Ok(PresenceFilter::With),
            "without" => Ok(PresenceFilter::Without),
            other => Err(FilterParseError {
                field: "website/email",
                value: other.to_string(),
                expected: "no_filter, with, without",
            }),
        }
    }
}

/// Rating filter. `"5"` means exact 5.0; `"1"` through `"4"` mean "at least".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingFilter {
    #[default]
    NoFilter,
    /// Rating must be at least this threshold (1..=4).
    AtLeast(u8),
    /// Rating must be exactly 5.0.
    ExactlyFive,
}

impl RatingFilter {
    /// Fail-closed: an active rating filter rejects records with no rating.
    /// Deliberately asymmetric with the presence filters' explicit
    /// with/without semantics; do not change without product confirmation.
    fn accepts(self, rating: Option<f64>) -> bool {
        match self {
            RatingFilter::NoFilter => true,
            RatingFilter::AtLeast(min) => rating.is_some_and(|r| r >= f64::from(min)),
            RatingFilter::ExactlyFive => rating.is_some_and(|r| (r - 5.0).abs() < f64::EPSILON),
        }
    }
}

impl FromStr for RatingFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_filter" => Ok(RatingFilter::NoFilter),
            "1" => Ok(RatingFilter::AtLeast(1)),
            "2" => Ok(RatingFilter::AtLeast(2)),
            "3" => Ok(RatingFilter::AtLeast(3)),
            "4" => Ok(RatingFilter::AtLeast(4)),
            "5" => Ok(RatingFilter::ExactlyFive),
            other => Err(FilterParseError {
                field: "rating",
                value: other.to_string(),
                expected: "no_filter, 1, 2, 3, 4, 5",
            }),
        }
    }
}

/// The complete filter specification attached to a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSpec {
    pub website: PresenceFilter,
    pub email: PresenceFilter,
    pub rating: RatingFilter,
}

impl FilterSpec {
    /// Evaluates all three predicates against an enriched record.
    #[must_use]
    pub fn accepts(&self, record: &LeadRecord) -> bool {
        self.website.accepts(&record.website)
            && self.email.accepts(&record.email)
            && self.rating.accepts(record.rating)
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
