//! Validated job request handed to the collector.
//!
//! The builder replaces ad-hoc accumulated state from the upstream
//! collaborator: a `JobRequest` can only exist fully validated, so the
//! pipeline never sees a partial job.

use thiserror::Error;

use crate::filter::FilterSpec;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum JobRequestError {
    #[error("job request has no location")]
    MissingLocation,

    #[error("radius must be a positive number of meters")]
    InvalidRadius,

    #[error("job request needs at least one keyword")]
    NoKeywords,

    #[error("keyword at position {0} is empty")]
    EmptyKeyword(usize),
}

/// A finalized lead-collection job. Immutable once built.
#[derive(Debug, Clone)]
pub struct JobRequest {
    /// Free-text place name, or literal `"lat,lng"` coordinates.
    pub location: String,
    /// Search radius in meters.
    pub radius_meters: u32,
    /// Keywords searched in order; each gets its own paged search.
    pub keywords: Vec<String>,
    pub filters: FilterSpec,
}

impl JobRequest {
    #[must_use]
    pub fn builder() -> JobRequestBuilder {
        JobRequestBuilder::default()
    }
}

/// Accumulates job fields and validates completeness in [`build`](Self::build).
#[derive(Debug, Default)]
pub struct JobRequestBuilder {
    location: Option<String>,
    radius_meters: Option<u32>,
    keywords: Vec<String>,
    filters: FilterSpec,
}

impl JobRequestBuilder {
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn radius_meters(mut self, radius: u32) -> Self {
        self.radius_meters = Some(radius);
        self
    }

    #[must_use]
    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    #[must_use]
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn filters(mut self, filters: FilterSpec) -> Self {
        self.filters = filters;
        self
    }

    /// Validates the accumulated fields and produces an immutable request.
    ///
    /// # Errors
    ///
    /// Returns `JobRequestError` when the location is missing or blank, the
    /// radius is zero or unset, the keyword list is empty, or any keyword is
    /// blank.
    pub fn build(self) -> Result<JobRequest, JobRequestError> {
        let location = self
            .location
            .filter(|l| !l.trim().is_empty())
            .ok_or(JobRequestError::MissingLocation)?;

        let radius_meters = match self.radius_meters {
            Some(r) if r > 0 => r,
            _ => return Err(JobRequestError::InvalidRadius),
        };

        if self.keywords.is_empty() {
            return Err(JobRequestError::NoKeywords);
        }
        if let Some(pos) = self.keywords.iter().position(|k| k.trim().is_empty()) {
            return Err(JobRequestError::EmptyKeyword(pos));
        }

        Ok(JobRequest {
            location,
            radius_meters,
            keywords: self.keywords,
            filters: self.filters,
        })
    }
}

#[cfg(test)]
#[path = "job_test.rs"]
mod tests;
