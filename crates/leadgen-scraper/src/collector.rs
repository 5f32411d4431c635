//! The lead-collection pipeline core.
//!
//! One [`LeadCollector::collect`] call runs one job to completion: resolve
//! the center, walk each keyword's result pages in order, enrich each unseen
//! place with details and harvested emails, filter, and accumulate. All
//! state (the seen set, the output sequence) is scoped to the call; nothing
//! survives across jobs.

use std::collections::HashSet;

use leadgen_core::{FilterSpec, JobRequest, LeadCollection, LeadRecord};

use crate::client::PlacesClient;
use crate::error::CollectError;
use crate::geo::resolve_center;
use crate::harvest::EmailHarvester;
use crate::pacing::Pacing;

/// Orchestrates paged search, dedup, enrichment, and filtering for one job
/// at a time. Holds no per-job state, so one collector can serve sequential
/// jobs and separate collectors can run concurrently.
pub struct LeadCollector {
    client: PlacesClient,
    harvester: EmailHarvester,
    pacing: Pacing,
    /// Defensive ceiling on pages per keyword. The provider caps pagination
    /// at a handful of pages on its own; this bound only exists to stop a
    /// misbehaving token loop.
    max_pages_per_keyword: usize,
}

impl LeadCollector {
    #[must_use]
    pub fn new(
        client: PlacesClient,
        harvester: EmailHarvester,
        pacing: Pacing,
        max_pages_per_keyword: usize,
    ) -> Self {
        Self {
            client,
            harvester,
            pacing,
            max_pages_per_keyword,
        }
    }

    /// Runs one collection job to completion.
    ///
    /// Keywords are processed in request order, independently: zero results
    /// for one keyword never blocks the next. A place identifier is fetched
    /// at most once per job, even when it recurs under a later keyword or
    /// page. An empty collection is a valid terminal state, distinct from
    /// any error.
    ///
    /// # Errors
    ///
    /// - [`CollectError::Geocode`] when the free-text location cannot be
    ///   resolved.
    /// - [`CollectError::Provider`] when the search provider returns a
    ///   status other than `OK` or `ZERO_RESULTS`; the whole job aborts with
    ///   no partial results.
    /// - [`CollectError::PaginationLimit`] when a keyword's token chain
    ///   exceeds the configured page ceiling.
    /// - Transport and decode errors on search/geocode calls.
    pub async fn collect(&self, job: &JobRequest) -> Result<LeadCollection, CollectError> {
        let center = resolve_center(&self.client, &job.location).await?;

        let mut leads = LeadCollection::new();
        let mut seen: HashSet<String> = HashSet::new();

        for keyword in &job.keywords {
            tracing::info!(keyword, "searching keyword");
            self.collect_keyword(
                &center,
                job.radius_meters,
                keyword,
                &job.filters,
                &mut seen,
                &mut leads,
            )
            .await?;
        }

        tracing::info!(lead_count = leads.len(), "collection finished");
        Ok(leads)
    }

    /// Walks one keyword's pages: first page by query, further pages purely
    /// by token until the provider stops issuing one.
    async fn collect_keyword(
        &self,
        center: &str,
        radius_meters: u32,
        keyword: &str,
        filters: &FilterSpec,
        seen: &mut HashSet<String>,
        leads: &mut LeadCollection,
    ) -> Result<(), CollectError> {
        let mut page_token: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > self.max_pages_per_keyword {
                return Err(CollectError::PaginationLimit {
                    keyword: keyword.to_owned(),
                    max_pages: self.max_pages_per_keyword,
                });
            }

            // Token fetches must wait out the provider-mandated pacing delay.
            if page_token.is_some() {
                self.pacing.next_page_delay().await;
            }

            let page = self
                .client
                .nearby_page(center, radius_meters, keyword, page_token.as_deref())
                .await?;

            match page.status.as_str() {
                "OK" => {}
                "ZERO_RESULTS" => {
                    tracing::info!(keyword, "no results for keyword");
                    return Ok(());
                }
                status => {
                    return Err(CollectError::Provider {
                        keyword: keyword.to_owned(),
                        status: status.to_owned(),
                        message: page.error_message.unwrap_or_else(|| {
                            "An unknown error occurred with the search provider.".to_string()
                        }),
                    });
                }
            }

            for result in &page.results {
                if !seen.insert(result.place_id.clone()) {
                    continue;
                }

                let Some(record) = self.enrich(&result.place_id).await else {
                    continue;
                };

                if !filters.accepts(&record) {
                    tracing::debug!(name = %record.name, "record rejected by filters");
                    continue;
                }

                leads.push(record);
                self.pacing.detail_jitter().await;
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => return Ok(()),
            }
        }
    }

    /// Fetches details for one candidate and harvests emails when a website
    /// is present. Every failure here is per-candidate and non-fatal:
    /// returns `None` and the collector moves on.
    async fn enrich(&self, place_id: &str) -> Option<LeadRecord> {
        let details = match self.client.place_details(place_id).await {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!(place_id, error = %e, "detail fetch failed; skipping candidate");
                return None;
            }
        };

        if details.status != "OK" {
            tracing::warn!(place_id, status = %details.status, "could not get details; skipping candidate");
            return None;
        }
        let Some(detail) = details.result else {
            tracing::warn!(place_id, "details response has no result object; skipping candidate");
            return None;
        };

        let website = detail.website.unwrap_or_default();
        let email = if website.is_empty() {
            String::new()
        } else {
            self.harvester.harvest(&website).await
        };

        Some(LeadRecord {
            name: detail.name.unwrap_or_default(),
            address: detail.formatted_address.unwrap_or_default(),
            phone: detail.formatted_phone_number.unwrap_or_default(),
            website,
            email,
            rating: detail.rating,
        })
    }
}
