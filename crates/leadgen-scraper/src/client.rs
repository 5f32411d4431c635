//! HTTP client for the geo-search provider.
//!
//! Wraps `reqwest` with provider-specific URL building, API key management,
//! and typed response deserialization. The client reports transport and
//! HTTP-level failures; interpreting the in-body `status` envelope of search
//! pages is left to the collector, which owns the OK / ZERO_RESULTS / fatal
//! distinction. Geocoding is the exception: its status check lives here
//! because a non-OK geocode is always fatal.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::CollectError;
use crate::types::{DetailsResponse, GeocodeResponse, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/";

const NEARBY_PATH: &str = "maps/api/place/nearbysearch/json";
const DETAILS_PATH: &str = "maps/api/place/details/json";
const GEOCODE_PATH: &str = "maps/api/geocode/json";

/// Detail fields requested per place; anything beyond these is billed waste.
const DETAIL_FIELDS: &str = "name,formatted_address,formatted_phone_number,website,rating";

/// Client for the nearby-search, place-details, and geocode endpoints.
///
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a client pointed at the production provider.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, CollectError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CollectError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, CollectError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // joined endpoint paths land under the root rather than replacing the
        // last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CollectError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Resolves a free-text address to a `"lat,lng"` coordinate pair.
    ///
    /// Single call, no retries: a failed geocode aborts the job.
    ///
    /// # Errors
    ///
    /// - [`CollectError::Geocode`] when the provider status is not `OK` or
    ///   the result list is empty.
    /// - [`CollectError::Http`] / [`CollectError::UnexpectedStatus`] on
    ///   transport or HTTP failure.
    /// - [`CollectError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn geocode(&self, address: &str) -> Result<String, CollectError> {
        let url = self.build_url(GEOCODE_PATH, &[("address", address)]);
        let body: GeocodeResponse = self
            .request_json(url, &format!("geocode({address})"))
            .await?;

        if body.status != "OK" || body.results.is_empty() {
            return Err(CollectError::Geocode {
                address: address.to_owned(),
                status: body.status,
            });
        }

        let loc = &body.results[0].geometry.location;
        Ok(format!("{},{}", loc.lat, loc.lng))
    }

    /// Fetches one page of nearby-search results.
    ///
    /// When `page_token` is `Some`, the request carries only the token and
    /// the API key: the provider's pagination contract ignores the original
    /// location/radius/keyword parameters on token fetches.
    ///
    /// The in-body `status` is returned uninterpreted.
    ///
    /// # Errors
    ///
    /// [`CollectError::Http`], [`CollectError::UnexpectedStatus`], or
    /// [`CollectError::Deserialize`].
    pub async fn nearby_page(
        &self,
        center: &str,
        radius_meters: u32,
        keyword: &str,
        page_token: Option<&str>,
    ) -> Result<SearchResponse, CollectError> {
        let radius = radius_meters.to_string();
        let url = match page_token {
            Some(token) => self.build_url(NEARBY_PATH, &[("pagetoken", token)]),
            None => self.build_url(
                NEARBY_PATH,
                &[
                    ("location", center),
                    ("radius", &radius),
                    ("keyword", keyword),
                ],
            ),
        };
        self.request_json(url, &format!("nearby_search({keyword})"))
            .await
    }

    /// Fetches the detail fields for one place identifier.
    ///
    /// The in-body `status` is returned uninterpreted; detail failures are
    /// per-candidate and non-fatal, so the collector decides what to skip.
    ///
    /// # Errors
    ///
    /// [`CollectError::Http`], [`CollectError::UnexpectedStatus`], or
    /// [`CollectError::Deserialize`].
    pub async fn place_details(&self, place_id: &str) -> Result<DetailsResponse, CollectError> {
        let url = self.build_url(
            DETAILS_PATH,
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        );
        self.request_json(url, &format!("place_details({place_id})"))
            .await
    }

    /// Builds an endpoint URL with the given query parameters plus the API
    /// key, which always goes last.
    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(path);
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        url
    }

    /// Issues a GET, enforces a 2xx status, and decodes the body into `T`.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, CollectError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CollectError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| CollectError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
