//! Provider API response envelopes.
//!
//! ## Observed shapes
//!
//! Every endpoint wraps its payload in an envelope with a `status` string.
//! `"OK"` means usable results; the nearby-search endpoint additionally uses
//! `"ZERO_RESULTS"` as a non-error terminal state. Any other status
//! (`"REQUEST_DENIED"`, `"OVER_QUERY_LIMIT"`, `"INVALID_REQUEST"`, ...) comes
//! with an optional human-readable `error_message`.
//!
//! `next_page_token` appears on a search response only when more pages
//! exist; the token becomes valid a couple of seconds after it is issued,
//! which is why the collector waits before redeeming it.
//!
//! Detail fields are all optional in practice: places without a phone,
//! website, or rating simply omit the field.

use serde::Deserialize;

/// Envelope of one nearby-search page.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<SearchResult>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One search result. Only the identifier is consumed; everything else about
/// the place comes from the details endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub place_id: String,
}

/// Envelope of a place-details response.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetail>,
}

/// The requested detail fields for one place.
#[derive(Debug, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Envelope of a geocode response.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
