//! Job center resolution.

use crate::client::PlacesClient;
use crate::error::CollectError;

/// Resolves a job location to a `"lat,lng"` coordinate pair.
///
/// Input that already contains a comma is treated as literal coordinates and
/// passed through unchanged; no geocoding call is made. Anything else goes
/// through a single geocode request.
///
/// # Errors
///
/// Propagates [`CollectError::Geocode`] (and transport-level errors) from
/// [`PlacesClient::geocode`]. A failed geocode aborts the entire job.
pub async fn resolve_center(
    client: &PlacesClient,
    location: &str,
) -> Result<String, CollectError> {
    if location.contains(',') {
        return Ok(location.to_owned());
    }
    let center = client.geocode(location).await?;
    tracing::info!(location, center, "geocoded job location");
    Ok(center)
}
