use thiserror::Error;

/// Fatal failures of a collection run.
///
/// Per-candidate problems (a failed detail fetch, an unreachable contact
/// page) are not represented here. They are logged and absorbed inside the
/// collector so a single bad place never aborts the job.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("geocoding failed for {address:?}: provider status {status}")]
    Geocode { address: String, status: String },

    #[error("search provider error for keyword {keyword:?}: {status}: {message}")]
    Provider {
        keyword: String,
        status: String,
        /// The provider's `error_message`, surfaced verbatim.
        message: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination limit for keyword {keyword:?}: exceeded {max_pages} pages")]
    PaginationLimit { keyword: String, max_pages: usize },

    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("email harvester setup failed: {reason}")]
    Harvester { reason: String },
}
