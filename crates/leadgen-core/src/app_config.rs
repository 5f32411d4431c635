/// Runtime configuration for a lead-collection deployment.
///
/// Constructed once at startup (see [`crate::config::load_app_config`]) and
/// passed by reference into every component; nothing downstream reads
/// process-wide environment state directly.
#[derive(Clone)]
pub struct AppConfig {
    /// Geo-search provider API key.
    pub google_api_key: String,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Per-request HTTP timeout, applied to provider calls and contact-page
    /// fetches alike.
    pub http_timeout_secs: u64,
    /// User-Agent sent on every outbound request.
    pub user_agent: String,
    /// Provider-mandated delay before fetching a next-page token.
    pub page_token_delay_ms: u64,
    /// Lower bound of the per-candidate politeness jitter.
    pub detail_jitter_min_ms: u64,
    /// Upper bound of the per-candidate politeness jitter.
    pub detail_jitter_max_ms: u64,
    /// Defensive ceiling on pages fetched per keyword.
    pub max_pages_per_keyword: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("google_api_key", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("page_token_delay_ms", &self.page_token_delay_ms)
            .field("detail_jitter_min_ms", &self.detail_jitter_min_ms)
            .field("detail_jitter_max_ms", &self.detail_jitter_max_ms)
            .field("max_pages_per_keyword", &self.max_pages_per_keyword)
            .finish()
    }
}
