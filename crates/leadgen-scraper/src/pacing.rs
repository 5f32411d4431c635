//! Provider-mandated and politeness delays.
//!
//! Two distinct delays with different contracts:
//!
//! - the page-token delay (~2.2 s) is required by the provider's terms
//!   before a next-page token may be redeemed; skipping it is a policy
//!   violation that invites throttling, not a crash.
//! - the per-candidate jitter (100..=200 ms) spreads detail fetches so they
//!   don't read as a burst. Not correctness-critical.

use std::time::Duration;

use rand::Rng;

/// Delay policy for one collection run.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub page_token_delay_ms: u64,
    pub detail_jitter_min_ms: u64,
    pub detail_jitter_max_ms: u64,
}

impl Pacing {
    #[must_use]
    pub fn new(
        page_token_delay_ms: u64,
        detail_jitter_min_ms: u64,
        detail_jitter_max_ms: u64,
    ) -> Self {
        Self {
            page_token_delay_ms,
            detail_jitter_min_ms,
            detail_jitter_max_ms: detail_jitter_max_ms.max(detail_jitter_min_ms),
        }
    }

    /// No delays at all; for tests.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0, 0, 0)
    }

    /// Sleeps the mandated delay before a next-page token fetch.
    pub async fn next_page_delay(&self) {
        if self.page_token_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.page_token_delay_ms)).await;
        }
    }

    /// Sleeps a uniformly random jitter after processing one candidate.
    pub async fn detail_jitter(&self) {
        if self.detail_jitter_max_ms == 0 {
            return;
        }
        let ms = rand::rng().random_range(self.detail_jitter_min_ms..=self.detail_jitter_max_ms);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
