//! Best-effort contact-page email harvesting.
//!
//! Two fetch attempts maximum per website: the page itself, then `/contact`
//! on the same origin. No recursive crawling. Every failure inside this
//! module is absorbed; "no email found" is a first-class empty result, never
//! an error.

use std::collections::BTreeSet;
use std::time::Duration;

use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};

use crate::error::CollectError;

const EMAIL_PATTERN: &str = r"(?i)[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}";

/// Asset-path suffixes that the email pattern over-matches (e.g.
/// `logo@2x.png` style srcset names).
const IMAGE_SUFFIXES: [&str; 5] = [".png", ".jpg", ".jpeg", ".gif", ".webp"];

/// Extracts email addresses from a website's landing and contact pages.
pub struct EmailHarvester {
    client: Client,
    email_regex: Regex,
    anchor_selector: Selector,
}

impl EmailHarvester {
    /// Creates a harvester with its own HTTP client (same timeout and
    /// user-agent policy as the provider client).
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`CollectError::Harvester`] if the internal pattern
    /// setup fails.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, CollectError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let email_regex = Regex::new(EMAIL_PATTERN).map_err(|e| CollectError::Harvester {
            reason: e.to_string(),
        })?;
        let anchor_selector = Selector::parse("a[href]").map_err(|e| CollectError::Harvester {
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            email_regex,
            anchor_selector,
        })
    }

    /// Harvests emails for a website URL.
    ///
    /// Tries the URL itself first, then `/contact` resolved against the same
    /// origin; the second page is only fetched when the first yields nothing.
    /// Failed fetches are logged at `debug` and skipped.
    ///
    /// Returns the lowercased, alphabetically sorted, semicolon-joined set,
    /// or the empty string.
    pub async fn harvest(&self, website: &str) -> String {
        let mut found: BTreeSet<String> = BTreeSet::new();

        for target in candidate_pages(website) {
            match self.fetch_page(&target).await {
                Ok(body) => {
                    found.extend(self.extract_emails(&body));
                    if !found.is_empty() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::debug!(url = %target, error = %e, "contact page fetch failed; trying next candidate");
                }
            }
        }

        found.into_iter().collect::<Vec<_>>().join(";")
    }

    /// Email-like tokens from the document's text nodes and anchor targets
    /// (which covers `mailto:` links), lowercased and filtered of asset-path
    /// false positives.
    fn extract_emails(&self, html: &str) -> BTreeSet<String> {
        let document = Html::parse_document(html);

        let mut blob: String = document.root_element().text().collect::<Vec<_>>().join(" ");
        for anchor in document.select(&self.anchor_selector) {
            if let Some(href) = anchor.value().attr("href") {
                blob.push(' ');
                blob.push_str(href);
            }
        }

        self.email_regex
            .find_iter(&blob)
            .map(|m| m.as_str().to_lowercase())
            .filter(|email| !IMAGE_SUFFIXES.iter().any(|suffix| email.ends_with(suffix)))
            .collect()
    }

    async fn fetch_page(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.text().await
    }
}

/// The at-most-two candidate pages for a website: the URL itself and
/// `/contact` on the same origin. An unparsable URL yields just itself (the
/// fetch will fail and be skipped).
fn candidate_pages(website: &str) -> Vec<String> {
    let mut pages = vec![website.to_owned()];
    if let Ok(contact) = reqwest::Url::parse(website).and_then(|u| u.join("/contact")) {
        let contact = contact.to_string();
        if contact != website {
            pages.push(contact);
        }
    }
    pages
}

#[cfg(test)]
#[path = "harvest_test.rs"]
mod tests;
