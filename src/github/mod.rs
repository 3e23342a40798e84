//! GitHub REST access: repository listing and per-repository language totals.

mod aggregator;
mod lister;
mod types;

pub use aggregator::{FailurePolicy, LanguageTotals, aggregate_languages};
pub use lister::{MAX_PAGES, PAGE_SIZE};
pub use types::RepoSummary;

use reqwest::Url;

use crate::error::{CardError, Result};
use crate::http::HttpClient;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Thin view of the GitHub API rooted at a base URL.
///
/// The base URL may carry a path prefix (GitHub Enterprise `/api/v3`).
pub struct GitHubApi<'a, C: HttpClient + ?Sized> {
    client: &'a C,
    base: Url,
}

impl<'a, C: HttpClient + ?Sized> GitHubApi<'a, C> {
    /// # Errors
    /// Returns a configuration error if `base_url` is not an absolute http(s) URL.
    pub fn new(client: &'a C, base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| CardError::Config(format!("Invalid API base URL '{base_url}': {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(CardError::Config(format!(
                "Invalid API base URL (must start with http:// or https://): {base_url}"
            )));
        }
        Ok(Self { client, base })
    }

    /// Build an endpoint URL from path segments, percent-encoding each one.
    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| CardError::Config(format!("API base URL cannot be a base: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn get(&self, url: &Url) -> Result<String> {
        self.client.get(url.as_str())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
