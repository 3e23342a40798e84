use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::GitHubApi;
use super::types::RepoSummary;
use crate::error::{CardError, Result};
use crate::http::HttpClient;
use crate::output::FetchProgress;

/// What to do when one repository's language breakdown cannot be fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the whole run; a partial chart is worse than no update.
    #[default]
    Strict,
    /// Log the failure, skip the repository and keep going.
    Lenient,
}

/// Cumulative bytes per language across all repositories.
///
/// Iteration follows discovery order: the first time a language was seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTotals {
    bytes: IndexMap<String, u64>,
}

impl LanguageTotals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `bytes` to `language`. Non-positive counts are ignored; totals
    /// saturate at `u64::MAX`.
    pub fn add(&mut self, language: &str, bytes: i64) {
        let Ok(bytes) = u64::try_from(bytes) else {
            return;
        };
        if bytes == 0 {
            return;
        }
        let total = self.bytes.entry(language.to_string()).or_insert(0);
        *total = total.saturating_add(bytes);
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<u64> {
        self.bytes.get(language).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.bytes
            .values()
            .fold(0, |acc: u64, &bytes| acc.saturating_add(bytes))
    }

    /// Entries in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.bytes.iter().map(|(name, &bytes)| (name.as_str(), bytes))
    }
}

impl<S: AsRef<str>> FromIterator<(S, i64)> for LanguageTotals {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut totals = Self::new();
        for (language, bytes) in iter {
            totals.add(language.as_ref(), bytes);
        }
        totals
    }
}

impl<C: HttpClient + ?Sized> GitHubApi<'_, C> {
    /// Fetch the language → bytes breakdown of one repository.
    ///
    /// # Errors
    /// Fails on transport errors or when the body is not a map of integers.
    pub fn repo_languages(&self, owner: &str, repo: &str) -> Result<IndexMap<String, i64>> {
        let url = self.endpoint(&["repos", owner, repo, "languages"], &[])?;
        let body = self.get(&url)?;
        serde_json::from_str(&body).map_err(|e| {
            CardError::data_shape(
                url.as_str(),
                format!("expected a map of language byte counts: {e}"),
                &body,
            )
        })
    }
}

/// Sum language bytes over `repos`, one repository at a time.
///
/// # Errors
/// Under [`FailurePolicy::Strict`] the first failing repository aborts the run.
pub fn aggregate_languages<C: HttpClient + ?Sized>(
    api: &GitHubApi<'_, C>,
    owner: &str,
    repos: &[RepoSummary],
    policy: FailurePolicy,
    progress: &FetchProgress,
) -> Result<LanguageTotals> {
    let mut totals = LanguageTotals::new();
    let mut skipped = 0usize;

    for repo in repos {
        progress.set_message(&repo.name);
        match api.repo_languages(owner, &repo.name) {
            Ok(languages) => {
                for (language, bytes) in &languages {
                    totals.add(language, *bytes);
                }
            }
            Err(e) if policy == FailurePolicy::Lenient => {
                log::warn!("Skipping repository {}: {e}", repo.name);
                skipped += 1;
            }
            Err(e) => {
                progress.finish();
                return Err(e);
            }
        }
        progress.inc();
    }
    progress.finish();

    if skipped > 0 {
        log::warn!("Skipped {skipped} of {} repositories", repos.len());
    }
    log::debug!(
        "Aggregated {} languages, {} bytes total",
        totals.len(),
        totals.total_bytes()
    );
    Ok(totals)
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
