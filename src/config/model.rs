use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, Result};
use crate::github::{DEFAULT_API_BASE, FailurePolicy};
use crate::http::DEFAULT_TIMEOUT_SECS;
use crate::leetcode::DEFAULT_ENDPOINT;
use crate::selection::SelectionConfig;

pub const DEFAULT_LANGUAGES_OUTPUT: &str = "assets/languages-card.svg";
pub const DEFAULT_LEETCODE_OUTPUT: &str = "assets/leetcode-card.svg";

// ============================================================================
// File config (`.stat-cards.toml`)
// ============================================================================

/// Contents of a config file. Every key is optional; unset keys fall through
/// to built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub languages: LanguagesSection,

    #[serde(default)]
    pub leetcode: LeetcodeSection,
}

/// `[languages]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LanguagesSection {
    pub user: Option<String>,
    pub output: Option<PathBuf>,
    pub top_n: Option<usize>,
    pub min_pct: Option<u32>,
    pub min_bytes: Option<u64>,
    /// Replaces the built-in deny list when set.
    pub deny: Option<Vec<String>>,
    pub api_base: Option<String>,
    pub icons: Option<PathBuf>,
    pub policy: Option<FailurePolicy>,
    pub timeout_secs: Option<u64>,
}

/// `[leetcode]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LeetcodeSection {
    pub user: Option<String>,
    pub output: Option<PathBuf>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Trim deny entries and drop blank ones, so `"Dockerfile, Shell"` matches
/// `Shell`.
fn clean_deny_list(list: Vec<String>) -> Vec<String> {
    list.into_iter()
        .filter_map(|entry| {
            let trimmed = entry.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect()
}

// ============================================================================
// Resolved pipeline configs
// ============================================================================

/// Everything the languages pipeline needs. Built once, never read from the
/// environment afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagesConfig {
    pub user: String,
    pub output: PathBuf,
    pub selection: SelectionConfig,
    /// Absent token means unauthenticated requests.
    pub token: Option<String>,
    pub api_base: String,
    /// Extra icon dataset merged over the built-in one.
    pub icons: Option<PathBuf>,
    pub policy: FailurePolicy,
    pub timeout: Duration,
}

impl LanguagesConfig {
    /// Fill unset `overrides` from `section`, then from defaults.
    ///
    /// # Errors
    /// Returns a configuration error if the result fails [`Self::validate`].
    pub fn resolve(
        overrides: LanguagesSection,
        token: Option<String>,
        section: &LanguagesSection,
    ) -> Result<Self> {
        let defaults = SelectionConfig::default();
        let config = Self {
            user: overrides
                .user
                .or_else(|| section.user.clone())
                .unwrap_or_default(),
            output: overrides
                .output
                .or_else(|| section.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LANGUAGES_OUTPUT)),
            selection: SelectionConfig {
                deny: overrides
                    .deny
                    .or_else(|| section.deny.clone())
                    .map_or(defaults.deny, clean_deny_list),
                min_bytes: overrides
                    .min_bytes
                    .or(section.min_bytes)
                    .unwrap_or(defaults.min_bytes),
                min_pct: overrides
                    .min_pct
                    .or(section.min_pct)
                    .unwrap_or(defaults.min_pct),
                top_n: overrides.top_n.or(section.top_n).unwrap_or(defaults.top_n),
            },
            token: token.filter(|t| !t.trim().is_empty()),
            api_base: overrides
                .api_base
                .or_else(|| section.api_base.clone())
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            icons: overrides.icons.or_else(|| section.icons.clone()),
            policy: overrides.policy.or(section.policy).unwrap_or_default(),
            timeout: Duration::from_secs(
                overrides
                    .timeout_secs
                    .or(section.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns a configuration error for an empty user, a zero timeout or
    /// out-of-range selection values.
    pub fn validate(&self) -> Result<()> {
        validate_user(&self.user, "GitHub user (--user / GH_USER)")?;
        validate_timeout(self.timeout)?;
        self.selection.validate()
    }
}

/// Everything the LeetCode pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeetcodeConfig {
    pub user: String,
    pub output: PathBuf,
    pub endpoint: String,
    pub timeout: Duration,
}

impl LeetcodeConfig {
    /// # Errors
    /// Returns a configuration error if the result fails [`Self::validate`].
    pub fn resolve(overrides: LeetcodeSection, section: &LeetcodeSection) -> Result<Self> {
        let config = Self {
            user: overrides
                .user
                .or_else(|| section.user.clone())
                .unwrap_or_default(),
            output: overrides
                .output
                .or_else(|| section.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LEETCODE_OUTPUT)),
            endpoint: overrides
                .endpoint
                .or_else(|| section.endpoint.clone())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout: Duration::from_secs(
                overrides
                    .timeout_secs
                    .or(section.timeout_secs)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        };
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    /// Returns a configuration error for an empty user or endpoint.
    pub fn validate(&self) -> Result<()> {
        validate_user(&self.user, "LeetCode user (--user / LEETCODE_USERNAME)")?;
        validate_timeout(self.timeout)?;
        if self.endpoint.trim().is_empty() {
            return Err(CardError::Config("endpoint must not be empty".to_string()));
        }
        Ok(())
    }
}

fn validate_user(user: &str, what: &str) -> Result<()> {
    if user.trim().is_empty() {
        return Err(CardError::Config(format!("{what} is required")));
    }
    Ok(())
}

fn validate_timeout(timeout: Duration) -> Result<()> {
    if timeout.is_zero() {
        return Err(CardError::Config(
            "timeout_secs must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
